//! Demo showing the per-frame slicing loop of a volume viewer.
//!
//! Orbits a camera around a CT-sized volume and reports how much geometry
//! each frame produces. Run with `RUST_LOG=debug` to see the slicer's own
//! logging. An options file may be given as the first argument; otherwise
//! `~/.volslice.json` is used and created if missing.

use std::path::PathBuf;

use volslice::*;

fn main() -> Result<()> {
    init_logging();

    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(Options::default_path, PathBuf::from);
    let options = Options::load_or_create(&config_path)?;
    log::info!(
        "Using {} to {} slices, {} view",
        options.min_slices,
        options.max_slices,
        options.default_orientation.name()
    );

    // 512 x 512 x 300 CT series, 0.7 mm in-plane spacing, 1.5 mm slices
    let volume = VolumeGeometry::new(UVec3::new(512, 512, 300), Vec3::new(0.7, 0.7, 1.5))?;
    let size = volume.size_mm();
    println!(
        "Volume {} voxels, {:.1} x {:.1} x {:.1} mm",
        volume.voxel_count(),
        size.x,
        size.y,
        size.z
    );

    let mut context = RenderContext::new(volume, options);

    // A short drag: interactive density while moving, full density on release
    let frames = 8;
    for frame in 0..=frames {
        let moving = frame < frames;
        context.set_moving(moving);
        if moving {
            context.camera_mut().orbit(0.15, 0.05);
        }

        if context.update_slices()? {
            let mesh = context.mesh();
            println!(
                "frame {frame}: {} slices, {} vertices, {} triangles{}",
                context.slicer().slice_count(),
                mesh.vertices().len(),
                mesh.triangle_count(),
                if moving { "" } else { " (still)" }
            );
        }
    }

    // Nothing changed since the last frame, so nothing is recomputed
    if !context.update_slices()? {
        println!("idle frame: slices reused");
    }

    Ok(())
}
