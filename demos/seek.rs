//! Headless swarm run.
//!
//! Ticks a seeded swarm at a fixed 60 fps timestep and prints where the
//! flock is, with a burst of pointer repulsion halfway through.
//! Run with: `cargo run --example seek`

use shoal::prelude::*;

fn main() -> Result<(), SetupError> {
    let mut driver = Simulation::new()
        .with_body_count(150)
        .with_shading_capacity(256)
        .with_seed(42)
        .build()?;

    println!("bodies: {}", driver.bodies().len());

    for frame in 0..600usize {
        let t = frame as f32 / 60.0;

        // Sweep the pointer through the swarm for a second.
        let hit = (180..240).contains(&frame).then(|| {
            driver.pointer_moved(Vec2::new(0.0, 0.0));
            let x = (frame as f32 - 210.0) * 2.0;
            Vec3::new(x, 0.0, 0.0)
        });

        driver.advance(t, hit);

        if frame % 60 == 0 {
            let center = driver.center();
            let eye = driver.camera_eye(t);
            println!(
                "t={t:5.2}s  center=({:8.2}, {:8.2}, {:8.2})  camera=({:8.2}, {:8.2}, {:8.2})",
                center.x, center.y, center.z, eye.x, eye.y, eye.z
            );
        }
    }

    Ok(())
}
