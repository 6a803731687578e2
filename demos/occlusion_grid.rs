//! ASCII view of the occlusion field.
//!
//! Samples the shading model on a plane through the swarm and prints a
//! brightness ramp, once per theme.
//! Run with: `cargo run --example occlusion_grid`

use shoal::prelude::*;

const RAMP: &[u8] = b" .:-=+*#%@";

fn print_field(driver: &FrameDriver, theme: Theme) {
    let inputs = driver.shading_inputs();
    let center = driver.center();

    for row in 0..24 {
        let mut line = String::with_capacity(64);
        for col in 0..64 {
            let point = center
                + Vec3::new(
                    (col as f32 - 32.0) * 2.5,
                    (12.0 - row as f32) * 4.0,
                    0.0,
                );
            let value = occlusion::shade(point, Vec3::Z, inputs, theme);
            // Dark theme values run up to 20.25; scale both into the ramp.
            let brightness = match theme {
                Theme::Light => value,
                Theme::Dark => (value / 20.25).min(1.0),
            };
            let idx = (brightness * (RAMP.len() - 1) as f32).round() as usize;
            line.push(RAMP[idx.min(RAMP.len() - 1)] as char);
        }
        println!("{line}");
    }
}

fn main() -> Result<(), SetupError> {
    let mut driver = Simulation::new()
        .with_body_count(80)
        .with_seed(7)
        .build()?;

    // Let the swarm pull into shape first.
    for frame in 0..240 {
        driver.advance(frame as f32 / 60.0, None);
    }

    println!("light theme:");
    print_field(&driver, Theme::Light);

    println!("\ndark theme:");
    print_field(&driver, Theme::Dark);

    Ok(())
}
