//! Example: Trace one full motion cycle.
//!
//! This example demonstrates how to:
//! - Load axis profiles from TOML (or use a built-in one)
//! - Generate a curve table from the profile's shape
//! - Pull delays through acceleration, cruise and deceleration
//!
//! Run with: `cargo run --example ramp_trace --features std [-- axes.toml [profile]]`

use scurve_stepper::{
    config::{load_config, parse_config},
    error::Result,
    CurveTable, Phase,
};

const DEFAULT_CONFIG: &str = r#"
[profiles.x_axis]
transition_time_us = 10000
cruise_delay_us = 100
shape = "sinusoidal"
table_size = 4096
"#;

/// Steps spent cruising before requesting the stop.
const CRUISE_STEPS: u32 = 20;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(path)?,
        None => parse_config(DEFAULT_CONFIG)?,
    };
    let name = args.next().unwrap_or_else(|| "x_axis".to_string());

    let profile = config.require_profile(&name)?;
    let samples = profile.generate_table()?;
    let table = CurveTable::new(&samples)?;
    let mut generator = profile.build(table)?;

    let timing = generator.timing();
    println!("=== Profile '{}' ({:?}) ===", name, profile.shape);
    println!("  kt:               {:.3}", timing.kt());
    println!("  ramp steps:       {}", timing.transition_steps());
    println!("  cruise delay:     {:.3} us", timing.cruise_delay());
    println!("  ramp duration:    {:.1} us", timing.ramp_duration_us());
    println!();

    let mut elapsed_us: u64 = 0;
    let mut step: u32 = 0;
    let mut cruised: u32 = 0;

    generator.start();
    while !generator.is_stopped() {
        let phase = generator.phase();
        let delay = generator.next_delay_us();
        elapsed_us += u64::from(delay);
        step += 1;

        println!("{:>5}  {:<13} {:>7} us  t = {:>8} us", step, format!("{:?}", phase), delay, elapsed_us);

        if phase == Phase::Cruising {
            cruised += 1;
            if cruised == CRUISE_STEPS {
                generator.stop();
            }
        }
    }

    println!();
    println!("{} steps in {} us", step, elapsed_us);

    Ok(())
}
