//! Example: Load and inspect a rig configuration.
//!
//! This example demonstrates how to:
//! - Load a rig configuration from TOML
//! - Resolve motor channels and axis calibration
//! - Convert a millimetre move into microstep counts
//!
//! Run with: `cargo run --example load_and_print -- config/rig.toml`

use std::process::ExitCode;

use rig_config::{load_config, RigConfig};

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/rig.toml".to_string());

    let config: RigConfig = match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            // A bad configuration means no motor may be driven; there is
            // nothing to fall back to.
            eprintln!("Refusing to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Loaded {}", path);
    println!();

    println!("Motors:");
    for (name, channel) in config.motors.iter() {
        println!("  {:<12} -> channel {}", name, channel.value());
    }

    println!("Calibration:");
    for (axis, factor) in config.calibration.iter() {
        println!("  {:<16} {} steps/mm", axis, factor.value());
    }

    println!(
        "Stepping: style={} delay={}s",
        config.step_style,
        config.step_delay.value()
    );

    // What a 12.5 mm X move would cost in microsteps.
    if let Some(cal) = config.steps_per_mm("steps_per_mm_x") {
        println!("12.5 mm on X = {} microsteps", cal.steps_for(12.5));
    }

    ExitCode::SUCCESS
}
