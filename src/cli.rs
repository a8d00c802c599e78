//! Command-line arguments.

use clap::Parser;
use ruler::DeviceDensity;

/// An on-screen ruler calibrated to the display's density.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ruler-gui", version, about)]
pub struct Args {
    /// Screen density in dots per inch, instead of the one reported by the system
    #[arg(long, value_name = "N")]
    pub dpi: Option<DeviceDensity>,

    /// Major tick length in points, instead of the stored setting
    #[arg(long, value_name = "DP", value_parser = parse_tick_length)]
    pub tick_length: Option<f32>,
}

fn parse_tick_length(s: &str) -> Result<f32, String> {
    let value: f32 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("tick length must be a positive number, got {value}"))
    }
}
