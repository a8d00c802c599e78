//! Unit conversion between real-world lengths and device pixels.
//!
//! This module provides the calibration value types and the single
//! conversion every other part of the ruler is built on:
//! - `CalibrationFactor` (bounded DPI correction)
//! - `UnitChoice` (centimeters or inches)
//! - `DeviceDensity` (dots per inch, fixed for the process lifetime)
//! - `pixels_per_unit` / `Calibration::pixels_per_unit`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RulerError, RulerResult};

/// Centimeters in one inch.
pub const CM_PER_INCH: f32 = 2.54;

/// Density used when the platform cannot report one.
pub const FALLBACK_DPI: u32 = 240;

/// Baseline DPI of one logical point on desktop platforms.
pub const LOGICAL_DPI: f32 = 96.0;

/// Multiplicative correction applied on top of the DPI-derived pixel scale.
///
/// Always within `[MIN, MAX]`; every constructor clamps, deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct CalibrationFactor(f32);

impl CalibrationFactor {
    pub const MIN: f32 = 0.6;
    pub const MAX: f32 = 1.4;
    pub const DEFAULT: f32 = 1.0;

    /// Creates a factor, clamping into the valid range. NaN maps to the default.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(Self::DEFAULT);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the raw multiplier.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the slider range for this value.
    pub fn range() -> std::ops::RangeInclusive<f32> {
        Self::MIN..=Self::MAX
    }
}

impl Default for CalibrationFactor {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<f32> for CalibrationFactor {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<CalibrationFactor> for f32 {
    fn from(factor: CalibrationFactor) -> Self {
        factor.0
    }
}

impl fmt::Display for CalibrationFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CalibrationFactor {
    type Err = RulerError;

    /// Parses a stored factor. Out-of-range numbers are clamped, not rejected.
    fn from_str(s: &str) -> RulerResult<Self> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| RulerError::InvalidFactor(s.to_string()))?;
        if !value.is_finite() {
            return Err(RulerError::InvalidFactor(s.to_string()));
        }
        Ok(Self::new(value))
    }
}

/// Unit the ruler is labeled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitChoice {
    #[default]
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "inch")]
    Inch,
}

impl UnitChoice {
    /// Label shown next to measurements and stored in preferences.
    pub fn label(self) -> &'static str {
        match self {
            UnitChoice::Centimeter => "cm",
            UnitChoice::Inch => "inch",
        }
    }

    /// Side length of a freshly created measurement overlay, in units.
    ///
    /// Two centimeters or one inch.
    pub fn initial_overlay_units(self) -> f32 {
        match self {
            UnitChoice::Centimeter => 2.0,
            UnitChoice::Inch => 1.0,
        }
    }

    fn units_per_inch(self) -> f32 {
        match self {
            UnitChoice::Centimeter => CM_PER_INCH,
            UnitChoice::Inch => 1.0,
        }
    }
}

impl fmt::Display for UnitChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitChoice {
    type Err = RulerError;

    fn from_str(s: &str) -> RulerResult<Self> {
        match s.trim() {
            "cm" => Ok(UnitChoice::Centimeter),
            "inch" => Ok(UnitChoice::Inch),
            other => Err(RulerError::UnknownUnit(other.to_string())),
        }
    }
}

/// Display density in dots per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDensity(u32);

impl DeviceDensity {
    /// Wraps a known DPI value. Zero is treated as undefined.
    pub fn new(dpi: u32) -> RulerResult<Self> {
        if dpi == 0 {
            return Err(RulerError::UndefinedDensity);
        }
        Ok(Self(dpi))
    }

    /// Resolves the platform answer, falling back to `FALLBACK_DPI`.
    pub fn from_platform(dpi: Option<u32>) -> Self {
        dpi.and_then(|d| Self::new(d).ok()).unwrap_or_default()
    }

    /// Derives a density from a platform pixels-per-point ratio.
    pub fn from_pixels_per_point(pixels_per_point: Option<f32>) -> Self {
        let dpi = pixels_per_point
            .filter(|ppp| ppp.is_finite() && *ppp > 0.0)
            .map(|ppp| (ppp * LOGICAL_DPI).round() as u32);
        Self::from_platform(dpi)
    }

    pub fn dpi(self) -> u32 {
        self.0
    }
}

impl Default for DeviceDensity {
    fn default() -> Self {
        Self(FALLBACK_DPI)
    }
}

impl FromStr for DeviceDensity {
    type Err = RulerError;

    fn from_str(s: &str) -> RulerResult<Self> {
        let dpi: u32 = s.trim().parse().map_err(|_| RulerError::UndefinedDensity)?;
        Self::new(dpi)
    }
}

/// Converts DPI, unit and calibration factor into pixels per unit.
pub fn pixels_per_unit(density: DeviceDensity, unit: UnitChoice, factor: CalibrationFactor) -> f32 {
    density.dpi() as f32 / unit.units_per_inch() * factor.value()
}

/// The two user-tunable values that define the ruler's scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Calibration {
    pub factor: CalibrationFactor,
    pub unit: UnitChoice,
}

impl Calibration {
    pub fn new(factor: CalibrationFactor, unit: UnitChoice) -> Self {
        Self { factor, unit }
    }

    /// Pixels per whole unit at the given density.
    pub fn pixels_per_unit(&self, density: DeviceDensity) -> f32 {
        pixels_per_unit(density, self.unit, self.factor)
    }

    /// Pixels per tenth of a unit: the distance between adjacent ticks.
    pub fn tick_spacing(&self, density: DeviceDensity) -> f32 {
        self.pixels_per_unit(density) / 10.0
    }

    /// Sets the factor, clamping into range.
    pub fn set_factor(&mut self, value: f32) {
        self.factor = CalibrationFactor::new(value);
    }

    pub fn reset_factor(&mut self) {
        self.factor = CalibrationFactor::default();
    }

    pub fn set_unit(&mut self, unit: UnitChoice) {
        self.unit = unit;
    }
}
