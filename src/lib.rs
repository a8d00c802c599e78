pub mod error;
pub mod units;
pub mod preferences;
pub mod canvas;
pub mod ticks;
pub mod measurement;
pub mod calibration;
pub mod config;
pub mod theme;

// Export error types
pub use error::{RulerError, RulerResult};

// Export unit conversion
pub use units::{
    pixels_per_unit, Calibration, CalibrationFactor, DeviceDensity, UnitChoice,
    CM_PER_INCH, FALLBACK_DPI,
};

// Export preference persistence
pub use preferences::{
    load_calibration, load_calibration_or_default, save_calibration,
    MemoryPreferences, PreferenceStore, CORRECTION_FACTOR_KEY, UNIT_KEY,
};

// Export drawing surface
pub use canvas::{Canvas, LandscapeFrame, Orientation, RecordingCanvas, TextStyle};

// Export ruler rendering
pub use ticks::{layout_ticks, tick_count, Tick, TickRenderer, TickStyle, TickTier};

// Export measurement overlays
pub use measurement::{
    DragAction, DragEvent, LabelPlacement, MeasurementLine, MeasurementRectangle, OverlayStyle,
};

// Export calibration dialog session
pub use calibration::CalibrationSession;

// Export configuration
pub use config::RulerConfig;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
