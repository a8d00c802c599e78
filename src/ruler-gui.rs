//! Basic Ruler GUI Application
//!
//! An on-screen ruler drawn to physical scale using the egui framework.
//! The ruler features:
//! - A ruler along the long edge of the window, in centimeters or inches
//! - Length and area measurement overlays that can be dragged and resized
//! - A calibration dialog correcting the platform's density estimate
//! - Persistent calibration, unit, theme and rendering settings
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Calibration, overlay and theme state
//! - `rendering/` - Canvas adapter and ruler/overlay rendering
//! - `ui/` - Toolbar, calibration dialog, panel layout and input handling

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;

mod app;
mod cli;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, RULER_CONFIG_KEY};
use cli::Args;
use ruler::{DeviceDensity, RulerConfig};
use state::{CalibrationState, ThemeState};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the ruler window.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([240.0, 240.0])
            .with_title("Basic Ruler"),
        ..Default::default()
    };

    eframe::run_native(
        "Basic Ruler",
        options,
        Box::new(move |cc| Ok(Box::new(RulerApp::new(cc, &args)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the ruler window: {e}"))
}

/// The main ruler application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles overlay toggles and the calibration dialog
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles canvas, toolbar and dialog rendering
struct RulerApp {
    /// Centralized application state
    state: AppState,
}

impl RulerApp {
    /// Creates the ruler with calibration, theme and config loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, args: &Args) -> Self {
        let calibration = ruler::load_calibration_or_default(cc.storage);
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let config: RulerConfig = SettingsCoordinator::load_setting(cc.storage, RULER_CONFIG_KEY);

        let density = args
            .dpi
            .unwrap_or_else(|| DeviceDensity::from_pixels_per_point(cc.egui_ctx.native_pixels_per_point()));
        log::info!(
            "density {} dpi ({}), calibration factor {} unit {}",
            density.dpi(),
            if args.dpi.is_some() { "command line" } else { "platform" },
            calibration.factor,
            calibration.unit,
        );

        Self {
            state: AppState {
                calibration: CalibrationState::new(calibration),
                theme: ThemeState::with_theme(theme_name),
                config,
                tick_length_override: args.tick_length,
                density,
                ..AppState::new()
            },
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, frame: &mut eframe::Frame) {
        match interaction {
            PanelInteraction::ToggleLineMeasure => {
                ApplicationCoordinator::toggle_line_measure(&mut self.state);
            }
            PanelInteraction::ToggleRectangleMeasure => {
                ApplicationCoordinator::toggle_rectangle_measure(&mut self.state);
            }
            PanelInteraction::OpenCalibration => {
                ApplicationCoordinator::open_calibration(&mut self.state);
            }
            PanelInteraction::CalibrationCancelled => {
                ApplicationCoordinator::cancel_calibration(&mut self.state);
            }
            PanelInteraction::CalibrationSaved => {
                ApplicationCoordinator::save_calibration(&mut self.state, frame.storage_mut());
            }
            PanelInteraction::CycleTheme => {
                ApplicationCoordinator::cycle_theme(&mut self.state);
                if let Some(storage) = frame.storage_mut() {
                    ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
                }
            }
        }
    }
}

impl eframe::App for RulerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    ///
    /// Calibration is not written here; only the dialog's Save stores it.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, RULER_CONFIG_KEY, &self.state.config);
    }

    /// Main update loop: apply the theme, render, then handle the interaction.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, frame);
        }
    }
}
