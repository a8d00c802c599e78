use anyhow::Result;
use egui::{pos2, vec2, Color32, Pos2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ruler::{
    load_calibration, pixels_per_unit, Calibration, CalibrationFactor, CalibrationSession,
    DeviceDensity, DragAction, DragEvent, LandscapeFrame, MeasurementRectangle, MemoryPreferences,
    RecordingCanvas, RulerConfig, TickRenderer, UnitChoice,
};

fn density(dpi: u32) -> Result<DeviceDensity> {
    Ok(DeviceDensity::new(dpi)?)
}

#[test]
fn test_pixels_per_unit_monotonic_in_factor_and_dpi() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let dpi = rng.gen_range(72..=640);
        let unit = if rng.gen_bool(0.5) { UnitChoice::Centimeter } else { UnitChoice::Inch };
        let low = rng.gen_range(CalibrationFactor::MIN..CalibrationFactor::MAX);
        let high = rng.gen_range(low..=CalibrationFactor::MAX);

        let at = |dpi: u32, factor: f32| -> Result<f32> {
            Ok(pixels_per_unit(density(dpi)?, unit, CalibrationFactor::new(factor)))
        };

        assert!(at(dpi, low)? <= at(dpi, high)?);
        assert!(at(dpi, low)? < at(dpi + 1, low)?);
    }
    Ok(())
}

#[test]
fn test_save_then_reopen_restores_dialog_values() -> Result<()> {
    let mut store = MemoryPreferences::new();
    let mut live = load_calibration(&store);
    assert_eq!(live, Calibration::default());

    let session = CalibrationSession::open(&live);
    live.set_factor(1.17);
    live.set_unit(UnitChoice::Inch);
    session.save(&live, &mut store);

    // a fresh start reads what the dialog saved
    let reopened = load_calibration(&store);
    assert!((reopened.factor.value() - 1.17).abs() < 1e-6);
    assert_eq!(reopened.unit, UnitChoice::Inch);
    Ok(())
}

#[test]
fn test_clamp_is_idempotent_and_noop_in_bounds() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let bounds = vec2(600.0, 1000.0);

    for _ in 0..500 {
        let center = pos2(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y));
        let size = vec2(rng.gen_range(10.0..900.0), rng.gen_range(10.0..1400.0));
        let mut rectangle = MeasurementRectangle::new(center, size, 5.0);
        let inside = rectangle.rect().min.x >= 0.0
            && rectangle.rect().min.y >= 0.0
            && rectangle.rect().max.x <= bounds.x
            && rectangle.rect().max.y <= bounds.y;

        rectangle.clamp_to(bounds);
        if inside {
            assert_eq!(rectangle.center(), center);
            assert_eq!(rectangle.size(), size);
        }

        let once = rectangle.clone();
        rectangle.clamp_to(bounds);
        assert!((rectangle.center() - once.center()).length() < 1e-3);
        assert!((rectangle.size() - once.size()).length() < 1e-3);
    }
    Ok(())
}

#[test]
fn test_right_edge_overflow_trims_by_exact_amount() -> Result<()> {
    let bounds = vec2(500.0, 900.0);
    // right edge at 540: 40 px past the canvas
    let mut rectangle = MeasurementRectangle::new(pos2(440.0, 300.0), vec2(200.0, 100.0), 10.0);

    rectangle.clamp_to(bounds);

    assert!((rectangle.rect().max.x - bounds.x).abs() < 1e-4);
    assert!((rectangle.size().x - 160.0).abs() < 1e-4);
    assert_eq!(rectangle.rect().min.x, 340.0);
    assert_eq!(rectangle.size().y, 100.0);
    Ok(())
}

#[test]
fn test_readout_at_420_dpi() -> Result<()> {
    let calibration = Calibration::default();
    let ppu = calibration.pixels_per_unit(density(420)?);
    assert!((ppu - 165.354).abs() < 0.01);

    let rectangle = MeasurementRectangle::new(pos2(300.0, 300.0), vec2(330.7, 165.35), 10.0);
    let label = rectangle.label(ppu, UnitChoice::Centimeter);
    assert!(label.starts_with("2.00 x 1.00 cm"), "unexpected readout {label:?}");
    assert!(label.ends_with("2.00 cm\u{00B2}"), "unexpected readout {label:?}");
    Ok(())
}

#[test]
fn test_drag_within_threshold_moves_without_resizing() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let size = vec2(rng.gen_range(40.0..400.0), rng.gen_range(40.0..400.0));
        let mut rectangle = MeasurementRectangle::new(pos2(500.0, 500.0), size, 10.0);
        let radius = rectangle.move_radius();

        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let distance = rng.gen_range(0.0..radius * 0.99);
        let position = Pos2::new(500.0 + distance * angle.cos(), 500.0 + distance * angle.sin());
        let delta = Vec2::new(rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0));

        let action = rectangle.apply_drag(DragEvent::new(position, delta));
        assert_eq!(action, DragAction::Move);
        assert_eq!(rectangle.size(), size);
        assert_eq!(rectangle.center(), pos2(500.0, 500.0) + delta);
    }
    Ok(())
}

#[test]
fn test_unit_switch_scales_spacing_and_keeps_factor() -> Result<()> {
    let density = density(320)?;
    let mut calibration = Calibration::new(CalibrationFactor::new(0.92), UnitChoice::Centimeter);
    let cm_spacing = calibration.tick_spacing(density);

    calibration.set_unit(UnitChoice::Inch);
    let inch_spacing = calibration.tick_spacing(density);

    assert!((inch_spacing / cm_spacing - 2.54).abs() < 1e-4);
    assert_eq!(calibration.factor.value(), 0.92);
    Ok(())
}

#[test]
fn test_landscape_ruler_runs_along_bottom_edge() -> Result<()> {
    let colors = ruler::ThemeManager::new().current_theme().colors.clone();
    let style = RulerConfig::default().tick_style(1.0, &colors);
    let bar_thickness = style.bar_thickness();

    let mut canvas = RecordingCanvas::new(900.0, 500.0);
    {
        let mut frame = LandscapeFrame::new(&mut canvas);
        TickRenderer::new(style, true).paint(&mut frame, 16.0);
    }

    let band_top = 500.0 - bar_thickness;
    assert!(canvas.lines().count() > 0);
    for (from, to, _) in canvas.lines() {
        assert!(from.y >= band_top - 1e-3 && to.y >= band_top - 1e-3);
        assert!(from.y <= 500.0 + 1e-3 && to.y <= 500.0 + 1e-3);
    }

    let (bar, fill) = canvas.rects().next().ok_or_else(|| anyhow::anyhow!("no ruler bar"))?;
    assert_eq!(fill, colors.primary);
    assert_ne!(fill, Color32::TRANSPARENT);
    assert!((bar.height() - bar_thickness).abs() < 1e-3);
    assert_eq!(bar.width(), 900.0);
    Ok(())
}
