//! Settings & Error Tests
//!
//! Tests for:
//! - LerpSettings JSON loading for scalar, vector and color values
//! - autostart handling
//! - Checked constructors rejecting non-finite durations
//! - Error propagation for malformed input and missing files

use glam::Vec3;

use autolerp::{
    Color32, FloatLerp, LerpError, LerpSettings, LerpState, ManualClock, TimedLerp,
};

// ============================================================================
// Loading
// ============================================================================

#[test]
fn scalar_settings_from_json() -> anyhow::Result<()> {
    let settings: LerpSettings<f32> =
        LerpSettings::from_json(r#"{ "start": 0.0, "end": 10.0, "duration": 5.0 }"#)?;

    assert_eq!(settings, LerpSettings::new(0.0, 10.0, 5.0));
    assert!(!settings.autostart);

    let clock = ManualClock::new();
    let mut lerp = settings.build(clock.clone())?;
    assert_eq!(lerp.state(), LerpState::Ready);

    lerp.start();
    clock.advance(1.0);
    assert!((lerp.get_value() - 2.0).abs() < 1e-5);
    Ok(())
}

#[test]
fn vector_settings_autostart() -> anyhow::Result<()> {
    let json = r#"{ "start": [0.0, 0.0, 0.0], "end": [10.0, 0.0, 5.0], "duration": 2.0, "autostart": true }"#;
    let settings: LerpSettings<Vec3> = LerpSettings::from_json(json)?;

    let clock = ManualClock::new();
    let mut lerp = settings.build(clock.clone())?;
    assert_eq!(lerp.state(), LerpState::Running);

    clock.advance(2.0);
    assert_eq!(lerp.get_value(), Vec3::new(10.0, 0.0, 5.0));
    assert!(lerp.is_done());
    Ok(())
}

#[test]
fn color32_settings_round_trip_through_json() -> anyhow::Result<()> {
    let settings = LerpSettings::new(Color32::BLACK, Color32::new(255, 128, 0, 255), 1.5)
        .autostart(true);
    let json = serde_json::to_string(&settings)?;
    let loaded: LerpSettings<Color32> = LerpSettings::from_json(&json)?;
    assert_eq!(loaded, settings);
    Ok(())
}

#[test]
fn settings_from_path() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("autolerp_settings_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "start": 1.0, "end": 3.0, "duration": 4.0 }"#)?;

    let settings: LerpSettings<f32> = LerpSettings::from_path(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(settings.start, 1.0);
    assert_eq!(settings.end, 3.0);
    assert_eq!(settings.duration, 4.0);
    Ok(())
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn malformed_json_is_json_error() {
    let err = LerpSettings::<f32>::from_json(r#"{ "start": 0.0, "duration": 1.0 }"#).unwrap_err();
    assert!(matches!(err, LerpError::JsonError(_)), "got {err:?}");
}

#[test]
fn missing_file_is_io_error() {
    let err = LerpSettings::<f32>::from_path("/definitely/not/here/lerp.json").unwrap_err();
    assert!(matches!(err, LerpError::IoError(_)), "got {err:?}");
}

#[test]
fn overflowing_duration_is_rejected_on_build() {
    let settings: LerpSettings<f32> =
        LerpSettings::from_json(r#"{ "start": 0.0, "end": 1.0, "duration": 1e39 }"#)
            .expect("f32 overflow still parses");
    let err = settings.build(ManualClock::new()).unwrap_err();
    assert!(matches!(err, LerpError::InvalidDuration(d) if d.is_infinite()));
}

#[test]
fn try_with_clock_rejects_non_finite() {
    for duration in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let result: autolerp::Result<FloatLerp<ManualClock>> =
            TimedLerp::try_with_clock(0.0, 1.0, duration, ManualClock::new());
        assert!(matches!(result, Err(LerpError::InvalidDuration(_))));
    }
}

#[test]
fn try_with_clock_accepts_degenerate_durations() {
    for duration in [0.0, -1.0] {
        let mut lerp: FloatLerp<ManualClock> =
            TimedLerp::try_with_clock(0.0, 1.0, duration, ManualClock::new())
                .expect("zero and negative durations are valid");
        lerp.start();
        assert_eq!(lerp.get_value(), 1.0);
    }
}

#[test]
fn try_new_uses_system_clock() {
    let lerp = FloatLerp::try_new(0.0, 1.0, 2.0).expect("finite duration");
    assert_eq!(lerp.duration(), 2.0);
    assert!(FloatLerp::try_new(0.0, 1.0, f32::NAN).is_err());
}

#[test]
fn error_messages() {
    assert_eq!(
        LerpError::InvalidDuration(f32::INFINITY).to_string(),
        "Invalid lerp duration: inf"
    );
}
