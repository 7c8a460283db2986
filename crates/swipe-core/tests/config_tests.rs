// Host-side tests for interaction config loading and validation.

use std::time::Duration;
use swipe_core::*;

#[test]
fn defaults_match_constants() {
    let c = SwipeConfig::default();
    assert_eq!(c.accept_threshold, ACCEPT_THRESHOLD);
    assert_eq!(c.max_rotation_deg, MAX_ROTATION_DEG);
    assert_eq!(c.exit_overshoot, EXIT_OVERSHOOT);
    assert_eq!(c.exit_duration(), Duration::from_millis(250));
    assert_eq!(c.spring, SpringConfig::default());
    assert!(c.validate().is_ok());
}

#[test]
fn empty_toml_yields_defaults() {
    let c = SwipeConfig::from_toml_str("").expect("empty config is valid");
    assert_eq!(c, SwipeConfig::default());
}

#[test]
fn partial_toml_overrides_only_given_fields() {
    let c = SwipeConfig::from_toml_str(
        r#"
        accept_threshold = 140.0
        exit_duration_ms = 300

        [spring]
        stiffness = 180.0
        "#,
    )
    .expect("valid config");
    assert_eq!(c.accept_threshold, 140.0);
    assert_eq!(c.exit_duration(), Duration::from_millis(300));
    assert_eq!(c.spring.stiffness, 180.0);
    assert_eq!(c.spring.damping, SPRING_DAMPING);
    assert_eq!(c.max_rotation_deg, MAX_ROTATION_DEG);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = SwipeConfig::from_toml_str("accept_threshold = \"wide\"").expect_err("bad type");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases = [
        "accept_threshold = 0.0",
        "accept_threshold = -5.0",
        "max_rotation_deg = -1.0",
        "exit_overshoot = -10.0",
        "exit_duration_ms = 0",
        "[spring]\nstiffness = 0.0",
        "[spring]\nmass = -1.0",
    ];
    for case in cases {
        let err = SwipeConfig::from_toml_str(case).expect_err(case);
        assert!(
            matches!(err, ConfigError::OutOfRange { .. }),
            "{case}: unexpected {err:?}"
        );
    }
}

#[test]
fn out_of_range_error_names_the_field() {
    let err = SwipeConfig::from_toml_str("[spring]\ndamping = 0.0").expect_err("zero damping");
    assert!(err.to_string().contains("spring.damping"), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SwipeConfig::load("/definitely/not/here/swipe.toml").expect_err("no such file");
    assert!(matches!(err, ConfigError::Io { .. }));
}
