//! Configuration loading tests
//!
//! Tests that trainer configuration loads correctly and provides expected
//! default values

use worddrill::answer::MatchMode;
use worddrill::state::Config;

#[test]
fn test_config_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worddrill.cfg");

    let config = Config::load_from(path.clone()).expect("Failed to load config");
    assert!(path.exists(), "default config file should be written");

    assert!(config.speech_enabled());
    assert_eq!(config.speech_language(), "en-US");
    assert!((config.rate_scale() - 0.8).abs() < f32::EPSILON);
    assert_eq!(config.variant_delimiter(), ';');
    assert_eq!(config.empty_placeholder(), "(empty)");
    assert!(!config.shuffle());
}

#[test]
fn test_config_path_available() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worddrill.cfg");
    let config = Config::load_from(path).unwrap();

    assert!(config.path().to_str().unwrap().contains("worddrill.cfg"));
}

#[test]
fn test_edited_values_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worddrill.cfg");

    let mut config = Config::load_from(path.clone()).unwrap();
    config.set("answer", "empty_placeholder", "(nothing)");
    config.set("speech", "rate_scale", "1.0");
    config.save().unwrap();

    let reloaded = Config::load_from(path).unwrap();
    assert_eq!(reloaded.empty_placeholder(), "(nothing)");
    assert!((reloaded.rate_scale() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_configured_evaluator_behavior() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::load_from(dir.path().join("c.cfg")).unwrap();
    config.set("answer", "variant_delimiter", ",");
    config.set("answer", "empty_placeholder", "-");

    let eval = config.evaluator();
    assert!(eval
        .evaluate("pear", "apple,pear", MatchMode::AnyVariant)
        .unwrap()
        .is_correct);

    let empty = eval.evaluate("", "apple", MatchMode::Exact).unwrap();
    assert!(empty.display_text().contains("Your answer: -"));
}
