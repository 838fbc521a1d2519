//! # Configuration Tests
//!
//! Verifies the defaults and JSON deserialization of the host-facing
//! run parameters.

use bytevm_core::Config;

#[test]
fn defaults_match_the_documented_conventions() {
    let config = Config::default();
    assert_eq!(config.memory_size, 256);
    assert_eq!(config.load_offset, 8);
    assert_eq!(config.step_limit, None);
    assert!(!config.trace);
}

#[test]
fn json_overrides_individual_fields() {
    let config = Config::from_json(r#"{"memory_size": 64, "step_limit": 10000}"#).unwrap();
    assert_eq!(config.memory_size, 64);
    assert_eq!(config.step_limit, Some(10_000));
    // Untouched fields keep their defaults.
    assert_eq!(config.load_offset, 8);
    assert!(!config.trace);
}

#[test]
fn empty_object_is_the_default_config() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(Config::from_json(r#"{"ram_base": 1024}"#).is_err());
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Config::from_json("not json").is_err());
}
