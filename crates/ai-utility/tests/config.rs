#![cfg(feature = "serde")]

use ai_utility::{SelectionMode, UtilitySelectorConfig};

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: UtilitySelectorConfig = serde_json::from_str(r#"{"cooldown": 0.25}"#).unwrap();
    assert_eq!(config.cooldown, 0.25);
    assert_eq!(config.mode, SelectionMode::WeightedRandom);

    let config: UtilitySelectorConfig =
        serde_json::from_str(r#"{"mode": "deterministic"}"#).unwrap();
    assert_eq!(config.cooldown, 0.1);
    assert_eq!(config.mode, SelectionMode::Deterministic);
}
