use config::{Config, File, FileFormat};

use super::settings::{PartialSettings, Settings};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.broker.initial_topic_capacity, 16);
    assert_eq!(settings.broker.initial_subscriber_capacity, 16);
    assert_eq!(settings.log.level, "info");
}

#[test]
fn test_partial_settings_allow_missing_sections() {
    let partial: PartialSettings = Config::builder()
        .add_source(File::from_str("", FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();
    assert!(partial.broker.is_none());
    assert!(partial.log.is_none());
}

#[test]
fn test_partial_settings_allow_missing_keys() {
    let toml = r#"
        [broker]
        initial_subscriber_capacity = 8
    "#;
    let partial: PartialSettings = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();
    let broker = partial.broker.expect("broker section present");
    assert_eq!(broker.initial_subscriber_capacity, Some(8));
    assert_eq!(broker.initial_topic_capacity, None);
    assert!(partial.log.is_none());
}
