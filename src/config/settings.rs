use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the broker and for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub broker: BrokerSettings,
    pub log: LogSettings,
}

/// Configuration settings for the broker.
///
/// Controls the initial sizing of the topic and subscriber maps; both grow
/// on demand regardless of these values.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub initial_topic_capacity: usize,
    pub initial_subscriber_capacity: usize,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled
/// using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub broker: Option<PartialBrokerSettings>,
    pub log: Option<PartialLogSettings>,
}

/// Partial broker settings.
///
/// Used when loading broker configuration from external sources with
/// optional values.
#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub initial_topic_capacity: Option<usize>,
    pub initial_subscriber_capacity: Option<usize>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is
/// provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            broker: BrokerSettings {
                initial_topic_capacity: 16,
                initial_subscriber_capacity: 16,
            },
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
