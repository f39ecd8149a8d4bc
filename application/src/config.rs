//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::{Deserialize, Deserializer};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Content export configuration.
    pub content: Content,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Image URL used for records having no image.
    #[default("/placeholder.jpg".to_owned())]
    pub placeholder_image: String,

    /// Maximum length of a project description, in characters.
    #[default(300)]
    pub description_length: usize,

    /// Maximum length of a sale item description summary, in characters.
    #[default(150)]
    pub summary_length: usize,

    /// Search configuration.
    pub search: Search,

    /// Service tasks configuration.
    pub tasks: Tasks,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            placeholder_image,
            description_length,
            summary_length,
            search,
            tasks: Tasks { reload_content },
        } = value;
        Self {
            normalize: service::normalize::Config {
                placeholder_image,
                description_length,
                summary_length,
            },
            search: service::query::search::Config {
                min_term_length: search.min_term_length,
                limit: search.limit,
            },
            reload_content: service::task::reload_content::Config {
                interval: reload_content.interval,
            },
        }
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Search {
    /// Minimum number of characters in a search term.
    ///
    /// Shorter terms find nothing.
    #[default(2)]
    pub min_term_length: usize,

    /// Maximum number of ranked projects and of ranked sale items returned.
    #[default(10)]
    pub limit: usize,
}

/// Service tasks configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Tasks {
    /// `ReloadContent` task configuration.
    pub reload_content: Task,
}

/// Service task configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Task {
    /// Task execution interval.
    ///
    /// Must be non-zero.
    #[default(time::Duration::from_secs(5 * 60))]
    #[serde(deserialize_with = "non_zero_interval")]
    pub interval: time::Duration,
}

/// Deserializes a human-readable [`time::Duration`], rejecting zero.
fn non_zero_interval<'de, D>(
    deserializer: D,
) -> Result<time::Duration, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let interval: time::Duration = humantime_serde::deserialize(deserializer)?;
    if interval.is_zero() {
        return Err(D::Error::custom("task interval must be non-zero"));
    }
    Ok(interval)
}

/// Content export configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Content {
    /// Path to the JSON content export file.
    #[default("content.json".to_owned())]
    pub path: String,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time;

    use super::Config;

    #[test]
    fn defaults_without_file() {
        let config = Config::new("non-existent.toml").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.content.path, "content.json");
        assert_eq!(config.service.placeholder_image, "/placeholder.jpg");
        assert_eq!(config.service.search.min_term_length, 2);
        assert_eq!(
            config.service.tasks.reload_content.interval,
            time::Duration::from_secs(300),
        );
    }

    fn from_toml(toml: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn reads_task_interval() {
        let config =
            from_toml("[service.tasks.reload_content]\ninterval = \"90s\"")
                .unwrap();

        assert_eq!(
            config.service.tasks.reload_content.interval,
            time::Duration::from_secs(90),
        );
    }

    #[test]
    fn rejects_zero_task_interval() {
        assert!(
            from_toml("[service.tasks.reload_content]\ninterval = \"0s\"")
                .is_err(),
        );
    }

    #[test]
    fn converts_into_service_config() {
        let config = service::Config::from(Config::default().service);

        assert_eq!(config.normalize.description_length, 300);
        assert_eq!(config.normalize.summary_length, 150);
        assert_eq!(config.search.limit, 10);
    }
}
