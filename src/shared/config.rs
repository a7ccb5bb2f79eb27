//! Application configuration. Input selection and reporting options.
//!
//! Only the CLI wrapper is configurable; the workout formulas are not.

use crate::usecases::ErrorPolicy;
use serde::Deserialize;

/// Environment prefix: `FIT_TRACKER_INPUT_PATH`, `FIT_TRACKER_HALT_ON_ERROR`, ...
pub const ENV_PREFIX: &str = "FIT_TRACKER";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Package file (.json or .csv) used when no CLI argument is given. Read from FIT_TRACKER_INPUT_PATH.
    #[serde(default)]
    pub input_path: Option<String>,

    /// Stop the batch at the first invalid package instead of reporting and continuing.
    /// Read from FIT_TRACKER_HALT_ON_ERROR.
    #[serde(default)]
    pub halt_on_error: Option<bool>,

    /// Show the ASCII banner in interactive mode. Read from FIT_TRACKER_BANNER.
    #[serde(default)]
    pub banner: Option<bool>,

    /// Colored error lines on stderr. Read from FIT_TRACKER_COLOR; `NO_COLOR` turns it off.
    #[serde(default)]
    pub color: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("FIT_TRACKER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        c.build()?.try_deserialize()
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        if self.halt_on_error.unwrap_or(false) {
            ErrorPolicy::Halt
        } else {
            ErrorPolicy::Continue
        }
    }

    /// Returns true unless disabled. Defaults to showing the banner.
    pub fn banner_or_default(&self) -> bool {
        self.banner.unwrap_or(true)
    }

    /// Explicit setting wins; otherwise color unless `NO_COLOR` is set.
    pub fn color_or_default(&self) -> bool {
        self.color
            .unwrap_or_else(|| std::env::var_os("NO_COLOR").is_none())
    }
}
