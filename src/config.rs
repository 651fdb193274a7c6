//! Planner configuration parsed from environment variables.

use crate::util::sprint_form::DEFAULT_ID_SEPARATOR;

pub const DEFAULT_UNLOAD_MESSAGE: &str = "You have moved bugs but not saved!";
pub const DEFAULT_FORM_ERROR_MESSAGE: &str = "You must move at least one bug before saving the sprint.";

/// Errors produced while reading [`PlannerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value was present but unusable.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl crate::error::ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Delimiter between bug ids in the hidden form fields.
    pub id_separator: String,
    /// Confirmation text shown when leaving with unsaved moves.
    pub unload_message: String,
    /// Form-level error shown when an empty save is blocked.
    pub form_error_message: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            id_separator: DEFAULT_ID_SEPARATOR.to_owned(),
            unload_message: DEFAULT_UNLOAD_MESSAGE.to_owned(),
            form_error_message: DEFAULT_FORM_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl PlannerConfig {
    /// Build typed planner config from environment variables.
    ///
    /// Optional:
    /// - `PLANNER_ID_SEPARATOR`: default `,`; must not be blank
    /// - `PLANNER_UNLOAD_MESSAGE`: default "You have moved bugs but not saved!"
    /// - `PLANNER_FORM_ERROR_MESSAGE`: shown when an empty save is blocked
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the separator is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let id_separator = parse_separator(env_string("PLANNER_ID_SEPARATOR").as_deref())?;
        let unload_message =
            env_string("PLANNER_UNLOAD_MESSAGE").unwrap_or_else(|| DEFAULT_UNLOAD_MESSAGE.to_string());
        let form_error_message =
            env_string("PLANNER_FORM_ERROR_MESSAGE").unwrap_or_else(|| DEFAULT_FORM_ERROR_MESSAGE.to_string());

        Ok(Self { id_separator, unload_message, form_error_message })
    }
}

fn env_string(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            tracing::warn!(var = key, "ignoring non-unicode environment value");
            None
        }
    }
}

fn parse_separator(raw: Option<&str>) -> Result<String, ConfigError> {
    match raw {
        None => Ok(DEFAULT_ID_SEPARATOR.to_string()),
        Some(sep) if sep.trim().is_empty() => Err(ConfigError::Invalid {
            var: "PLANNER_ID_SEPARATOR",
            reason: "separator must contain a non-whitespace character".into(),
        }),
        Some(sep) => Ok(sep.to_string()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
