use crate::config::{GreetingSettings, OutputFormat};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_time_format, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest precision worth asking f64 formatting for.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub tool: Option<ToolConfig>,
    pub calculator: Option<CalculatorConfig>,
    pub greeting: Option<GreetingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub precision: Option<usize>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub greet_name: Option<String>,
    pub farewell_name: Option<String>,
    pub time_format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;

        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn precision(&self) -> Option<usize> {
        self.calculator.as_ref().and_then(|c| c.precision)
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.calculator.as_ref().and_then(|c| c.format)
    }

    /// Overlays the file's greeting values on the built-in defaults.
    pub fn greeting_settings(&self) -> GreetingSettings {
        let mut settings = GreetingSettings::default();
        if let Some(greeting) = &self.greeting {
            if let Some(name) = &greeting.greet_name {
                settings.greet_name = name.clone();
            }
            if let Some(name) = &greeting.farewell_name {
                settings.farewell_name = name.clone();
            }
            if let Some(format) = &greeting.time_format {
                settings.time_format = format.clone();
            }
        }
        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(tool) = &self.tool {
            validate_non_empty_string("tool.name", &tool.name)?;
        }

        if let Some(precision) = self.precision() {
            validate_range("calculator.precision", precision, 0, MAX_PRECISION)?;
        }

        if let Some(greeting) = &self.greeting {
            if let Some(name) = &greeting.greet_name {
                validate_non_empty_string("greeting.greet_name", name)?;
            }
            if let Some(name) = &greeting.farewell_name {
                validate_non_empty_string("greeting.farewell_name", name)?;
            }
            if let Some(format) = &greeting.time_format {
                validate_time_format("greeting.time_format", format)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: TomlConfig = toml::from_str(
            r#"
            [tool]
            name = "small-calc"
            version = "0.1.0"

            [calculator]
            precision = 3
            format = "json"

            [greeting]
            greet_name = "Rustaceans"
            farewell_name = "Bob"
            time_format = "%H:%M"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.precision(), Some(3));
        assert_eq!(config.format(), Some(OutputFormat::Json));

        let settings = config.greeting_settings();
        assert_eq!(settings.greet_name, "Rustaceans");
        assert_eq!(settings.farewell_name, "Bob");
        assert_eq!(settings.time_format, "%H:%M");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.precision(), None);

        let settings = config.greeting_settings();
        assert_eq!(settings.greet_name, "World");
        assert_eq!(settings.farewell_name, "Alice");
        assert_eq!(settings.time_format, "%H:%M:%S");
    }

    #[test]
    fn test_out_of_range_precision_is_rejected() {
        let config: TomlConfig = toml::from_str(
            r#"
            [calculator]
            precision = 99
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(CalcError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_bad_time_format_is_rejected() {
        let config: TomlConfig = toml::from_str(
            r#"
            [greeting]
            time_format = "%Q"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
