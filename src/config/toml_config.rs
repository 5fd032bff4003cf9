use crate::core::billing::RateTable;
use crate::core::repository::MAX_BOATS;
use crate::utils::error::{MarinaError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarinaConfig {
    #[serde(default)]
    pub marina: MarinaSection,
    #[serde(default)]
    pub rates: RateTable,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarinaSection {
    pub name: Option<String>,
    pub capacity: Option<usize>,
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl MarinaConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MarinaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MarinaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MARINA_DATA})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MarinaError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&mut self, data_file: Option<String>, capacity: Option<usize>) {
        if let Some(data_file) = data_file {
            self.marina.data_file = Some(data_file);
        }
        if let Some(capacity) = capacity {
            self.marina.capacity = Some(capacity);
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(data_file) = &self.marina.data_file {
            validation::validate_path("marina.data_file", data_file)?;
        }

        if let Some(capacity) = self.marina.capacity {
            validation::validate_positive_number("marina.capacity", capacity, 1)?;
        }

        validation::validate_non_negative_rate("rates.slip", self.rates.slip)?;
        validation::validate_non_negative_rate("rates.land", self.rates.land)?;
        validation::validate_non_negative_rate("rates.trailor", self.rates.trailor)?;
        validation::validate_non_negative_rate("rates.storage", self.rates.storage)?;

        if let Some(format) = &self.logging.format {
            validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }
        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.marina.capacity.unwrap_or(MAX_BOATS)
    }

    pub fn data_file(&self) -> Result<&str> {
        self.marina
            .data_file
            .as_deref()
            .ok_or_else(|| MarinaError::MissingConfigError {
                field: "marina.data_file".to_string(),
            })
    }

    pub fn marina_name(&self) -> &str {
        self.marina.name.as_deref().unwrap_or("Boat Management System")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl Validate for MarinaConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
