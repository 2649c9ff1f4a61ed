use crate::config::ShowcaseSettings;
use crate::domain::model::Student;
use crate::utils::error::{ContractError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub showcase: Option<ShowcaseSection>,
    pub chooser: Option<ChooserSection>,
    pub students: Option<Vec<Student>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseSection {
    pub greeting: Option<String>,
    pub meal: Option<String>,
    pub input: Option<String>,
    pub companies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChooserSection {
    pub first: Option<String>,
    pub second: Option<String>,
    pub seed: Option<u64>,
    pub threshold: Option<f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(ContractError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContractError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETING})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContractError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以預設值補齊未設定的欄位
    pub fn into_settings(self) -> ShowcaseSettings {
        let mut settings = ShowcaseSettings::default();

        if let Some(showcase) = self.showcase {
            if let Some(greeting) = showcase.greeting {
                settings.greeting = greeting;
            }
            if let Some(meal) = showcase.meal {
                settings.meal = meal;
            }
            if let Some(input) = showcase.input {
                settings.input = input;
            }
            if let Some(companies) = showcase.companies {
                settings.companies = companies;
            }
        }

        if let Some(chooser) = self.chooser {
            if let Some(first) = chooser.first {
                settings.first = first;
            }
            if let Some(second) = chooser.second {
                settings.second = second;
            }
            if chooser.seed.is_some() {
                settings.seed = chooser.seed;
            }
            if let Some(threshold) = chooser.threshold {
                settings.threshold = threshold;
            }
        }

        if let Some(students) = self.students {
            settings.students = students;
        }

        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}
