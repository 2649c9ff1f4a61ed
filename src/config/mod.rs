#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Student;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, validate_unique_ids,
    Validate,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Fully resolved inputs for one showcase run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseSettings {
    pub greeting: String,
    pub meal: String,
    pub input: String,
    pub first: String,
    pub second: String,
    pub seed: Option<u64>,
    pub threshold: f64,
    pub companies: Vec<String>,
    pub students: Vec<Student>,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            greeting: "Hello World".to_string(),
            meal: "Eating a burger".to_string(),
            input: "123.45".to_string(),
            first: "Alice".to_string(),
            second: "Bob".to_string(),
            seed: None,
            threshold: crate::core::chooser::DEFAULT_THRESHOLD,
            companies: ["Meta", "Amazon", "Netflix", "Google", "Apple"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            students: vec![
                Student::new(1, "Asha", "asha@example.com", "Computer Science"),
                Student::new(2, "Ravi", "ravi@example.com", "Mechanical"),
            ],
        }
    }
}

impl Validate for ShowcaseSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("showcase.greeting", &self.greeting)?;
        validate_non_empty_string("showcase.meal", &self.meal)?;
        validate_non_empty_string("chooser.first", &self.first)?;
        validate_non_empty_string("chooser.second", &self.second)?;
        validate_range("chooser.threshold", self.threshold, 0.0, 1.0)?;
        validate_non_empty_list("showcase.companies", &self.companies)?;

        // input 不在此驗證：解析失敗要以 ParseError 回報
        let ids: Vec<i32> = self.students.iter().map(Student::id).collect();
        validate_unique_ids("students.id", &ids)?;
        for student in &self.students {
            validate_non_empty_string("students.name", student.name())?;
        }

        Ok(())
    }
}
