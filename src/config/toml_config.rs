use crate::domain::stats::{AverageMode, DEFAULT_SCORES};
use crate::utils::error::{ExerciseError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_list, validate_non_empty_string, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed values for the non-interactive parts of the exercises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    pub array: ArrayConfig,
    pub shapes: ShapesConfig,
    pub person: PersonConfig,
    pub school: SchoolConfig,
    pub payroll: PayrollConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub scores: Vec<i32>,
    pub average: AverageMode,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            scores: DEFAULT_SCORES.to_vec(),
            average: AverageMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    pub circle_radius: f64,
    pub rectangle_width: f64,
    pub rectangle_height: f64,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            circle_radius: 5.0,
            rectangle_width: 4.0,
            rectangle_height: 6.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    /// Passed to the setter unchecked; the setter decides.
    pub age: i32,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self { age: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub student: String,
    pub teacher: String,
    pub message: String,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            student: "Francis".to_string(),
            teacher: "Mr. Cruz".to_string(),
            message: "Can I submit my project tomorrow?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    pub hourly_rate: f64,
    pub hours_worked: u32,
    pub monthly_salary: f64,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            hourly_rate: 20.0,
            hours_worked: 40,
            monthly_salary: 5000.0,
        }
    }
}

impl ExerciseConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ExerciseError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExerciseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references; undefined variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExerciseError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for ExerciseConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("array.scores", &self.array.scores)?;

        validate_finite("shapes.circle_radius", self.shapes.circle_radius)?;
        validate_finite("shapes.rectangle_width", self.shapes.rectangle_width)?;
        validate_finite("shapes.rectangle_height", self.shapes.rectangle_height)?;

        validate_non_empty_string("school.student", &self.school.student)?;
        validate_non_empty_string("school.teacher", &self.school.teacher)?;

        validate_finite("payroll.hourly_rate", self.payroll.hourly_rate)?;
        validate_range("payroll.hours_worked", self.payroll.hours_worked, 0, 168)?;
        validate_finite("payroll.monthly_salary", self.payroll.monthly_salary)?;

        Ok(())
    }
}
