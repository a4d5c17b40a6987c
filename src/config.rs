//! Configuration management for the resume ATS analyzer

use crate::error::{Result, ResumeAtsError};
use crate::processing::skill_matcher::MatcherKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    /// Job role name to the skills that role requires.
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub matcher: MatcherKind,
    #[serde(default)]
    pub default_required_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

fn skills(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        let roles = BTreeMap::from([
            (
                "Software Engineer".to_string(),
                skills(&["python", "java", "sql", "git", "docker"]),
            ),
            (
                "Data Scientist".to_string(),
                skills(&["python", "sql", "machine learning", "pandas", "numpy"]),
            ),
            (
                "Frontend Developer".to_string(),
                skills(&["javascript", "html", "css", "react", "git"]),
            ),
            (
                "DevOps Engineer".to_string(),
                skills(&["docker", "kubernetes", "aws", "jenkins", "git"]),
            ),
        ]);

        Self {
            analysis: AnalysisConfig {
                matcher: MatcherKind::Regex,
                default_required_skills: skills(&["python", "sql", "git"]),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
            roles,
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAtsError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats")
            .join("config.toml")
    }

    /// Required skills for a role, matched case-insensitively on the role name.
    pub fn role_skills(&self, role: &str) -> Option<&Vec<String>> {
        let wanted = role.trim().to_lowercase();
        self.roles
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, skills)| skills)
    }
}
