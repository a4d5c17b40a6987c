//! CLI interface for the resume ATS analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "Resume ATS scoring tool")]
#[command(long_about = "Extract text from PDF or DOCX resumes, classify the document and score it against required job skills")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against required skills
    Analyze {
        /// Path to resume file (PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Comma-separated required skills
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Job role whose configured skills are required
        #[arg(long)]
        role: Option<String>,

        /// User identifier recorded with the analysis
        #[arg(short, long, default_value = "")]
        user: String,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Append the analysis as a row to a CSV export file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Skill matching strategy: regex, phrase (overrides the config)
        #[arg(short, long)]
        matcher: Option<String>,
    },

    /// List analyses previously appended to a CSV export file
    History {
        /// CSV export file
        #[arg(short, long)]
        file: PathBuf,

        /// Only show analyses for this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Classify a document without scoring it
    Classify {
        /// Path to document file (PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,
    },

    /// List configured job roles and their skills
    Roles,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Trim, drop blanks. Matching lowercases later.
pub fn clean_skill_list(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "resume-ats",
            "--verbose",
            "analyze",
            "--resume",
            "cv.pdf",
            "--skills",
            "python, sql,,java",
            "--matcher",
            "phrase",
            "--export",
            "out/resumes.csv",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze {
                resume,
                skills,
                matcher,
                export,
                ..
            } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(clean_skill_list(&skills), vec!["python", "sql", "java"]);
                assert_eq!(matcher.as_deref(), Some("phrase"));
                assert_eq!(export, Some(PathBuf::from("out/resumes.csv")));
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_history_arguments() {
        let cli = Cli::try_parse_from(["resume-ats", "history", "--file", "r.csv", "--user", "u1"])
            .unwrap();
        match cli.command {
            Commands::History { file, user } => {
                assert_eq!(file, PathBuf::from("r.csv"));
                assert_eq!(user.as_deref(), Some("u1"));
            }
            _ => panic!("expected history command"),
        }
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["resume-ats", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: Some(ConfigAction::Path)
            }
        ));
    }
}
