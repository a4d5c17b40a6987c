//! Resume ATS: score PDF and DOCX resumes against required job skills

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use log::{error, info};
use resume_ats::cli::{self, Cli, Commands, ConfigAction};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::{Result, ResumeAtsError};
use resume_ats::input::InputManager;
use resume_ats::output::formatter::{save_report_to_file, ReportGenerator};
use resume_ats::output::{AnalysisRecord, CsvExporter};
use resume_ats::processing::classifier::{classify, keyword_hits};
use resume_ats::processing::{MatcherKind, ResumeAnalyzer};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_from(path).with_context(|| format!("reading {}", path.display()))
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            skills,
            role,
            user,
            output,
            detailed,
            save,
            export,
            matcher,
        } => {
            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(ResumeAtsError::InvalidInput)?
                }
                None => config.output.format,
            };
            let required_skills = resolve_required_skills(&config, &skills, role.as_deref())?;
            info!(
                "Analyzing {} against {} required skills",
                resume.display(),
                required_skills.len()
            );

            let text = InputManager::new().extract_text(&resume).await?;
            if let Some(kind) = matcher {
                config.analysis.matcher =
                    MatcherKind::parse(&kind).map_err(ResumeAtsError::InvalidInput)?;
            }
            let analyzer = ResumeAnalyzer::from_config(&config)?;
            info!("Matching vocabulary skills with the {} matcher", analyzer.matcher_name());
            let analysis = analyzer.analyze(&text, &required_skills);

            let record = AnalysisRecord::new(
                analysis,
                user,
                role.unwrap_or_default(),
                resume.to_string_lossy(),
                required_skills,
            );

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let report = generator.generate_report(&record, &output_format)?;

            if let Some(export_path) = export {
                let exporter = CsvExporter::new(export_path);
                exporter.append(&record, &text)?;
                println!("Analysis appended to {}", exporter.path().display());
            }

            match save {
                Some(path) => {
                    let path = resolve_save_path(path, &output_format, &resume);
                    save_report_to_file(&report, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", report),
            }
        }

        Commands::History { file, user } => {
            let exporter = CsvExporter::new(file);
            let rows = match &user {
                Some(user) => exporter.rows_for_user(user)?,
                None => exporter.read_all()?,
            };

            println!("{} exported analyses in {}\n", rows.len(), exporter.path().display());
            for row in rows {
                println!(
                    "  {} {} {:>3}% {:<11} {} {}",
                    row.created_at,
                    row.resume_id,
                    row.ats_score,
                    row.document_type,
                    if row.user_id.is_empty() { "-" } else { row.user_id.as_str() },
                    row.job_role.bold()
                );
            }
        }

        Commands::Classify { resume } => {
            let text = InputManager::new().extract_text(&resume).await?;
            let document_type = classify(&text);

            println!("{}: {}", resume.display(), document_type.to_string().bold());
            for (doc_type, hits) in keyword_hits(&text) {
                println!("  {:<12} {} keyword hits", doc_type.as_str(), hits);
            }
        }

        Commands::Roles => {
            println!("Configured job roles\n");
            for (role, skills) in &config.roles {
                println!("  {} {}", role.bold(), skills.join(", "));
            }
            println!(
                "\nDefault required skills: {}",
                config.analysis.default_required_skills.join(", ")
            );
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset: {}", config_path.display());
            }
            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

/// `--skills` wins, then the skills of `--role`, then configured defaults.
fn resolve_required_skills(
    config: &Config,
    skills: &[String],
    role: Option<&str>,
) -> Result<Vec<String>> {
    let explicit = cli::clean_skill_list(skills);
    if !explicit.is_empty() {
        return Ok(explicit);
    }

    if let Some(role) = role {
        return config
            .role_skills(role)
            .map(|skills| cli::clean_skill_list(skills))
            .ok_or_else(|| ResumeAtsError::InvalidInput(format!("Unknown job role: {}", role)));
    }

    Ok(cli::clean_skill_list(&config.analysis.default_required_skills))
}

/// A directory target gets a generated file name.
fn resolve_save_path(path: PathBuf, format: &OutputFormat, resume: &Path) -> PathBuf {
    if path.is_dir() {
        let name = resume.to_string_lossy();
        path.join(resume_ats::output::formatter::suggest_filename(format, &name, true))
    } else {
        path
    }
}
