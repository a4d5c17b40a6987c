//! Output formatters for analysis records

use crate::config::OutputFormat;
use crate::error::{Result, ResumeAtsError};
use crate::output::report::{AnalysisRecord, ScoreBand};
use crate::processing::document::Section;
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering analysis records
pub trait OutputFormatter {
    fn format_report(&self, record: &AnalysisRecord) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and storage
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn write_err(e: std::fmt::Error) -> ResumeAtsError {
    ResumeAtsError::OutputFormatting(e.to_string())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".blue().bold(), title.blue().bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Low => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().to_uppercase().color(color).bold())
        } else {
            format!("[{}]", band.label().to_uppercase())
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, record: &AnalysisRecord) -> Result<String> {
        let analysis = &record.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ATS ANALYSIS"));
        writeln!(output, "File: {}", record.source_file).map_err(write_err)?;
        writeln!(output, "Document type: {}", analysis.document_type).map_err(write_err)?;
        writeln!(
            output,
            "ATS Score: {}% {}",
            analysis.ats_score,
            self.format_score_badge(record.band)
        )
        .map_err(write_err)?;

        if analysis.is_resume() {
            output.push_str(&self.format_header("Score Breakdown"));
            writeln!(output, "  Sections: {}%", analysis.scores.section_score).map_err(write_err)?;
            writeln!(output, "  Keywords: {}%", analysis.scores.keyword_score).map_err(write_err)?;
            writeln!(output, "  Format:   {}%", analysis.scores.format_score).map_err(write_err)?;

            output.push_str(&self.format_header("Skills"));
            writeln!(
                output,
                "  Found:   {}",
                self.colorize(&join_or_none(&analysis.found_skills), Color::Green)
            )
            .map_err(write_err)?;
            writeln!(
                output,
                "  Missing: {}",
                self.colorize(&join_or_none(&analysis.missing_skills), Color::Red)
            )
            .map_err(write_err)?;
        }

        output.push_str(&self.format_header("Suggestions"));
        for suggestion in &analysis.suggestions {
            writeln!(output, "  • {}", self.colorize(suggestion, Color::Cyan)).map_err(write_err)?;
        }

        if self.detailed {
            let info = &analysis.personal_info;
            output.push_str(&self.format_header("Personal Info"));
            writeln!(output, "  Name:     {}", or_dash(&info.name)).map_err(write_err)?;
            writeln!(output, "  Email:    {}", or_dash(&info.email)).map_err(write_err)?;
            writeln!(output, "  Phone:    {}", or_dash(&info.phone)).map_err(write_err)?;
            writeln!(output, "  LinkedIn: {}", or_dash(&info.linkedin)).map_err(write_err)?;
            writeln!(output, "  GitHub:   {}", or_dash(&info.github)).map_err(write_err)?;

            output.push_str(&self.format_header("Details"));
            writeln!(
                output,
                "  Vocabulary skills ({} matcher): {}",
                analysis.matcher,
                join_or_none(&analysis.extracted_skills)
            )
            .map_err(write_err)?;
            writeln!(
                output,
                "  Words: {} | Sentences: {} | Characters: {} | Experience: {} years",
                analysis.metrics.word_count,
                analysis.metrics.sentence_count,
                analysis.metrics.character_count,
                analysis.metrics.experience_years
            )
            .map_err(write_err)?;
            for section in Section::ALL {
                let length = analysis
                    .sections
                    .get(&section)
                    .map(|content| content.chars().count())
                    .unwrap_or(0);
                writeln!(output, "  {}: {} characters", section, length).map_err(write_err)?;
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, record: &AnalysisRecord) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(record)?)
        } else {
            Ok(serde_json::to_string(record)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(band: ScoreBand) -> &'static str {
        match band {
            ScoreBand::Excellent => "🟢 Excellent",
            ScoreBand::Moderate => "🟡 Moderate",
            ScoreBand::Low => "🔴 Low",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, record: &AnalysisRecord) -> Result<String> {
        let analysis = &record.analysis;
        let mut md = String::new();

        writeln!(md, "# Resume ATS Analysis\n").map_err(write_err)?;

        if self.include_metadata {
            writeln!(md, "- **Resume ID:** {}", record.resume_id).map_err(write_err)?;
            writeln!(md, "- **File:** {}", record.source_file).map_err(write_err)?;
            writeln!(md, "- **User:** {}", or_dash(&record.user_id)).map_err(write_err)?;
            writeln!(md, "- **Role:** {}", or_dash(&record.job_role)).map_err(write_err)?;
            writeln!(
                md,
                "- **Generated:** {}\n",
                record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
            .map_err(write_err)?;
        }

        writeln!(md, "## Score\n").map_err(write_err)?;
        writeln!(md, "| Metric | Value |").map_err(write_err)?;
        writeln!(md, "|---|---|").map_err(write_err)?;
        writeln!(md, "| Document type | {} |", analysis.document_type).map_err(write_err)?;
        writeln!(
            md,
            "| ATS score | {}% ({}) |",
            analysis.ats_score,
            Self::markdown_score_badge(record.band)
        )
        .map_err(write_err)?;
        writeln!(md, "| Sections | {}% |", analysis.scores.section_score).map_err(write_err)?;
        writeln!(md, "| Keywords | {}% |", analysis.scores.keyword_score).map_err(write_err)?;
        writeln!(md, "| Format | {}% |\n", analysis.scores.format_score).map_err(write_err)?;

        if analysis.is_resume() {
            writeln!(md, "## Skills\n").map_err(write_err)?;
            writeln!(md, "- **Found:** {}", join_or_none(&analysis.found_skills)).map_err(write_err)?;
            writeln!(md, "- **Missing:** {}\n", join_or_none(&analysis.missing_skills))
                .map_err(write_err)?;
        }

        writeln!(md, "## Suggestions\n").map_err(write_err)?;
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            writeln!(md, "{}. {}", i + 1, suggestion).map_err(write_err)?;
        }

        Ok(md)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, record: &AnalysisRecord, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(record),
            OutputFormat::Json => self.json_formatter.format_report(record),
            OutputFormat::Markdown => self.markdown_formatter.format_report(record),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
    }
}
