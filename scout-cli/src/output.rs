use crate::args::OutputFormat;
use crate::utils::{display_id, truncate_chars};
use colored::*;
use scout::ScoutError;
use scout::criteria::HardCriteria;
use scout::ranking::{RankedList, RankingOutput};
use scout::services::{EvaluationResult, Submission};
use serde::Serialize;
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }
}

/// Report an error on stderr, as JSON when requested
pub fn output_error(error: &ScoutError, output_format: OutputFormat) {
    if output_format.is_json() {
        let mut error_response = json!({
            "error": true,
            "code": error.code(),
            "message": error.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        match error {
            ScoutError::MissingCredential { env, .. } => {
                error_response["details"] = json!({ "env": env });
            }
            ScoutError::Service { service, status, .. } => {
                error_response["details"] = json!({ "service": service, "status": status });
            }
            ScoutError::Io { path, .. } | ScoutError::MalformedInput { path, .. } => {
                error_response["details"] = json!({ "path": path });
            }
            _ => {}
        }

        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> scout::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

/// One-line description of a criteria profile
pub fn describe_criteria(criteria: &HardCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(degree) = criteria.degree() {
        parts.push(format!("degree ~ {}", degree));
    }
    if let Some(years) = criteria.min_years() {
        parts.push(format!("≥ {} years", years));
    }
    if let Some(country) = criteria.country() {
        parts.push(format!("country ~ {}", country));
    }

    if parts.is_empty() {
        "no hard criteria".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn print_criteria(name: &str, criteria: &HardCriteria) {
    println!(
        "{:<32} {}",
        name.color(CliColors::accent()).bold(),
        describe_criteria(criteria)
    );
}

pub fn print_ranking(output: &RankingOutput) {
    if output.object_ids.is_empty() {
        println!("{}", format_info("No candidates to rank."));
        return;
    }

    println!(
        "{}",
        format_info(&format!(
            "Top {} for {}:",
            output.object_ids.len(),
            output.config_path
        ))
    );
    for (rank, id) in output.object_ids.iter().enumerate() {
        println!(
            "{:>3}. {}",
            (rank + 1).to_string().color(CliColors::muted()),
            display_id(id.as_ref())
        );
    }
}

/// Table of score components for each kept candidate
pub fn print_explain(ranked: &RankedList<'_>) {
    println!(
        "{:<4} {:<26} {:>7} {:>5} {:>8} {:>5}  {}",
        "#".color(CliColors::muted()).bold(),
        "ID".color(CliColors::muted()).bold(),
        "Total".color(CliColors::muted()).bold(),
        "Gate".color(CliColors::muted()).bold(),
        "Keyword".color(CliColors::muted()).bold(),
        "Exp".color(CliColors::muted()).bold(),
        "Notes".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(80).color(CliColors::muted()));

    for (rank, entry) in ranked.entries().iter().enumerate() {
        let b = &entry.breakdown;
        let id = truncate_chars(&display_id(entry.id().as_ref()), 26);
        let notes = match &b.rejection {
            Some(reason) => reason.color(CliColors::warning()),
            None => "passed".color(CliColors::success()),
        };
        println!(
            "{:<4} {:<26} {:>7.1} {:>5.0} {:>8.0} {:>5.1}  {}",
            rank + 1,
            id,
            b.total,
            b.gate,
            b.keywords,
            b.experience,
            notes
        );
    }
}

/// Request summary shown before a submission is posted
pub fn format_submission(endpoint: &str, identity: &str, submission: &Submission) -> String {
    let body = serde_json::to_string_pretty(submission).unwrap_or_else(|_| "{}".to_string());
    format!(
        "{} {}\n{} {}\n{}",
        "Endpoint:".color(CliColors::muted()),
        endpoint,
        "Authorization:".color(CliColors::muted()),
        identity,
        body
    )
}

pub fn print_evaluation(result: &EvaluationResult) {
    let status = format!("Evaluation endpoint answered HTTP {}", result.status);
    if result.is_success() {
        println!("{}", format_success(&status));
    } else {
        println!("{}", format_error(&status));
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&result.payload).unwrap_or_else(|_| result.payload.to_string())
    );
}
