//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use qbank_batch::RefineMetrics;
use qbank_rules::{Effect, RuleGroup, RuleSet};
use qbank_verifier::VerificationReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const RULE: &str = "────────────────────────────────────────";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a refine run.
    pub fn format_refine(&self, metrics: &RefineMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "dry_run": metrics.dry_run,
                "collections": metrics.collections,
                "failures": metrics.failures,
                "total_records": metrics.total_records(),
                "total_modified": metrics.total_modified(),
                "errors": metrics.errors(),
            }))?),
            OutputFormat::Table => Ok(self.format_refine_table(metrics)),
            OutputFormat::Quiet => Ok(metrics.total_modified().to_string()),
        }
    }

    fn format_refine_table(&self, metrics: &RefineMetrics) -> String {
        let mut out = Vec::new();

        if !metrics.collections.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Collection", "Questions", "Modified"]);
            for (name, stats) in &metrics.collections {
                builder.push_record([
                    name.clone(),
                    stats.total.to_string(),
                    stats.modified.to_string(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push(table.to_string());
        }

        for (name, reason) in &metrics.failures {
            out.push(self.error(&format!("{}: {}", name, reason)));
        }

        out.push(String::new());
        out.push(metrics.summary());
        if metrics.errors() == 0 {
            out.push(self.success("Refinement complete"));
        } else {
            out.push(self.warning(&format!(
                "Refinement finished with {} failed collection(s)",
                metrics.errors()
            )));
        }
        out.join("\n")
    }

    /// Format a verification report, listing at most `max_per_group`
    /// issues per (category, collection) pair.
    pub fn format_report(&self, report: &VerificationReport, max_per_group: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report, max_per_group)),
            OutputFormat::Quiet => Ok(report.total_issues().to_string()),
        }
    }

    fn format_report_json(&self, report: &VerificationReport) -> Result<String> {
        let by_category: serde_json::Map<String, serde_json::Value> = report
            .category_counts()
            .into_iter()
            .map(|(category, count)| (category.to_string(), count.into()))
            .collect();

        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "collections_verified": report.collection_count(),
            "total_records": report.record_count(),
            "total_issues": report.total_issues(),
            "issues_by_category": by_category,
            "collections": report.collections,
            "issues": report.issues,
        }))?)
    }

    fn format_report_table(&self, report: &VerificationReport, max_per_group: usize) -> String {
        let mut out = vec![
            format!("Collections verified: {}", report.collection_count()),
            format!("Total questions: {}", report.record_count()),
        ];

        if report.is_clean() {
            out.push(String::new());
            out.push(self.success("No issues found"));
            return out.join("\n");
        }

        out.push(String::new());
        out.push(self.warning(&format!("Issues found: {} total", report.total_issues())));

        for (category, by_collection) in &report.issues {
            let count: usize = by_collection.values().map(Vec::len).sum();
            out.push(String::new());
            out.push(RULE.to_string());
            out.push(self.colorize(&format!("{}: {} issue(s)", category, count), "red"));
            out.push(RULE.to_string());

            for (collection, entries) in by_collection {
                out.push(format!("  {} ({} issue(s)):", collection, entries.len()));
                let (shown, remaining) = VerificationReport::capped(entries, max_per_group);
                for entry in shown {
                    out.push(format!("    • {}", self.colorize(&entry.record_id, "cyan")));
                    out.push(format!("      {}", entry.detail));
                }
                if remaining > 0 {
                    out.push(format!("    ... and {} more", remaining));
                }
            }
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "Issues"]);
        for (category, count) in report.category_counts() {
            builder.push_record([category.to_string(), count.to_string()]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        out.push(String::new());
        out.push("Issues by category:".to_string());
        out.push(table.to_string());
        out.join("\n")
    }

    /// Format the active rule table.
    pub fn format_rules(&self, rules: &RuleSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rules)?),
            OutputFormat::Table => Ok(self.format_rules_table(rules)),
            OutputFormat::Quiet => Ok(rules
                .groups
                .iter()
                .map(|g| g.category.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_rules_table(&self, rules: &RuleSet) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Category", "Keywords", "Effect", "Condition", "Verification"]);

        for group in &rules.groups {
            builder.push_record([
                group.category.to_string(),
                keyword_summary(group),
                effect_summary(&group.effect),
                condition_summary(group),
                group
                    .expectation
                    .as_ref()
                    .map(|e| e.issue.clone())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = vec![
            format!("Rule table version {}", rules.version),
            table.to_string(),
        ];

        if !rules.topics.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Topic", "Positions"]);
            for topic in &rules.topics {
                builder.push_record([topic.topic.clone(), topic.positions.join(", ")]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push(table.to_string());
        }
        out.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn keyword_summary(group: &RuleGroup) -> String {
    match &group.verify_keywords {
        Some(narrow) => format!("{} ({} verified)", group.keywords.len(), narrow.len()),
        None => group.keywords.len().to_string(),
    }
}

fn effect_summary(effect: &Effect) -> String {
    match effect {
        Effect::AddPositions { positions } => format!("positions += {}", positions.join(", ")),
        Effect::AddEntrySeniority => "seniority += entry".to_string(),
        Effect::Implied => "implied".to_string(),
    }
}

fn condition_summary(group: &RuleGroup) -> String {
    let mut parts = Vec::new();
    if let Some(difficulty) = &group.when_difficulty {
        parts.push(format!("difficulty = {}", difficulty));
    }
    if let Some(parent) = group.parent {
        parts.push(format!("within {}", parent));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join("; ")
    }
}
