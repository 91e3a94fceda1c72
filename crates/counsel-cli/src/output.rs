//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use counsel_domain::{Attorney, AttorneyId, StoreStats};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

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

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a list of attorneys.
    pub fn format_attorneys(&self, attorneys: &[Attorney]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_attorneys_json(attorneys),
            OutputFormat::Table => self.format_attorneys_table(attorneys),
            OutputFormat::Quiet => Ok(Self::format_ids(attorneys)),
        }
    }

    /// Format one attorney with every field.
    pub fn format_attorney(&self, attorney: &Attorney) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&attorney_json(attorney))?),
            OutputFormat::Quiet => Ok(attorney.id.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (field, value) in detail_rows(attorney) {
                    builder.push_record([field.to_string(), value]);
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format store statistics.
    pub fn format_stats(&self, stats: &StoreStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "total_attorneys": stats.total_attorneys,
                "unique_cities": stats.unique_cities,
                "unique_states": stats.unique_states,
            }))?),
            OutputFormat::Quiet => Ok(stats.total_attorneys.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Attorneys", "Cities", "States"]);
                builder.push_record([
                    stats.total_attorneys.to_string(),
                    stats.unique_cities.to_string(),
                    stats.unique_states.to_string(),
                ]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the result of storing a record.
    pub fn attorney_stored(&self, id: AttorneyId) -> String {
        match self.format {
            OutputFormat::Quiet => id.to_string(),
            _ => self.success(&format!("Attorney stored: {}", id)),
        }
    }

    /// Format attorneys as JSON.
    fn format_attorneys_json(&self, attorneys: &[Attorney]) -> Result<String> {
        let json: Vec<serde_json::Value> = attorneys.iter().map(attorney_json).collect();
        Ok(serde_json::to_string_pretty(&json)?)
    }

    /// Format attorneys as a table.
    fn format_attorneys_table(&self, attorneys: &[Attorney]) -> Result<String> {
        if attorneys.is_empty() {
            return Ok(self.colorize("No attorneys found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Phone", "Location", "Practice Areas"]);

        for attorney in attorneys {
            builder.push_record([
                attorney.id.to_string(),
                or_dash(attorney.name.as_deref()),
                // First number only; the detail view lists them all
                or_dash(attorney.phone.as_deref().and_then(|p| p.split(", ").next())),
                or_dash(attorney.location().as_deref()),
                or_dash(attorney.practice_areas.as_deref()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format attorneys in quiet mode (IDs only).
    fn format_ids(attorneys: &[Attorney]) -> String {
        let ids: Vec<String> = attorneys.iter().map(|a| a.id.to_string()).collect();
        ids.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
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
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn attorney_json(attorney: &Attorney) -> serde_json::Value {
    serde_json::json!({
        "id": attorney.id.value(),
        "name": attorney.name,
        "phone": attorney.phone,
        "email": attorney.email,
        "website": attorney.website,
        "address": attorney.address,
        "city": attorney.city,
        "state": attorney.state,
        "zip_code": attorney.zip_code,
        "practice_areas": attorney.practice_areas,
        "source_url": attorney.source_url,
        "created_at": attorney.created_at.to_rfc3339(),
        "updated_at": attorney.updated_at.to_rfc3339(),
    })
}

fn detail_rows(attorney: &Attorney) -> Vec<(&'static str, String)> {
    vec![
        ("ID", attorney.id.to_string()),
        ("Name", or_dash(attorney.name.as_deref())),
        ("Phone", or_dash(attorney.phone.as_deref())),
        ("Email", or_dash(attorney.email.as_deref())),
        ("Website", or_dash(attorney.website.as_deref())),
        ("Address", or_dash(attorney.address.as_deref())),
        ("City", or_dash(attorney.city.as_deref())),
        ("State", or_dash(attorney.state.as_deref())),
        ("Zip Code", or_dash(attorney.zip_code.as_deref())),
        ("Practice Areas", or_dash(attorney.practice_areas.as_deref())),
        ("Source", attorney.source_url.clone()),
        ("Stored", attorney.created_at.to_rfc3339()),
    ]
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
