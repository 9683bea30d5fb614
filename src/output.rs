//! Output formatting for human and JSON modes
//!
//! This module provides structured scan results that can be rendered either
//! as human-readable text or machine-parseable JSON. The human rendering
//! preserves the exact report wording the team has been reading during the
//! missing-appointment investigation.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of probing one source file for an identifier
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// The identifier that was searched for
    pub name: String,

    /// Short label of the probed file, used in the positive message
    pub file: String,

    /// Whether the identifier occurs in the file
    pub found: bool,

    /// The located section, when the definition could be extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,

    /// Print a separating blank line before the positive message
    #[serde(skip)]
    pub pad_before: bool,
}

/// An extracted section of source text
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Byte offset of the section within the file
    pub offset: usize,

    /// Section text, capped for inspection
    pub text: String,

    /// Whether the closing marker was found; `false` means the section was
    /// clamped to the end of the file
    pub complete: bool,
}

/// Fixed notes printed at the end of every scan
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClosingNotes {
    /// The closing note lines
    pub notes: [&'static str; 2],
}

impl ProbeReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.found {
            let line = format!("❌ {} non trovato", self.name);
            println!("{}", line.as_str().red());
            return;
        }

        if self.pad_before {
            println!();
        }
        let line = format!("✅ {} trovato nel {}", self.name, self.file);
        println!("{}", line.as_str().green());

        match &self.section {
            Some(section) => {
                if !section.complete {
                    let warn = format!(
                        "⚠️ chiusura della sezione {} non trovata, mostro fino a fine file",
                        self.name
                    );
                    println!("{}", warn.as_str().yellow());
                }
                println!("\nSezione {}:", self.name);
                println!("{}", section.text);
            },
            None => {
                let warn = format!("⚠️ definizione di {} non trovata", self.name);
                println!("{}", warn.as_str().yellow());
            },
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ClosingNotes {
    /// The fixed notes left for whoever picks the investigation back up
    #[must_use]
    pub const fn new() -> Self {
        Self {
            notes: [
                "Il problema è che il tool webdev_execute_sql non mostra i risultati dettagliati!",
                "Lascio cercare il cliente nel frontend!",
            ],
        }
    }

    /// Render the notes based on output mode
    pub fn render(self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(self) {
        println!("\n");
        println!("🔍 Analisi completata!");
        for note in self.notes {
            println!("{note}");
        }
    }

    fn render_json(self) {
        println!("{}", serde_json::to_string_pretty(&self).unwrap_or_default());
    }
}

impl Default for ClosingNotes {
    fn default() -> Self {
        Self::new()
    }
}
