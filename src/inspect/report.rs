//! Inspect report types and terminal formatting.

use serde::Serialize;
use std::fmt;

/// The result of inspecting one document.
#[derive(Clone, Debug, Serialize)]
pub struct InspectReport {
    /// Document-wide figures.
    pub summary: SummarySection,
    /// One entry per language, in discovery order.
    pub languages: Vec<LanguageSection>,
}

/// Document-wide figures.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SummarySection {
    /// Source file name without extension.
    pub file_name: String,
    /// Largest time slot value in milliseconds.
    pub duration_ms: u64,
    pub time_slots: usize,
    pub languages: usize,
    /// Rows across every table of every language.
    pub annotations: usize,
    pub original_language: Option<String>,
}

/// Figures for one language bundle.
#[derive(Clone, Debug, Serialize)]
pub struct LanguageSection {
    pub language: String,
    /// Rows per table (the four tables agree).
    pub rows: usize,
    pub translated_rows: usize,
    pub manually_corrected_rows: usize,
    /// `None` when there are no rows.
    pub translation_percentage: Option<f64>,
    pub speech_duration_ms: u64,
    pub is_original: bool,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "╭─────────────────────────────────────────────────────────────╮")?;
        writeln!(f, "│                EAF Document Inspection Report               │")?;
        writeln!(f, "╰─────────────────────────────────────────────────────────────╯")?;
        writeln!(f)?;

        self.fmt_summary(f)?;
        writeln!(f)?;
        self.fmt_languages(f)?;

        Ok(())
    }
}

impl InspectReport {
    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;

        writeln!(f, "┌─ Summary ─────────────────────────────────────────────────")?;
        writeln!(f, "│   File:              {}", s.file_name)?;
        writeln!(f, "│   Duration:          {}", format_ms(s.duration_ms))?;
        writeln!(f, "│   Time slots:        {:>8}", format_number(s.time_slots))?;
        writeln!(f, "│   Languages:         {:>8}", format_number(s.languages))?;
        writeln!(f, "│   Annotations:       {:>8}", format_number(s.annotations))?;
        writeln!(
            f,
            "│   Original language: {}",
            s.original_language.as_deref().unwrap_or("n/a")
        )?;
        writeln!(f, "└───────────────────────────────────────────────────────────")?;

        Ok(())
    }

    fn fmt_languages(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌─ Languages ({}) ──────────────────────────────────────────", self.languages.len())?;

        if self.languages.is_empty() {
            writeln!(f, "│   No language tier groups found.")?;
        } else {
            writeln!(
                f,
                "│   {:<6} {:>7} {:>10} {:>8} {:>10} {:>12}  {}",
                "lang", "rows", "translated", "share", "corrected", "speech", ""
            )?;
            for lang in &self.languages {
                writeln!(
                    f,
                    "│   {:<6} {:>7} {:>10} {:>8} {:>10} {:>12}  {}",
                    lang.language,
                    format_number(lang.rows),
                    format_number(lang.translated_rows),
                    fmt_fraction(lang.translation_percentage),
                    format_number(lang.manually_corrected_rows),
                    format_ms(lang.speech_duration_ms),
                    if lang.is_original { "(original)" } else { "" }
                )?;
            }
        }

        writeln!(f, "└───────────────────────────────────────────────────────────")?;

        Ok(())
    }
}

/// Format a number with thousand separators.
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a fraction as a percentage, `n/a` when undefined.
fn fmt_fraction(fraction: Option<f64>) -> String {
    match fraction {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "n/a".to_string(),
    }
}

/// Format milliseconds as `h:mm:ss.mmm`.
fn format_ms(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1000) % 60;
    format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, ms % 1000)
}
