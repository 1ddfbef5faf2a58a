//! Verdict extraction from free-form model output
//!
//! The most delicate part of the pipeline: arbitrary text goes in, a
//! bounded verdict comes out. Two independent, absence-tolerant searches
//! run over the text - one for the anomaly line, one for the
//! justification line. Everything here is a pure function of its input:
//! same text, same verdict, no I/O.
//!
//! An unparseable response must not be amplified into a false alarm, so
//! every no-match path falls back to the negative verdict.

use std::sync::LazyLock;

use regex::Regex;

/// Longest justification kept, in whitespace-delimited words.
pub const MAX_EXPLANATION_WORDS: usize = 50;

/// Appended when the justification had to be cut.
pub const TRUNCATION_MARKER: &str = "...";

/// Substituted when no justification line is found.
pub const NO_EXPLANATION: &str = "No explanation available.";

static ANOMALY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Anomalía Detectada:[ \t]*([^\r\n]*)").expect("valid anomaly pattern")
});

static JUSTIFICATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Justificación:[ \t]*([^\r\n]*)").expect("valid justification pattern")
});

/// Result of the anomaly-line search, before defaulting.
///
/// `NoMatch` is an explicit variant rather than a silent default so that
/// callers can tell "the model said no" apart from "the model said
/// nothing recognizable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalySignal {
    NoMatch,
    Affirmative,
    Negative,
    Potential,
}

impl AnomalySignal {
    /// Locate the first anomaly line and match its token
    /// case-insensitively against the three-value vocabulary. A line
    /// whose token is not recognized counts as no match.
    pub fn search(text: &str) -> Self {
        let Some(captures) = ANOMALY_LINE.captures(text) else {
            return Self::NoMatch;
        };

        match captures[1].trim().to_lowercase().as_str() {
            "sí" => Self::Affirmative,
            "no" => Self::Negative,
            "potencial" => Self::Potential,
            _ => Self::NoMatch,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::NoMatch | Self::Negative => 0,
            Self::Affirmative => 1,
            Self::Potential => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NoMatch | Self::Negative => "No",
            Self::Affirmative => "Sí",
            Self::Potential => "Potencial",
        }
    }
}

/// The distilled model output: bounded label, numeric code, capped
/// justification. Computed once per request and immediately consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub code: i64,
    pub label: &'static str,
    pub explanation: String,
}

/// Distill arbitrary model text into a bounded verdict.
pub fn extract(text: &str) -> Verdict {
    let signal = AnomalySignal::search(text);

    let explanation = match search_justification(text) {
        Some(justification) => truncate_words(&justification, MAX_EXPLANATION_WORDS),
        None => NO_EXPLANATION.to_string(),
    };

    Verdict {
        code: signal.code(),
        label: signal.label(),
        explanation,
    }
}

/// Capture the justification up to the first line break. A blank capture
/// counts as absent.
fn search_justification(text: &str) -> Option<String> {
    let captures = JUSTIFICATION_LINE.captures(text)?;
    let justification = captures[1].trim();
    if justification.is_empty() {
        None
    } else {
        Some(justification.to_string())
    }
}

/// Keep the first `max` whitespace-delimited words; text within the
/// limit passes through verbatim.
fn truncate_words(text: &str, max: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max {
        text.to_string()
    } else {
        format!("{}{TRUNCATION_MARKER}", words[..max].join(" "))
    }
}
