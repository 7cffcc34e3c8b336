//! Keyword-based risk flagging.
//!
//! Lines introduced by "risk", "concern" or "issue" become risk entries.
//! A document with no such lines gets two standard placeholder risks.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static RISK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(risk|concern|issue):?\s*(.+)").expect("risk pattern should compile")
});

/// Severity of a single risk, or of a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Reviewer guidance attached to a risk of this severity.
    pub fn note(&self) -> &'static str {
        match self {
            Self::High => "Requires immediate attention and revision",
            Self::Medium => "Consider reviewing with legal counsel",
            Self::Low => "Standard provision, low risk",
        }
    }
}

/// A flagged risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Risk {
    pub name: String,
    pub level: RiskLevel,
    pub note: String,
}

/// Overall level from a confidence in `0.0..=1.0`: above 0.85 is low,
/// below 0.6 is high, anything between is medium.
pub fn risk_level(confidence: f64) -> RiskLevel {
    if confidence > 0.85 {
        RiskLevel::Low
    } else if confidence < 0.6 {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

/// Flag risks in `text`.
///
/// Severity comes from the flagged line itself: "high" or "low" anywhere in
/// it sets the level, otherwise it is medium.
pub fn extract_risks(text: &str) -> Vec<Risk> {
    let risks: Vec<Risk> = RISK_LINE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(2)?.as_str().trim();
            if name.is_empty() {
                return None;
            }
            let lower = name.to_lowercase();
            let level = if lower.contains("high") {
                RiskLevel::High
            } else if lower.contains("low") {
                RiskLevel::Low
            } else {
                RiskLevel::Medium
            };
            Some(Risk {
                name: name.to_string(),
                level,
                note: level.note().to_string(),
            })
        })
        .collect();

    if risks.is_empty() {
        default_risks()
    } else {
        risks
    }
}

fn default_risks() -> Vec<Risk> {
    vec![
        Risk {
            name: "Confidentiality Terms".to_string(),
            level: RiskLevel::Low,
            note: "Standard clauses present".to_string(),
        },
        Risk {
            name: "Termination Clause".to_string(),
            level: RiskLevel::Medium,
            note: "Review termination conditions".to_string(),
        },
    ]
}
