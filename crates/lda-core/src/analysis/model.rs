//! Analysis domain models.

use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::document_type::DocumentType;

/// The mock analysis returned for a document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub document_type: DocumentType,
    pub confidence: f64,
    pub model_used: Value,
    pub analysis_type: Value,
    pub processing_time: f64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    /// At most one type-specific field; absent for unrecognised analysis types.
    #[serde(flatten)]
    pub detail: Option<AnalysisDetail>,
}

/// Type-specific payload, serialized as a single extra field of the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDetail {
    AnalysisResult(AnalysisOutput),
    Classifications(Vec<Classification>),
    Entities(Vec<Entity>),
    Summary(String),
}

/// `analysis_result` is free text for generation and a list for question answering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutput {
    Report(String),
    Answers(Vec<QuestionAnswer>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// A named entity with character offsets into the source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub entity: String,
    pub word: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
    pub confidence: f64,
}

impl Classification {
    pub(crate) fn new(label: &str, score: f64) -> Self {
        Self {
            label: label.to_string(),
            score,
        }
    }
}

impl Entity {
    pub(crate) fn new(entity: &str, word: &str, start: usize, end: usize, score: f64) -> Self {
        Self {
            entity: entity.to_string(),
            word: word.to_string(),
            start,
            end,
            score,
        }
    }
}

impl QuestionAnswer {
    pub(crate) fn new(question: &str, answer: &str, confidence: f64) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            confidence,
        }
    }
}

/// Format a timestamp as ISO-8601 with microsecond precision.
///
/// The fraction is left out entirely when it is zero.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    if timestamp.nanosecond() / 1_000 == 0 {
        timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// `serialize_with` adapter for [`format_timestamp`].
pub fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(8, 5, 7, micro)
            .unwrap()
    }

    #[test]
    fn test_timestamp_microseconds() {
        assert_eq!(format_timestamp(&at(120)), "2024-03-09T08:05:07.000120");
        assert_eq!(format_timestamp(&at(500_000)), "2024-03-09T08:05:07.500000");
    }

    #[test]
    fn test_timestamp_without_fraction() {
        assert_eq!(format_timestamp(&at(0)), "2024-03-09T08:05:07");
    }

    #[test]
    fn test_sub_microsecond_digits_dropped() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_nano_opt(8, 5, 7, 123_456_789)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-09T08:05:07.123456");
    }
}
