//! Mock document analysis.
//!
//! Produces placeholder output shaped like real model responses. Nothing
//! here performs inference; every payload is fixed apart from the detected
//! document type and the length-derived confidence.

pub mod document_type;
pub mod model;
pub mod risk;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::request::AnalysisRequest;
pub use document_type::{detect_document_type, DocumentType};
pub use risk::{extract_risks, risk_level, Risk, RiskLevel};
pub use model::{
    format_timestamp, serialize_timestamp, AnalysisDetail, AnalysisOutput, AnalysisResult,
    Classification, Entity, QuestionAnswer,
};

/// Reported processing time in seconds. Constant.
pub const PROCESSING_TIME: f64 = 2.3;

const BASE_CONFIDENCE: f64 = 85.5;

/// Analysis types with a dedicated mock payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisType {
    #[default]
    TextGeneration,
    TextClassification,
    TokenClassification,
    QuestionAnswering,
    Summarization,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 5] = [
        Self::TextGeneration,
        Self::TextClassification,
        Self::TokenClassification,
        Self::QuestionAnswering,
        Self::Summarization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextGeneration => "text-generation",
            Self::TextClassification => "text-classification",
            Self::TokenClassification => "token-classification",
            Self::QuestionAnswering => "question-answering",
            Self::Summarization => "summarization",
        }
    }

    /// Exact, case-sensitive match against the known type names.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Placeholder confidence: 85.5 plus the character count of `text` modulo 10.
pub fn mock_confidence(text: &str) -> f64 {
    BASE_CONFIDENCE + (text.chars().count() % 10) as f64
}

/// Generate a mock analysis stamped with the current local time.
pub fn generate_mock_analysis(request: &AnalysisRequest) -> AnalysisResult {
    generate_mock_analysis_at(request, Local::now().naive_local())
}

/// Generate a mock analysis with an explicit timestamp.
pub fn generate_mock_analysis_at(
    request: &AnalysisRequest,
    timestamp: NaiveDateTime,
) -> AnalysisResult {
    let document_type = detect_document_type(&request.text);
    let detail = request.kind().map(|kind| mock_detail(kind, document_type));
    debug!(
        document_type = %document_type,
        analysis_type = %request.analysis_type_label(),
        recognised = detail.is_some(),
        "Generated mock analysis"
    );

    AnalysisResult {
        document_type,
        confidence: mock_confidence(&request.text),
        model_used: request.model.clone(),
        analysis_type: request.analysis_type.clone(),
        processing_time: PROCESSING_TIME,
        timestamp,
        detail,
    }
}

fn mock_detail(kind: AnalysisType, document_type: DocumentType) -> AnalysisDetail {
    match kind {
        AnalysisType::TextGeneration => {
            AnalysisDetail::AnalysisResult(AnalysisOutput::Report(findings_report(document_type)))
        }
        AnalysisType::TextClassification => AnalysisDetail::Classifications(vec![
            Classification::new("CONTRACT", 0.89),
            Classification::new("LEGAL_DOCUMENT", 0.76),
            Classification::new("AGREEMENT", 0.65),
        ]),
        AnalysisType::TokenClassification => AnalysisDetail::Entities(vec![
            Entity::new("ORG", "Company", 10, 17, 0.99),
            Entity::new("PERSON", "John Smith", 25, 35, 0.95),
            Entity::new("DATE", "January 1, 2024", 45, 60, 0.98),
            Entity::new("MONEY", "$10,000", 70, 77, 0.92),
        ]),
        AnalysisType::QuestionAnswering => {
            AnalysisDetail::AnalysisResult(AnalysisOutput::Answers(vec![
                QuestionAnswer::new("What type of document is this?", document_type.label(), 0.95),
                QuestionAnswer::new(
                    "What are the main parties?",
                    "The contracting parties as defined in the agreement",
                    0.87,
                ),
                QuestionAnswer::new(
                    "What are key obligations?",
                    "Payment obligations, confidentiality, and performance requirements",
                    0.82,
                ),
            ]))
        }
        AnalysisType::Summarization => AnalysisDetail::Summary(summary(document_type)),
    }
}

// Line layout, including the blank lead-in, trailing spaces and the
// indented last line, is part of the response body.
const REPORT_LINES: &[&str] = &[
    "",
    "Based on the analysis of this {kind}, here are the key findings:",
    "",
    "1. **Document Structure**: The document follows standard legal formatting and includes necessary sections for a {kind}.",
    "",
    "2. **Key Elements Identified**:",
    "   - Clear definitions and terminology",
    "   - Well-defined obligations and responsibilities  ",
    "   - Appropriate termination and dispute resolution clauses",
    "   - Standard legal protections and limitations",
    "",
    "3. **Risk Assessment**:",
    "   - **Low Risk**: Standard legal language and structure",
    "   - **Medium Risk**: Some terms may benefit from clarification",
    "   - **Areas for Review**: Payment terms and liability limitations",
    "",
    "4. **Compliance Notes**:",
    "   - Document appears to follow industry standards",
    "   - Recommend legal review for jurisdiction-specific requirements",
    "   - Consider adding force majeure provisions if not present",
    "",
    "5. **Recommendations**:",
    "   - Review indemnification clauses for balance",
    "   - Ensure data protection compliance",
    "   - Verify proper execution procedures",
    "        ",
];

fn findings_report(document_type: DocumentType) -> String {
    let kind = document_type.label().to_lowercase();
    REPORT_LINES.join("\n").replace("{kind}", &kind)
}

fn summary(document_type: DocumentType) -> String {
    let kind = document_type.label().to_lowercase();
    format!(
        "This {kind} establishes the terms and conditions governing the relationship between the parties. \
         Key provisions include payment terms, confidentiality obligations, termination conditions, \
         and dispute resolution procedures. The agreement includes standard legal protections and \
         defines the scope of work or services to be provided."
    )
}
