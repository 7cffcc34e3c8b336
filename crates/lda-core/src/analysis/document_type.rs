//! Keyword-based document type detection.

use serde::Serialize;
use std::fmt;

/// Coarse document label assigned by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentType {
    Contract,
    #[serde(rename = "NDA")]
    Nda,
    #[serde(rename = "Terms of Service")]
    TermsOfService,
    #[serde(rename = "Privacy Policy")]
    PrivacyPolicy,
    #[serde(rename = "Lease Agreement")]
    LeaseAgreement,
    #[serde(rename = "Legal Document")]
    LegalDocument,
}

/// Keyword groups in match priority. The first group with a hit wins.
const KEYWORDS: &[(DocumentType, &[&str])] = &[
    (DocumentType::Contract, &["contract", "agreement"]),
    (DocumentType::Nda, &["nda", "non-disclosure"]),
    (
        DocumentType::TermsOfService,
        &["terms of service", "terms and conditions"],
    ),
    (DocumentType::PrivacyPolicy, &["privacy policy"]),
    (DocumentType::LeaseAgreement, &["lease", "rental"]),
];

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contract => "Contract",
            Self::Nda => "NDA",
            Self::TermsOfService => "Terms of Service",
            Self::PrivacyPolicy => "Privacy Policy",
            Self::LeaseAgreement => "Lease Agreement",
            Self::LegalDocument => "Legal Document",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect the document type of `text`.
///
/// Matching is a case-insensitive substring test, so "standard" counts as
/// a hit for "nda". Never fails: text with no hits is a generic legal document.
pub fn detect_document_type(text: &str) -> DocumentType {
    let lower = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(kind, _)| *kind)
        .unwrap_or(DocumentType::LegalDocument)
}
