//! LDA Core Library
//!
//! Request schema and the mock document analysis generator for the
//! Legal Document Analyzer backend.

pub mod analysis;
pub mod error;
pub mod request;

pub use analysis::{generate_mock_analysis, AnalysisType};
pub use error::{AnalyzerError, AnalyzerResult};
pub use request::AnalysisRequest;
