//! Analysis request schema.
//!
//! The body of `POST /analyze` is parsed once here and every missing
//! field is defaulted, so the generator only ever sees a complete request.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::analysis::AnalysisType;
use crate::error::{AnalyzerError, AnalyzerResult};

/// Model reported when the client does not name one.
pub const DEFAULT_MODEL: &str = "microsoft/DialoGPT-medium";

/// A fully defaulted analysis request.
///
/// Only `text` is typed. The other fields are echoed back exactly as sent,
/// so a numeric `model` or a `null` analysis type is reported rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub model: Value,
    /// Unknown values, including non-strings, produce no type-specific payload.
    pub analysis_type: Value,
    /// Opaque; carried for completeness and never inspected.
    pub parameters: Value,
}

impl AnalysisRequest {
    /// Create a request for `text` with every other field defaulted.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: Value::from(DEFAULT_MODEL),
            analysis_type: Value::from(AnalysisType::default().as_str()),
            parameters: Value::Object(Map::new()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Value::String(model.into());
        self
    }

    pub fn with_analysis_type(mut self, analysis_type: impl Into<String>) -> Self {
        self.analysis_type = Value::String(analysis_type.into());
        self
    }

    /// Parse a raw request body.
    ///
    /// Empty, unparseable and falsy JSON bodies (including `{}`) are all
    /// reported as [`AnalyzerError::NoData`]. A non-object body or a `text`
    /// that is not a string is [`AnalyzerError::MalformedRequest`].
    pub fn from_body(body: &[u8]) -> AnalyzerResult<Self> {
        if body.is_empty() {
            return Err(AnalyzerError::NoData);
        }
        let value: Value = serde_json::from_slice(body).map_err(|_| AnalyzerError::NoData)?;
        Self::from_value(value)
    }

    /// Build a request from an already decoded JSON value.
    ///
    /// Defaults apply to absent keys only; an explicit `null` is kept.
    pub fn from_value(value: Value) -> AnalyzerResult<Self> {
        if is_falsy(&value) {
            return Err(AnalyzerError::NoData);
        }
        let Value::Object(mut fields) = value else {
            return Err(AnalyzerError::malformed(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        };

        let mut request = match fields.remove("text") {
            None => Self::new(String::new()),
            Some(Value::String(text)) => Self::new(text),
            Some(other) => {
                return Err(AnalyzerError::malformed(format!(
                    "text must be a string, found {}",
                    json_kind(&other)
                )))
            }
        };
        if let Some(model) = fields.remove("model") {
            request.model = model;
        }
        if let Some(analysis_type) = fields.remove("analysis_type") {
            request.analysis_type = analysis_type;
        }
        if let Some(parameters) = fields.remove("parameters") {
            request.parameters = parameters;
        }
        Ok(request)
    }

    /// The recognised analysis type, if any.
    pub fn kind(&self) -> Option<AnalysisType> {
        self.analysis_type.as_str().and_then(AnalysisType::parse)
    }

    /// Model name for log lines; strings without JSON quoting.
    pub fn model_label(&self) -> Cow<'_, str> {
        display_value(&self.model)
    }

    /// Analysis type for log lines; strings without JSON quoting.
    pub fn analysis_type_label(&self) -> Cow<'_, str> {
        display_value(&self.analysis_type)
    }
}

fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Truthiness of a JSON value: empty containers, empty strings, zero,
/// `false` and `null` count as no data at all.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
