//! Offline analysis command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use lda_core::analysis::{extract_risks, risk_level, AnalysisResult, Risk, RiskLevel};
use lda_core::{generate_mock_analysis, request::DEFAULT_MODEL, AnalysisRequest, AnalysisType};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::extract::extract_text;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Document to analyze (.txt, .doc, .docx, .pdf); reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Model name reported in the result
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Analysis type (text-generation, text-classification, token-classification,
    /// question-answering, summarization)
    #[arg(long = "type", default_value = "text-generation")]
    pub analysis_type: String,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Also flag risk lines in the document and report an overall risk level
    #[arg(long)]
    pub risks: bool,
}

/// Analysis output with the optional risk section.
#[derive(Serialize)]
struct AnalysisReport {
    #[serde(flatten)]
    analysis: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    risks: Option<Vec<Risk>>,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let text = read_document(args.file.as_deref()).await?;

    if AnalysisType::parse(&args.analysis_type).is_none() {
        eprintln!(
            "{} Unknown analysis type '{}': only base fields will be reported",
            "ℹ".blue().bold(),
            args.analysis_type.cyan()
        );
    }

    println!("{}", render(text, &args)?);
    Ok(())
}

/// Read the document text from a file, or from stdin for `None` and `-`.
pub async fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let owned = path.to_path_buf();
            tokio::task::spawn_blocking(move || extract_text(&owned))
                .await?
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            Ok(buf)
        }
    }
}

/// Run the generator on `text` and serialize the result as requested.
pub fn render(text: String, args: &AnalyzeArgs) -> Result<String> {
    let request = AnalysisRequest::new(text)
        .with_model(args.model.clone())
        .with_analysis_type(args.analysis_type.clone());
    tracing::info!(
        "Analyzing document with model: {}, type: {}",
        request.model_label(),
        request.analysis_type_label()
    );
    let analysis = generate_mock_analysis(&request);

    let (risk_level, risks) = if args.risks {
        (
            Some(risk_level(analysis.confidence / 100.0)),
            Some(extract_risks(&request.text)),
        )
    } else {
        (None, None)
    };
    let report = AnalysisReport {
        analysis,
        risk_level,
        risks,
    };

    let output = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    Ok(output)
}
