//! Report generation seam.
//!
//! The plain-text renderer is a deliberate placeholder: a real
//! implementation substitutes a templated document generator behind the
//! same interface (inputs, computed results, email in; byte stream out)
//! without changing the service contract.

use chrono::Utc;
use serde_json::Value;

use super::model::SimulationResult;

/// A rendered, downloadable report document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Rendering seam between the service and the document format.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, email: &str, inputs: &Value, results: &SimulationResult) -> ReportDocument;
}

/// Placeholder renderer emitting a plain-text document.
pub struct PlainTextReportRenderer;

impl ReportRenderer for PlainTextReportRenderer {
    fn render(&self, email: &str, inputs: &Value, results: &SimulationResult) -> ReportDocument {
        let generated_at = Utc::now();

        let fmt_opt = |value: Option<f64>| match value {
            Some(v) => format!("{v}"),
            None => "n/a".to_owned(),
        };

        let body = format!(
            "ROI SIMULATION REPORT\n\
             =====================\n\
             \n\
             Generated: {generated}\n\
             Requested by: {email}\n\
             \n\
             Inputs\n\
             ------\n\
             {inputs}\n\
             \n\
             Results\n\
             -------\n\
             Monthly savings:  {monthly}\n\
             Payback (months): {payback}\n\
             ROI (%):          {roi}\n\
             Boost factor:     {boost}\n\
             \n\
             This document is a placeholder. A production deployment renders\n\
             a formatted report from the same data.\n",
            generated = generated_at.to_rfc3339(),
            inputs = serde_json::to_string_pretty(inputs).unwrap_or_else(|_| inputs.to_string()),
            monthly = results.monthly_savings,
            payback = fmt_opt(results.payback_months),
            roi = fmt_opt(results.roi_percentage),
            boost = results.boost_factor,
        );

        ReportDocument {
            filename: format!("roi_report_{}.txt", generated_at.format("%Y%m%d_%H%M%S")),
            content_type: "text/plain; charset=utf-8",
            body: body.into_bytes(),
        }
    }
}
