//! Value objects for the simulation core and the persisted scenario entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::DomainError;

/// Validated simulation inputs. Immutable once constructed; all present
/// values are guaranteed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub labor_cost_manual: f64,
    pub error_savings: f64,
    pub auto_cost: f64,
    pub implementation_cost: Option<f64>,
}

impl SimulationInputs {
    /// Parse an untyped JSON payload into validated inputs.
    ///
    /// Coercion is deliberately narrow: JSON numbers pass through, numeric
    /// strings are parsed after trimming, and everything else (booleans,
    /// nulls, arrays, objects) is rejected naming the offending field.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] when a required field is absent
    /// or null, [`DomainError::InvalidType`] when a value cannot be coerced,
    /// and [`DomainError::OutOfRange`] when any value is negative.
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let labor_cost_manual = require_number(payload, "labor_cost_manual")?;
        let error_savings = require_number(payload, "error_savings")?;
        let auto_cost = require_number(payload, "auto_cost")?;
        let implementation_cost = optional_number(payload, "implementation_cost")?;

        if labor_cost_manual < 0.0 || error_savings < 0.0 || auto_cost < 0.0 {
            return Err(DomainError::out_of_range(
                "Inputs must be non-negative numbers",
            ));
        }
        if let Some(cost) = implementation_cost {
            if cost < 0.0 {
                return Err(DomainError::out_of_range(
                    "implementation_cost must be non-negative if provided",
                ));
            }
        }

        Ok(Self {
            labor_cost_manual,
            error_savings,
            auto_cost,
            implementation_cost,
        })
    }
}

/// Coerce a single JSON value to a finite float.
fn coerce_number(field: &'static str, value: &Value) -> Result<f64, DomainError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(DomainError::invalid_type(field)),
    }
}

fn require_number(payload: &Value, field: &'static str) -> Result<f64, DomainError> {
    match payload.get(field) {
        None | Some(Value::Null) => Err(DomainError::missing_field(field)),
        Some(value) => coerce_number(field, value),
    }
}

fn optional_number(payload: &Value, field: &'static str) -> Result<Option<f64>, DomainError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_number(field, value).map(Some),
    }
}

/// Derived simulation result. A pure, deterministic function of
/// [`SimulationInputs`] and the boost factor; no hidden state, no I/O.
///
/// Absent payback/ROI serialize as JSON null, matching the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub monthly_savings: f64,
    pub payback_months: Option<f64>,
    pub roi_percentage: Option<f64>,
    pub boost_factor: f64,
}

/// Persisted scenario: a named snapshot of one simulation's raw input JSON
/// and computed result JSON. Never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: i32,
    pub scenario_name: String,
    pub inputs_json: String,
    pub results_json: String,
    pub created_at: DateTime<Utc>,
}

/// Listing projection of a scenario (no payload columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSummary {
    pub id: i32,
    pub scenario_name: String,
    pub created_at: DateTime<Utc>,
}

/// Scenario data ready for insertion.
#[derive(Debug, Clone)]
pub struct NewScenario {
    pub scenario_name: String,
    pub inputs_json: String,
    pub results_json: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_plain_numbers() {
        let inputs = SimulationInputs::from_payload(&json!({
            "labor_cost_manual": 1000,
            "error_savings": 200.5,
            "auto_cost": 300,
        }))
        .unwrap();
        assert_eq!(inputs.labor_cost_manual, 1000.0);
        assert_eq!(inputs.error_savings, 200.5);
        assert_eq!(inputs.implementation_cost, None);
    }

    #[test]
    fn accepts_numeric_strings() {
        let inputs = SimulationInputs::from_payload(&json!({
            "labor_cost_manual": "1000",
            "error_savings": " 200 ",
            "auto_cost": "300.25",
            "implementation_cost": "50",
        }))
        .unwrap();
        assert_eq!(inputs.auto_cost, 300.25);
        assert_eq!(inputs.implementation_cost, Some(50.0));
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let err = SimulationInputs::from_payload(&json!({
            "labor_cost_manual": 1000,
            "auto_cost": 300,
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: error_savings");
    }

    #[test]
    fn null_required_field_is_missing() {
        let err = SimulationInputs::from_payload(&json!({
            "labor_cost_manual": null,
            "error_savings": 200,
            "auto_cost": 300,
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::MissingField {
                field: "labor_cost_manual"
            }
        ));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        for bad in [json!("abc"), json!(true), json!([1]), json!({"x": 1})] {
            let err = SimulationInputs::from_payload(&json!({
                "labor_cost_manual": bad,
                "error_savings": 200,
                "auto_cost": 300,
            }))
            .unwrap_err();
            assert_eq!(err.to_string(), "Field 'labor_cost_manual' must be a number");
        }
    }

    #[test]
    fn non_finite_strings_are_rejected() {
        for bad in ["nan", "inf", "-inf"] {
            let err = SimulationInputs::from_payload(&json!({
                "labor_cost_manual": bad,
                "error_savings": 200,
                "auto_cost": 300,
            }))
            .unwrap_err();
            assert!(matches!(err, DomainError::InvalidType { .. }));
        }
    }

    #[test]
    fn negative_required_input_is_out_of_range() {
        let err = SimulationInputs::from_payload(&json!({
            "labor_cost_manual": -1,
            "error_savings": 200,
            "auto_cost": 300,
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "Inputs must be non-negative numbers");
    }

    #[test]
    fn negative_implementation_cost_is_out_of_range() {
        let err = SimulationInputs::from_payload(&json!({
            "labor_cost_manual": 1000,
            "error_savings": 200,
            "auto_cost": 300,
            "implementation_cost": -0.5,
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "implementation_cost must be non-negative if provided"
        );
    }

    #[test]
    fn null_optional_field_is_absent() {
        let inputs = SimulationInputs::from_payload(&json!({
            "labor_cost_manual": 1000,
            "error_savings": 200,
            "auto_cost": 300,
            "implementation_cost": null,
        }))
        .unwrap();
        assert_eq!(inputs.implementation_cost, None);
    }

    #[test]
    fn non_object_payload_reports_first_required_field() {
        let err = SimulationInputs::from_payload(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(
            err,
            DomainError::MissingField {
                field: "labor_cost_manual"
            }
        ));
    }
}
