//! REST DTOs for the ROI simulator.
//!
//! These DTOs have serde and utoipa derives for REST serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::model::{Scenario, ScenarioSummary, SimulationResult};

/// Computed projection for one simulation.
///
/// Absent payback/ROI serialize as null, mirroring the stored result JSON.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SimulationResultDto {
    pub monthly_savings: f64,
    pub payback_months: Option<f64>,
    pub roi_percentage: Option<f64>,
    pub boost_factor: f64,
}

impl From<SimulationResult> for SimulationResultDto {
    fn from(result: SimulationResult) -> Self {
        Self {
            monthly_savings: result.monthly_savings,
            payback_months: result.payback_months,
            roi_percentage: result.roi_percentage,
            boost_factor: result.boost_factor,
        }
    }
}

/// Response for `POST /api/simulate`: the echoed request body plus results.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SimulateResponse {
    #[schema(value_type = Object)]
    pub inputs: Value,
    pub results: SimulationResultDto,
}

/// Response for `POST /api/scenarios`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateScenarioResponse {
    pub id: i32,
    pub status: String,
}

/// Listing projection of a persisted scenario.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScenarioSummaryDto {
    pub id: i32,
    pub scenario_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ScenarioSummary> for ScenarioSummaryDto {
    fn from(summary: ScenarioSummary) -> Self {
        Self {
            id: summary.id,
            scenario_name: summary.scenario_name,
            created_at: summary.created_at,
        }
    }
}

/// Response for `GET /api/scenarios`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScenarioListResponse {
    pub scenarios: Vec<ScenarioSummaryDto>,
}

/// Full persisted scenario record, raw JSON columns included.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScenarioDto {
    pub id: i32,
    pub scenario_name: String,
    pub inputs_json: String,
    pub results_json: String,
    pub created_at: DateTime<Utc>,
}

impl From<Scenario> for ScenarioDto {
    fn from(scenario: Scenario) -> Self {
        Self {
            id: scenario.id,
            scenario_name: scenario.scenario_name,
            inputs_json: scenario.inputs_json,
            results_json: scenario.results_json,
            created_at: scenario.created_at,
        }
    }
}

/// Plain status envelope (`deleted`, `ok`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_owned(),
        }
    }
}
