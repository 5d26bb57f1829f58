//! Domain service for the ROI simulator.
//!
//! Orchestrates validation, calculation, scenario persistence, and report
//! rendering. Holds no mutable state; each call is request-scoped.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::instrument;

use super::calculator::calculate;
use super::error::DomainError;
use super::model::{NewScenario, Scenario, ScenarioSummary, SimulationInputs, SimulationResult};
use super::report::{ReportDocument, ReportRenderer};
use super::repo::ScenarioRepository;

/// Basic `local@domain.tld` shape; anything stricter belongs to a mail
/// delivery layer, not input validation.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // compile-time constant pattern
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile")
});

/// Domain service for simulation and scenario operations.
pub struct Service {
    repo: Arc<dyn ScenarioRepository>,
    renderer: Arc<dyn ReportRenderer>,
}

impl Service {
    pub fn new(repo: Arc<dyn ScenarioRepository>, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self { repo, renderer }
    }

    /// Validate an untyped payload and compute its projection. Pure; no I/O.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    #[instrument(skip(self, payload))]
    pub fn simulate(
        &self,
        payload: &Value,
    ) -> Result<(SimulationInputs, SimulationResult), DomainError> {
        let inputs = SimulationInputs::from_payload(payload)?;
        let results = calculate(&inputs);
        tracing::debug!(monthly_savings = results.monthly_savings, "simulation computed");
        Ok((inputs, results))
    }

    /// Validate, compute, and persist a named scenario.
    ///
    /// The raw request JSON and the computed result JSON are stored verbatim
    /// so a later read returns exactly what was submitted and derived.
    ///
    /// # Errors
    ///
    /// Validation errors for bad inputs or a missing name; `Database` when
    /// the store rejects the write (the transaction is rolled back by the
    /// repository).
    #[instrument(skip(self, payload))]
    pub async fn create_scenario(&self, payload: &Value) -> Result<Scenario, DomainError> {
        let scenario_name = payload
            .get("scenario_name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| DomainError::validation("scenario_name is required"))?
            .to_owned();

        let (_, results) = self.simulate(payload)?;

        let new_scenario = NewScenario {
            scenario_name,
            inputs_json: payload.to_string(),
            results_json: serde_json::to_string(&results)
                .map_err(|e| DomainError::database(e.to_string()))?,
        };

        let scenario = self
            .repo
            .insert(new_scenario)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        tracing::info!(id = scenario.id, "scenario created");
        Ok(scenario)
    }

    /// List scenario summaries, newest first.
    ///
    /// # Errors
    ///
    /// `Database` on storage failure.
    #[instrument(skip(self))]
    pub async fn list_scenarios(&self) -> Result<Vec<ScenarioSummary>, DomainError> {
        self.repo
            .list()
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Fetch one scenario with its raw input/result JSON.
    ///
    /// # Errors
    ///
    /// `ScenarioNotFound` for an unknown id; `Database` on storage failure.
    #[instrument(skip(self))]
    pub async fn get_scenario(&self, id: i32) -> Result<Scenario, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::scenario_not_found(id))
    }

    /// Delete a scenario by id.
    ///
    /// # Errors
    ///
    /// `ScenarioNotFound` when no row was removed; `Database` on storage
    /// failure.
    #[instrument(skip(self))]
    pub async fn delete_scenario(&self, id: i32) -> Result<(), DomainError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        if deleted {
            tracing::info!(id, "scenario deleted");
            Ok(())
        } else {
            Err(DomainError::scenario_not_found(id))
        }
    }

    /// Validate inputs plus email, compute, and render the report document.
    ///
    /// # Errors
    ///
    /// Validation errors for bad inputs or a malformed email.
    #[instrument(skip(self, payload))]
    pub fn generate_report(&self, payload: &Value) -> Result<ReportDocument, DomainError> {
        let email = payload
            .get("email")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|email| EMAIL_RE.is_match(email))
            .ok_or_else(|| DomainError::validation("A valid email address is required"))?
            .to_owned();

        let (_, results) = self.simulate(payload)?;

        Ok(self.renderer.render(&email, payload, &results))
    }
}
