//! Service-level tests for the scenario store over in-memory SQLite.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;

mod support;
use support::inmem_service;

#[tokio::test]
async fn persisted_scenario_round_trips_inputs_and_results() {
    let service = inmem_service().await;
    let payload = json!({
        "scenario_name": "baseline",
        "labor_cost_manual": 1000,
        "error_savings": 200,
        "auto_cost": 300,
        "implementation_cost": 1000,
    });

    let created = service.create_scenario(&payload).await.unwrap();
    let fetched = service.get_scenario(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.scenario_name, "baseline");
    assert_eq!(fetched.inputs_json, created.inputs_json);
    assert_eq!(fetched.results_json, created.results_json);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&fetched.inputs_json).unwrap(),
        payload
    );

    let results: serde_json::Value = serde_json::from_str(&fetched.results_json).unwrap();
    assert_eq!(results["monthly_savings"], json!(990.0));
    assert_eq!(results["boost_factor"], json!(1.1));
}

#[tokio::test]
async fn ids_increase_monotonically() {
    let service = inmem_service().await;
    let payload = |name: &str| {
        json!({
            "scenario_name": name,
            "labor_cost_manual": 10,
            "error_savings": 1,
            "auto_cost": 2,
        })
    };

    let a = service.create_scenario(&payload("a")).await.unwrap();
    let b = service.create_scenario(&payload("b")).await.unwrap();
    assert!(b.id > a.id);

    let summaries = service.list_scenarios().await.unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, b.id);
}

#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    let service = inmem_service().await;

    let err = service.delete_scenario(424_242).await.unwrap_err();
    assert_eq!(err.to_string(), "Scenario not found: 424242");

    let err = service.get_scenario(424_242).await.unwrap_err();
    assert!(matches!(
        err,
        roi_simulator::DomainError::ScenarioNotFound { id: 424_242 }
    ));
}
