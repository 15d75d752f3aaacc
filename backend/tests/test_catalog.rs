//! Tests for the scenario catalog

use subrogation_workflow_core::models::{AgentInput, DocumentType, LiabilityInput};
use subrogation_workflow_core::{
    AgentStatus, Scenario, ScenarioCatalog, ScenarioStage, SimulationError,
};

const NOW: u64 = 1_724_753_700_000;

fn five_pending(id: &str) -> Scenario {
    Scenario {
        workflow_id: id.to_string(),
        claim_id: "claim-x".to_string(),
        claim_number: format!("SUB-{}", id),
        stage_suffix: "x".to_string(),
        started_ago_ms: None,
        current_step: 0,
        stages: (0..5).map(|_| ScenarioStage::pending()).collect(),
    }
}

#[test]
fn test_demo_catalog_lists_two_scenarios() {
    let catalog = ScenarioCatalog::demo();
    let numbers: Vec<&str> = catalog
        .scenarios()
        .iter()
        .map(|s| s.claim_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["SUB-2024-001", "SUB-2024-002"]);
}

#[test]
fn test_fresh_scenario_is_all_pending() {
    let catalog = ScenarioCatalog::demo();
    let wf = catalog.find("workflow-001").unwrap().instantiate(NOW).unwrap();

    assert_eq!(wf.status(), AgentStatus::Pending);
    assert_eq!(wf.current_step(), 0);
    assert!(wf.agents().iter().all(|a| a.is_pending()));
    assert!(wf.started_at().is_none());
    assert!(wf.agents()[0].input().is_some(), "parser input is seeded");
    assert!(wf.agents()[1].input().is_none());
}

#[test]
fn test_in_flight_scenario_resolves_offsets() {
    let catalog = ScenarioCatalog::demo();
    let wf = catalog.find("SUB-2024-002").unwrap().instantiate(NOW).unwrap();

    assert_eq!(wf.status(), AgentStatus::Processing);
    assert_eq!(wf.current_step(), 2);
    assert_eq!(wf.agents()[0].status(), AgentStatus::Completed);
    assert_eq!(wf.agents()[0].processing_duration_ms(), Some(52_000));
    assert_eq!(wf.agents()[1].status(), AgentStatus::Processing);
    assert_eq!(wf.agents()[1].started_at(), Some(NOW - 15_000));
    assert_eq!(wf.started_at(), Some(NOW - 67_000));
    assert_eq!(wf.processing_count(), 1);
}

#[test]
fn test_find_unknown_workflow() {
    let catalog = ScenarioCatalog::demo();
    assert_eq!(
        catalog.find("workflow-404").unwrap_err(),
        SimulationError::UnknownWorkflow("workflow-404".to_string())
    );
}

#[test]
fn test_scenario_with_four_stages_rejected() {
    let mut scenario = five_pending("short");
    scenario.stages.pop();
    assert!(matches!(
        scenario.instantiate(NOW),
        Err(SimulationError::InvalidScenario(_))
    ));
}

#[test]
fn test_scenario_with_two_processing_stages_rejected() {
    let mut scenario = five_pending("busy");
    for stage in scenario.stages.iter_mut().take(2) {
        stage.status = AgentStatus::Processing;
        stage.started_ago_ms = Some(1_000);
    }
    let err = ScenarioCatalog::new(vec![scenario]).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidScenario(msg) if msg.contains("2 stages processing")));
}

#[test]
fn test_scenario_with_misplaced_input_rejected() {
    let mut scenario = five_pending("misplaced");
    scenario.stages[0].input = Some(AgentInput::LiabilityDetection(LiabilityInput {
        text: "fell down".to_string(),
        document_type: DocumentType::ClaimForm,
    }));
    assert!(matches!(
        scenario.instantiate(NOW),
        Err(SimulationError::InvalidScenario(_))
    ));
}

#[test]
fn test_custom_catalog_first_is_default_selection() {
    let catalog = ScenarioCatalog::new(vec![five_pending("a"), five_pending("b")]).unwrap();
    assert_eq!(catalog.first().workflow_id, "a");
}
