//! Tests for the narrowing wizard state machine.

mod test_utils;

use concierge_core::PromptTemplate;
use concierge_error::{ConciergeErrorKind, ExtractionErrorKind, ValidationErrorKind};
use concierge_wizard::{InMemoryPromptStore, PlanSimulator, Wizard, WizardPhase};
use std::sync::Arc;
use test_utils::{
    FailingExecutor, MockGenerator, Reply, choices_reply, config, guided_config, guided_reply,
};

const LOCAL_SHOP: &str = "地元のお店を予約・注文したい";

fn wizard(
    generator: Arc<MockGenerator>,
    max_steps: usize,
) -> Wizard<Arc<MockGenerator>, InMemoryPromptStore, PlanSimulator> {
    Wizard::new(
        generator,
        InMemoryPromptStore::with_defaults(),
        PlanSimulator,
        &config(max_steps),
    )
}

/// Drive a 3-step wizard to the locality prompt.
async fn narrowed(
    generator: Arc<MockGenerator>,
) -> Wizard<Arc<MockGenerator>, InMemoryPromptStore, PlanSimulator> {
    let mut wizard = wizard(generator, 3);
    wizard.select_choice(0, LOCAL_SHOP).await.unwrap();
    wizard.select_choice(1, "A1").await.unwrap();
    wizard.select_choice(2, "A3").await.unwrap();
    wizard
}

fn validation_kind(err: &concierge_error::ConciergeError) -> &ValidationErrorKind {
    match err.kind() {
        ConciergeErrorKind::Validation(v) => &v.kind,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_starts_at_fixed_first_step() {
    let mut wizard = wizard(Arc::new(MockGenerator::default()), 3);
    let snapshot = wizard.start();

    assert_eq!(*snapshot.phase(), WizardPhase::Collecting { step: 1 });
    assert_eq!(snapshot.history().len(), 1);
    assert!(snapshot.history()[0].is_open());
    assert_eq!(snapshot.history()[0].choices().len(), 4);
    assert_eq!(*snapshot.step_budget(), 3);
}

#[tokio::test]
async fn test_first_selection_generates_next_step() {
    let generator = Arc::new(MockGenerator::new([Reply::Text(choices_reply("A"))]));
    let mut wizard = wizard(generator.clone(), 3);

    let snapshot = wizard.select_choice(0, LOCAL_SHOP).await.unwrap();

    assert_eq!(generator.calls(), 1);
    assert_eq!(*snapshot.phase(), WizardPhase::Collecting { step: 2 });
    assert_eq!(snapshot.history().len(), 2);
    assert_eq!(snapshot.history()[0].selected().as_deref(), Some(LOCAL_SHOP));

    let open = &snapshot.history()[1];
    assert!(open.is_open());
    assert_eq!(open.choices().len(), 4);
    assert_eq!(open.choices()[0].text(), "A1");
    assert_eq!(open.choices()[3].icon(), "☕");
}

#[tokio::test]
async fn test_prompt_lists_history_with_tentative_selection() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = wizard(generator.clone(), 3);

    wizard.select_choice(0, LOCAL_SHOP).await.unwrap();
    wizard.select_choice(1, "A2").await.unwrap();

    let prompts = generator.prompts();
    assert!(prompts[0].contains(&format!("Step 1: {}", LOCAL_SHOP)));
    assert!(!prompts[0].contains("{history}"));
    assert!(prompts[1].contains(&format!("Step 1: {}\nStep 2: A2", LOCAL_SHOP)));
}

#[tokio::test]
async fn test_last_step_awaits_locality_without_call() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = wizard(generator.clone(), 3);

    wizard.select_choice(0, LOCAL_SHOP).await.unwrap();
    wizard.select_choice(1, "A1").await.unwrap();
    assert_eq!(generator.calls(), 2);

    let snapshot = wizard.select_choice(2, "A4").await.unwrap();

    assert_eq!(generator.calls(), 2);
    assert_eq!(*snapshot.phase(), WizardPhase::AwaitingLocality);
    assert!(snapshot.history().iter().all(|s| !s.is_open()));
}

#[tokio::test]
async fn test_single_step_budget() {
    let generator = Arc::new(MockGenerator::default());
    let mut wizard = wizard(generator.clone(), 1);

    let snapshot = wizard.select_choice(0, LOCAL_SHOP).await.unwrap();

    assert_eq!(generator.calls(), 0);
    assert_eq!(*snapshot.phase(), WizardPhase::AwaitingLocality);
}

#[tokio::test]
async fn test_wrong_step_index_rejected() {
    let generator = Arc::new(MockGenerator::default());
    let mut wizard = wizard(generator.clone(), 3);
    let before = wizard.snapshot();

    let err = wizard.select_choice(1, LOCAL_SHOP).await.unwrap_err();

    assert!(matches!(
        validation_kind(&err),
        ValidationErrorKind::StepIndex {
            expected: 0,
            actual: 1
        }
    ));
    assert_eq!(wizard.snapshot(), before);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_unknown_choice_rejected() {
    let generator = Arc::new(MockGenerator::default());
    let mut wizard = wizard(generator.clone(), 3);
    let before = wizard.snapshot();

    let err = wizard.select_choice(0, "宇宙旅行").await.unwrap_err();

    assert!(matches!(
        validation_kind(&err),
        ValidationErrorKind::UnknownChoice(_)
    ));
    assert_eq!(wizard.snapshot(), before);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_malformed_output_leaves_history_untouched() {
    let generator = Arc::new(MockGenerator::new([Reply::Text(
        "すみません、今は提案できません。".into(),
    )]));
    let mut wizard = wizard(generator.clone(), 3);
    let before = wizard.snapshot();

    let err = wizard.select_choice(0, LOCAL_SHOP).await.unwrap_err();

    match err.kind() {
        ConciergeErrorKind::Extraction(e) => {
            assert!(matches!(e.kind, ExtractionErrorKind::MalformedOutput(_)));
            assert_eq!(e.raw, "すみません、今は提案できません。");
        }
        other => panic!("Expected extraction error, got {:?}", other),
    }
    assert!(err.is_transient());
    assert_eq!(wizard.snapshot(), before);
}

#[tokio::test]
async fn test_wrong_shape_is_unexpected_shape() {
    let generator = Arc::new(MockGenerator::new([Reply::Text("```json\n[1,2]\n```".into())]));
    let mut wizard = wizard(generator, 3);
    let before = wizard.snapshot();

    let err = wizard.select_choice(0, LOCAL_SHOP).await.unwrap_err();

    match err.kind() {
        ConciergeErrorKind::Extraction(e) => {
            assert!(matches!(e.kind, ExtractionErrorKind::UnexpectedShape(_)))
        }
        other => panic!("Expected extraction error, got {:?}", other),
    }
    assert_eq!(wizard.snapshot(), before);
}

#[tokio::test]
async fn test_generator_failure_surfaces() {
    let generator = Arc::new(MockGenerator::new([Reply::Unreachable]));
    let mut wizard = wizard(generator.clone(), 3);
    let before = wizard.snapshot();

    let err = wizard.select_choice(0, LOCAL_SHOP).await.unwrap_err();

    assert!(matches!(err.kind(), ConciergeErrorKind::Service(_)));
    assert_eq!(generator.calls(), 1);
    assert_eq!(wizard.snapshot(), before);
}

#[tokio::test]
async fn test_missing_template_is_configuration_error() {
    let generator = Arc::new(MockGenerator::default());
    let mut wizard = Wizard::new(
        generator.clone(),
        InMemoryPromptStore::new(),
        PlanSimulator,
        &config(3),
    );

    let err = wizard.select_choice(0, LOCAL_SHOP).await.unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(generator.calls(), 0);
    assert_eq!(*wizard.snapshot().phase(), WizardPhase::Collecting { step: 1 });
}

#[tokio::test]
async fn test_operator_edited_template_is_used() {
    let generator = Arc::new(MockGenerator::new([Reply::Text(choices_reply("A"))]));
    let store = InMemoryPromptStore::with_templates([PromptTemplate::new(
        "choice_generator",
        "CUSTOM<{history}>",
        "",
    )]);
    let mut wizard = Wizard::new(generator.clone(), store, PlanSimulator, &config(3));

    wizard.select_choice(0, LOCAL_SHOP).await.unwrap();

    assert_eq!(
        generator.prompts()[0],
        format!("CUSTOM<Step 1: {}>", LOCAL_SHOP)
    );
}

#[tokio::test]
async fn test_valid_locality_finalizes_goal() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = narrowed(generator).await;

    let snapshot = wizard.submit_locality("1010021").unwrap();

    assert_eq!(*snapshot.phase(), WizardPhase::Finalized);
    let goal = snapshot.goal().as_ref().unwrap();
    assert_eq!(goal.path(), format!("{} > A1 > A3", LOCAL_SHOP));
    assert_eq!(goal.locality().as_str(), "1010021");
}

#[tokio::test]
async fn test_invalid_locality_codes_rejected() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = narrowed(generator).await;
    let before = wizard.snapshot();

    for code in ["", "101002", "10100211", "101-002", "１０１００２１", "abcdefg", " 1010021"] {
        let err = wizard.submit_locality(code).unwrap_err();
        assert!(
            matches!(validation_kind(&err), ValidationErrorKind::LocalityCode(_)),
            "code {:?} should be rejected",
            code
        );
        assert_eq!(wizard.snapshot(), before);
    }
}

#[tokio::test]
async fn test_cancel_locality_retracts_last_selection() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = narrowed(generator.clone()).await;

    let snapshot = wizard.cancel_locality().unwrap();

    assert_eq!(*snapshot.phase(), WizardPhase::Collecting { step: 3 });
    assert_eq!(snapshot.history().len(), 3);
    assert!(snapshot.history()[2].is_open());
    assert!(!snapshot.history()[1].is_open());

    // The reopened last step can be answered again without a call
    let snapshot = wizard.select_choice(2, "A2").await.unwrap();
    assert_eq!(*snapshot.phase(), WizardPhase::AwaitingLocality);
    assert_eq!(generator.calls(), 2);
}

#[tokio::test]
async fn test_go_back_reopens_previous_step() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 3));
    let mut wizard = wizard(generator.clone(), 3);
    wizard.select_choice(0, LOCAL_SHOP).await.unwrap();
    wizard.select_choice(1, "A1").await.unwrap();
    let before_len = wizard.history().len();

    let snapshot = wizard.go_back().unwrap();
    assert_eq!(*snapshot.phase(), WizardPhase::Collecting { step: 2 });
    assert_eq!(snapshot.history().len(), 2);
    assert!(snapshot.history()[1].is_open());

    let snapshot = wizard.select_choice(1, "A4").await.unwrap();
    assert!(snapshot.history().len() <= before_len);
    assert_eq!(snapshot.history()[1].selected().as_deref(), Some("A4"));
}

#[tokio::test]
async fn test_go_back_at_first_step_rejected() {
    let mut wizard = wizard(Arc::new(MockGenerator::default()), 3);

    let err = wizard.go_back().unwrap_err();

    assert!(matches!(
        validation_kind(&err),
        ValidationErrorKind::InvalidTransition { .. }
    ));
}

#[tokio::test]
async fn test_execute_completes_with_narrative() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = narrowed(generator).await;
    wizard.submit_locality("1010021").unwrap();

    let snapshot = wizard.execute().unwrap();

    assert_eq!(*snapshot.phase(), WizardPhase::Completed);
    let narrative = snapshot.result().as_ref().unwrap().narrative();
    assert!(narrative.contains("東京都"));
    assert!(narrative.contains("A3"));
}

#[tokio::test]
async fn test_failed_execution_returns_to_finalized() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = Wizard::new(
        generator,
        InMemoryPromptStore::with_defaults(),
        FailingExecutor,
        &config(3),
    );
    wizard.select_choice(0, LOCAL_SHOP).await.unwrap();
    wizard.select_choice(1, "A1").await.unwrap();
    wizard.select_choice(2, "A2").await.unwrap();
    wizard.submit_locality("5300001").unwrap();

    assert!(wizard.execute().is_err());
    assert_eq!(wizard.phase(), WizardPhase::Finalized);
    assert!(wizard.snapshot().result().is_none());
}

#[tokio::test]
async fn test_reset_after_completion() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = narrowed(generator).await;
    wizard.submit_locality("1010021").unwrap();
    wizard.execute().unwrap();

    let snapshot = wizard.reset();

    assert_eq!(*snapshot.phase(), WizardPhase::Collecting { step: 1 });
    assert_eq!(snapshot.history().len(), 1);
    assert!(snapshot.goal().is_none());
    assert!(snapshot.result().is_none());
}

#[tokio::test]
async fn test_out_of_phase_operations_rejected() {
    let generator = Arc::new(MockGenerator::repeating(&choices_reply("A"), 2));
    let mut wizard = narrowed(generator).await;
    assert_eq!(wizard.phase(), WizardPhase::AwaitingLocality);

    let err = wizard.select_choice(2, "A1").await.unwrap_err();
    assert!(matches!(
        validation_kind(&err),
        ValidationErrorKind::InvalidTransition { .. }
    ));
    assert!(wizard.execute().is_err());
    assert!(wizard.go_back().is_err());

    wizard.submit_locality("0600000").unwrap();
    assert!(wizard.cancel_locality().is_err());
    assert!(wizard.submit_locality("0600000").is_err());
    assert_eq!(wizard.phase(), WizardPhase::Finalized);
}

#[tokio::test]
async fn test_guided_response_uses_model_question() {
    let generator = Arc::new(MockGenerator::new([Reply::Text(guided_reply(
        "どんなお店ですか？",
        false,
        "G",
    ))]));
    let mut wizard = Wizard::new(
        generator,
        InMemoryPromptStore::with_defaults(),
        PlanSimulator,
        &guided_config(3),
    );

    let snapshot = wizard.select_choice(0, LOCAL_SHOP).await.unwrap();

    assert_eq!(snapshot.history()[1].question(), "どんなお店ですか？");
    assert_eq!(*snapshot.step_budget(), 3);
}

#[tokio::test]
async fn test_guided_postal_code_signal_shortens_budget() {
    let generator = Arc::new(MockGenerator::new([Reply::Text(guided_reply(
        "最後に、どれにしますか？",
        true,
        "G",
    ))]));
    let mut wizard = Wizard::new(
        generator.clone(),
        InMemoryPromptStore::with_defaults(),
        PlanSimulator,
        &guided_config(5),
    );

    let snapshot = wizard.select_choice(0, LOCAL_SHOP).await.unwrap();
    assert_eq!(*snapshot.step_budget(), 2);

    let snapshot = wizard.select_choice(1, "G2").await.unwrap();
    assert_eq!(*snapshot.phase(), WizardPhase::AwaitingLocality);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_go_back_restores_budget() {
    let generator = Arc::new(MockGenerator::new([Reply::Text(guided_reply(
        "最後に、どれにしますか？",
        true,
        "G",
    ))]));
    let mut wizard = Wizard::new(
        generator,
        InMemoryPromptStore::with_defaults(),
        PlanSimulator,
        &guided_config(5),
    );
    wizard.select_choice(0, LOCAL_SHOP).await.unwrap();

    let snapshot = wizard.go_back().unwrap();

    assert_eq!(*snapshot.step_budget(), 5);
}

#[tokio::test]
async fn test_snapshot_serializes_for_ui() {
    let generator = Arc::new(MockGenerator::new([Reply::Text(choices_reply("A"))]));
    let mut wizard = wizard(generator, 3);
    let snapshot = wizard.select_choice(0, LOCAL_SHOP).await.unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["phase"]["phase"], "collecting");
    assert_eq!(json["phase"]["step"], 2);
    assert_eq!(json["history"][0]["selected"], LOCAL_SHOP);
    assert!(json["history"][1]["selected"].is_null());
}
