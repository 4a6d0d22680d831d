//! The goal-narrowing state machine.
//!
//! A wizard walks the user through a fixed first step and up to
//! `max_steps - 1` generated steps, asks for a locality code, and hands the
//! resulting [`GoalDescriptor`] to a [`PlanExecutor`].
//!
//! Every operation either fully applies or leaves the wizard untouched.

use crate::extraction::{ChoiceSet, GuidedStep, extract};
use crate::render;
use crate::request::completion_request;
use concierge_config::{ConciergeConfig, GeneratorConfig, ResponseFormat, WizardConfig};
use concierge_core::{Choice, ExecutionResult, GoalDescriptor, LocalityCode, Step};
use concierge_error::{ConciergeError, ConciergeResult, ValidationError, ValidationErrorKind};
use concierge_interface::{PlanExecutor, PromptTemplateStore, TextGenerator};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

const FIRST_QUESTION: &str = "今日はどんなことをしたいですか？";

/// The fixed, non-generated opening step.
pub fn first_step() -> Step {
    Step::new(
        FIRST_QUESTION,
        vec![
            Choice::new("地元のお店を予約・注文したい", "🏪"),
            Choice::new("新しいスキルを学びたい", "📚"),
            Choice::new("週末のお出かけを計画したい", "🗺️"),
            Choice::new("健康的な習慣を始めたい", "🏃"),
        ],
    )
}

/// Where the wizard is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum WizardPhase {
    /// Waiting for a selection at the 1-based narrowing `step`.
    #[display("collecting step {}", step)]
    Collecting {
        /// Current narrowing step, equal to the history length
        step: usize,
    },
    /// All narrowing done, waiting for a locality code.
    #[display("awaiting locality")]
    AwaitingLocality,
    /// Goal is fixed and ready to execute.
    #[display("finalized")]
    Finalized,
    /// The executor is running.
    #[display("executing")]
    Executing,
    /// Execution finished.
    #[display("completed")]
    Completed,
}

/// A copy of the wizard's observable state.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct WizardSnapshot {
    /// Current phase
    phase: WizardPhase,
    /// Steps so far, oldest first
    history: Vec<Step>,
    /// Number of narrowing steps before the locality prompt
    step_budget: usize,
    /// Goal, once a locality has been submitted
    goal: Option<GoalDescriptor>,
    /// Execution result, once completed
    result: Option<ExecutionResult>,
}

/// Multi-step narrowing dialogue.
///
/// Collaborators are injected: `G` produces choices, `S` holds the prompt
/// templates and `E` carries out the finalized goal.
///
/// # Example
///
/// ```no_run
/// use concierge_config::ConciergeConfig;
/// use concierge_models::GeminiClient;
/// use concierge_wizard::{InMemoryPromptStore, PlanSimulator, Wizard};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConciergeConfig::load()?;
/// let generator = GeminiClient::from_config(&config.generator)?;
/// let mut wizard = Wizard::new(
///     generator,
///     InMemoryPromptStore::with_defaults(),
///     PlanSimulator,
///     &config,
/// );
///
/// wizard.select_choice(0, "地元のお店を予約・注文したい").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Wizard<G, S, E> {
    generator: G,
    store: S,
    executor: E,
    generation: GeneratorConfig,
    settings: WizardConfig,
    phase: WizardPhase,
    history: Vec<Step>,
    /// Step a guided response marked as the last one
    final_step: Option<usize>,
    goal: Option<GoalDescriptor>,
    result: Option<ExecutionResult>,
}

impl<G, S, E> Wizard<G, S, E>
where
    G: TextGenerator,
    S: PromptTemplateStore,
    E: PlanExecutor,
{
    /// Create a wizard at the fixed first step.
    pub fn new(generator: G, store: S, executor: E, config: &ConciergeConfig) -> Self {
        Self {
            generator,
            store,
            executor,
            generation: config.generator.clone(),
            settings: config.wizard.clone(),
            phase: WizardPhase::Collecting { step: 1 },
            history: vec![first_step()],
            final_step: None,
            goal: None,
            result: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Steps so far, oldest first.
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Narrowing steps allowed before the locality prompt.
    pub fn step_budget(&self) -> usize {
        self.final_step.unwrap_or(self.settings.max_steps)
    }

    /// Copy of the observable state.
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            phase: self.phase,
            history: self.history.clone(),
            step_budget: self.step_budget(),
            goal: self.goal.clone(),
            result: self.result.clone(),
        }
    }

    /// Begin a fresh session. Same as [`reset`](Self::reset).
    pub fn start(&mut self) -> WizardSnapshot {
        self.reset()
    }

    /// Discard all progress and return to the fixed first step.
    #[instrument(skip(self), fields(from = %self.phase))]
    pub fn reset(&mut self) -> WizardSnapshot {
        self.phase = WizardPhase::Collecting { step: 1 };
        self.history = vec![first_step()];
        self.final_step = None;
        self.goal = None;
        self.result = None;
        debug!("Wizard reset");
        self.snapshot()
    }

    /// Select `choice_text` on the open step at 0-based `step_index`.
    ///
    /// Before the last narrowing step this renders the choice template,
    /// calls the generator once and appends the generated step. At the last
    /// step it moves to [`WizardPhase::AwaitingLocality`] without a call.
    ///
    /// # Errors
    ///
    /// - `ValidationError` for a wrong phase, step index or choice text
    /// - `TemplateError` if the choice template is missing
    /// - `ServiceError` or `ExtractionError` from the generator round trip
    ///
    /// On error the wizard is unchanged.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub async fn select_choice(
        &mut self,
        step_index: usize,
        choice_text: &str,
    ) -> ConciergeResult<WizardSnapshot> {
        let step = match self.phase {
            WizardPhase::Collecting { step } => step,
            other => return Err(invalid_transition("select a choice", other)),
        };

        let open_index = step - 1;
        if step_index != open_index {
            return Err(ValidationError::new(ValidationErrorKind::StepIndex {
                expected: open_index,
                actual: step_index,
            })
            .into());
        }
        let offered = self
            .history
            .get(open_index)
            .is_some_and(|open| open.is_open() && open.offers(choice_text));
        if !offered {
            return Err(
                ValidationError::new(ValidationErrorKind::UnknownChoice(choice_text.into())).into(),
            );
        }

        if step >= self.step_budget() {
            self.history[open_index].select(choice_text);
            self.phase = WizardPhase::AwaitingLocality;
            info!(step, "Narrowing finished, awaiting locality");
            return Ok(self.snapshot());
        }

        let (next, is_final) = self.generate_next_step(choice_text).await?;

        self.history[open_index].select(choice_text);
        self.history.push(next);
        self.phase = WizardPhase::Collecting { step: step + 1 };
        if is_final {
            self.final_step = Some(step + 1);
        }
        info!(step = step + 1, budget = self.step_budget(), "Advanced to next step");
        Ok(self.snapshot())
    }

    /// Submit the 7-digit locality code and fix the goal.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` outside `AwaitingLocality` or for a
    /// malformed code; the wizard is unchanged.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_locality(&mut self, code: &str) -> ConciergeResult<WizardSnapshot> {
        if self.phase != WizardPhase::AwaitingLocality {
            return Err(invalid_transition("submit a locality code", self.phase));
        }
        let locality = LocalityCode::parse(code)?;

        let selections = self
            .history
            .iter()
            .filter_map(|s| s.selected().clone())
            .collect();
        self.goal = Some(GoalDescriptor::new(selections, locality));
        self.phase = WizardPhase::Finalized;
        debug!("Goal finalized");
        Ok(self.snapshot())
    }

    /// Leave the locality prompt and reopen the last narrowing step.
    ///
    /// The last selection is retracted so the step can be answered again.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` outside `AwaitingLocality`.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn cancel_locality(&mut self) -> ConciergeResult<WizardSnapshot> {
        if self.phase != WizardPhase::AwaitingLocality {
            return Err(invalid_transition("cancel the locality prompt", self.phase));
        }
        if let Some(last) = self.history.last_mut() {
            last.retract();
        }
        self.phase = WizardPhase::Collecting {
            step: self.history.len(),
        };
        Ok(self.snapshot())
    }

    /// Drop the open step and reopen the previous one.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` unless collecting at step 2 or later.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn go_back(&mut self) -> ConciergeResult<WizardSnapshot> {
        let step = match self.phase {
            WizardPhase::Collecting { step } if step > 1 => step,
            other => return Err(invalid_transition("go back", other)),
        };

        self.history.truncate(step - 1);
        if let Some(previous) = self.history.last_mut() {
            previous.retract();
        }
        if self.final_step == Some(step) {
            self.final_step = None;
        }
        self.phase = WizardPhase::Collecting { step: step - 1 };
        Ok(self.snapshot())
    }

    /// Run the executor on the finalized goal.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` outside `Finalized`. An executor failure
    /// returns the wizard to `Finalized` and is propagated.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn execute(&mut self) -> ConciergeResult<WizardSnapshot> {
        let goal = match (&self.phase, &self.goal) {
            (WizardPhase::Finalized, Some(goal)) => goal.clone(),
            _ => return Err(invalid_transition("execute", self.phase)),
        };

        self.phase = WizardPhase::Executing;
        match self.executor.execute(&goal) {
            Ok(result) => {
                self.result = Some(result);
                self.phase = WizardPhase::Completed;
                info!(goal = %goal.path(), "Execution completed");
                Ok(self.snapshot())
            }
            Err(e) => {
                warn!(error = %e, "Execution failed");
                self.phase = WizardPhase::Finalized;
                Err(e)
            }
        }
    }

    /// Closed selections plus the tentative one, one `Step i: ...` per line.
    fn history_text(&self, tentative: &str) -> String {
        self.history
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let selected = step.selected().as_deref().unwrap_or(tentative);
                format!("Step {}: {}", i + 1, selected)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn generate_next_step(&self, tentative: &str) -> ConciergeResult<(Step, bool)> {
        let template = self.store.require(&self.settings.choice_template).await?;
        let prompt = render(
            template.template_text(),
            [("history", self.history_text(tentative))],
        );
        let request = completion_request(&self.generation, prompt)?;

        debug!(
            provider = self.generator.provider_name(),
            template = %template.function_id(),
            "Requesting next choices"
        );
        let response = self.generator.complete(&request).await?;

        match self.settings.response_format {
            ResponseFormat::Choices => {
                let set: ChoiceSet = extract(response.text())?;
                let step = Step::new(self.settings.follow_up_question.clone(), set.into_choices());
                Ok((step, false))
            }
            ResponseFormat::Guided => {
                let guided: GuidedStep = extract(response.text())?;
                let step = Step::new(guided.next_question, guided.choices.into_choices());
                Ok((step, guided.needs_postal_code))
            }
        }
    }
}

#[track_caller]
fn invalid_transition(operation: &str, phase: WizardPhase) -> ConciergeError {
    ValidationError::new(ValidationErrorKind::InvalidTransition {
        operation: operation.to_string(),
        phase: phase.to_string(),
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_offers_four_choices() {
        let step = first_step();
        assert!(step.is_open());
        assert_eq!(step.choices().len(), crate::CHOICES_PER_STEP);
        assert!(step.offers("地元のお店を予約・注文したい"));
    }

    #[test]
    fn test_phase_serializes_with_tag() {
        let json = serde_json::to_value(WizardPhase::Collecting { step: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "collecting", "step": 2}));
        let json = serde_json::to_value(WizardPhase::AwaitingLocality).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "awaiting_locality"}));
    }
}
