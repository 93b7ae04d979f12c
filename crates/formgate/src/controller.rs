// File: src/controller.rs
// Purpose: Intercept submit activations, validate, and forward or block

use std::sync::{Arc, Mutex, RwLock};

use crate::dom::{Document, FormEvent};
use crate::form::FormState;
use crate::result::ValidationResult;
use crate::sink::SubmissionSink;
use crate::validator::Validator;

/// Notice shown when the sink rejects a submission
pub const SUBMIT_FAILED_NOTICE: &str = "Submission failed. Please try again.";

/// Phase of the submission state machine
///
/// `Idle → Validating → { ShowingErrors → Idle | Submitting → Idle }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Submitting,
    ShowingErrors,
}

/// What a single submit activation resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All rules passed and the sink accepted the values
    Submitted,
    /// At least one rule failed; errors were rendered
    Rejected(ValidationResult),
    /// All rules passed but the sink returned an error
    Failed,
    /// A prior submission was still in flight
    Ignored,
}

/// Drives the submit control: validates on activation and forwards valid
/// submissions to the sink exactly once
///
/// Owns the form state and the validator; the page and the transport are
/// injected capabilities. Activations while a prior submission is in flight
/// are ignored, so the sink sees at most one in-flight submission.
pub struct SubmissionController<D: Document, S: SubmissionSink> {
    validator: Validator,
    dom: D,
    sink: S,
    state: RwLock<FormState>,
    phase: Mutex<SubmitPhase>,
}

impl<D, S> SubmissionController<D, S>
where
    D: Document + 'static,
    S: SubmissionSink + 'static,
{
    pub fn new(validator: Validator, dom: D, sink: S) -> Self {
        Self {
            validator,
            dom,
            sink,
            state: RwLock::new(FormState::new()),
            phase: Mutex::new(SubmitPhase::Idle),
        }
    }

    /// Current phase of the submission state machine
    pub fn phase(&self) -> SubmitPhase {
        *self.phase.lock().unwrap()
    }

    /// Read a snapshot of the current form state
    pub fn form_state(&self) -> FormState {
        self.state.read().unwrap().clone()
    }

    /// Consume the page's event stream until it closes
    ///
    /// Events are processed strictly in arrival order. Submit activations are
    /// spawned so the loop keeps draining input while a submission is in
    /// flight; the phase check in `handle_submit` is what ignores re-entrant
    /// activations. Returns when the stream closes (page unload), abandoning
    /// any in-flight submission to the runtime.
    pub async fn run(self: Arc<Self>) {
        let Some(mut events) = self.dom.events() else {
            tracing::warn!("submit control already subscribed, ignoring");
            return;
        };

        while let Some(event) = events.recv().await {
            match event {
                FormEvent::Input { field, value } => self.handle_input(&field, value),
                FormEvent::Submit => {
                    let controller = Arc::clone(&self);
                    tokio::spawn(async move {
                        controller.handle_submit().await;
                    });
                }
            }
        }

        tracing::debug!("event stream closed, controller stopping");
    }

    /// Record an input event into the form state
    pub fn handle_input(&self, field_id: &str, value: String) {
        tracing::trace!(field = field_id, "input changed");
        self.state.write().unwrap().set_value(field_id, value);
    }

    /// One submit activation through the state machine
    ///
    /// The native action is cancelled unconditionally, even for activations
    /// that end up ignored.
    pub async fn handle_submit(&self) -> SubmitOutcome {
        self.dom.prevent_default();

        if !self.try_begin() {
            tracing::debug!("submit ignored, prior submission in flight");
            return SubmitOutcome::Ignored;
        }

        // Recomputed in full on every attempt; nothing is carried over from
        // the previous evaluation.
        let result = {
            let state = self.state.read().unwrap();
            self.validator.evaluate(&state)
        };

        if !result.is_valid() {
            self.transition(SubmitPhase::ShowingErrors);
            self.dom.clear_errors();
            for field_id in self.validator.registry().field_ids() {
                let failures = result.failures_for(field_id);
                if !failures.is_empty() {
                    self.dom.render_errors(field_id, failures);
                }
            }
            tracing::info!(
                failing_fields = result.failing_field_count(),
                "submission blocked by validation"
            );
            self.transition(SubmitPhase::Idle);
            return SubmitOutcome::Rejected(result);
        }

        self.transition(SubmitPhase::Submitting);
        self.dom.clear_errors();

        let values = self.state.read().unwrap().values().clone();
        let outcome = match self.sink.submit(&values).await {
            Ok(()) => {
                tracing::info!(sink = self.sink.name(), "form submitted");
                SubmitOutcome::Submitted
            }
            Err(error) => {
                tracing::error!(sink = self.sink.name(), %error, "submission failed");
                self.dom.show_notice(SUBMIT_FAILED_NOTICE);
                SubmitOutcome::Failed
            }
        };

        self.transition(SubmitPhase::Idle);
        outcome
    }

    /// Enter `Validating` if no attempt is in flight
    fn try_begin(&self) -> bool {
        let mut phase = self.phase.lock().unwrap();
        if *phase != SubmitPhase::Idle {
            return false;
        }
        *phase = SubmitPhase::Validating;
        true
    }

    fn transition(&self, to: SubmitPhase) {
        let mut phase = self.phase.lock().unwrap();
        tracing::debug!(from = ?*phase, to = ?to, "phase transition");
        *phase = to;
    }
}
