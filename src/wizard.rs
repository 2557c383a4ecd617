//! The seven-step wizard state machine.
//!
//! Forward navigation validates softly: the current step's findings land in
//! a persistent error map for the UI to surface inline, and the wizard
//! advances regardless so sections can be filled in any order. Submission
//! is the hard gate: a full-scope validation must come back empty before
//! the draft is normalized and handed to the persistence boundary, exactly
//! once.

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::error::Error;
use crate::model::draft::{DraftPatch, EventDraft};
use crate::model::payload::EventPayload;
use crate::submit::{CreatedEvent, SubmitEndpoint};
use crate::validation::{validate, ErrorMap, FieldId, Scope, Step, Violation};

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    AtStep(Step),
    /// Terminal: the draft has been consumed by a successful submission.
    Submitted,
}

/// Why a submission attempt did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Full validation found problems; the error map holds the details.
    #[error("the draft is not ready to submit")]
    Invalid { first: FieldId },
    /// The persistence call failed; the draft is untouched and may be
    /// resubmitted as-is.
    #[error(transparent)]
    Failed(#[from] Error),
    /// The draft was already consumed by a successful submission.
    #[error("the event has already been submitted")]
    AlreadySubmitted,
}

/// Sequencer over the seven wizard steps, owning the draft and the
/// cumulative error map.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    draft: EventDraft,
    current: Step,
    errors: ErrorMap,
    submitted: bool,
}

impl Wizard {
    /// An empty draft at step 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing an existing draft from step 1.
    pub fn with_draft(draft: EventDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn state(&self) -> WizardState {
        if self.submitted {
            WizardState::Submitted
        } else {
            WizardState::AtStep(self.current)
        }
    }

    /// The cumulative error map, as last merged by navigation or submission.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The field the UI should scroll to, if anything is currently flagged.
    pub fn first_error(&self) -> Option<FieldId> {
        self.errors.first()
    }

    /// Route an edit through the draft merge.
    pub fn apply(&mut self, patch: DraftPatch) {
        if self.submitted {
            warn!("patch ignored: the event has already been submitted");
            return;
        }
        self.draft = self.draft.apply(patch);
    }

    /// Validate the current step and move forward.
    ///
    /// The step's previous findings are replaced by the fresh ones; other
    /// steps' entries stay until those steps are re-validated. Errors never
    /// block the advance. Returns the first offending field of the step
    /// just checked, as the scroll target.
    pub fn next(&mut self) -> Option<FieldId> {
        if self.submitted {
            warn!("navigation ignored: the event has already been submitted");
            return None;
        }
        let step = self.current;
        let found = validate(&self.draft, Scope::Step(step));
        let target = found.first();
        debug!(
            "step {} validated with {} finding(s)",
            step.number(),
            found.len()
        );
        self.errors.clear_step(step);
        self.errors.extend(found);
        if let Some(next) = step.next() {
            self.current = next;
            debug!("advanced to step {}", next.number());
        }
        target
    }

    /// Move back one step. Never validates.
    pub fn previous(&mut self) {
        if self.submitted {
            warn!("navigation ignored: the event has already been submitted");
            return;
        }
        if let Some(previous) = self.current.previous() {
            self.current = previous;
            debug!("returned to step {}", previous.number());
        }
    }

    /// Full-scope validation, then one submission attempt.
    ///
    /// On validation failure the error map is replaced wholesale with the
    /// full result and the first entry is the focus target. On an external
    /// failure a single top-level entry is recorded and the draft and step
    /// stay untouched for a manual retry.
    pub async fn submit<E: SubmitEndpoint>(
        &mut self,
        endpoint: &E,
    ) -> Result<CreatedEvent, SubmitError> {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }

        let found = validate(&self.draft, Scope::Full);
        if !found.is_empty() {
            warn!("submission blocked: {} validation error(s)", found.len());
            self.errors = found;
            let first = self
                .errors
                .first()
                .expect("a non-empty map has a first entry");
            return Err(SubmitError::Invalid { first });
        }
        // Clean slate, including any stale failure from a previous attempt.
        self.errors = found;

        let payload = match EventPayload::from_draft(&self.draft) {
            Ok(payload) => payload,
            Err(incomplete) => {
                error!("draft failed to normalize after a clean validation: {incomplete}");
                self.errors.insert(
                    FieldId::Submit,
                    Violation::submission("Could not create the event. Please try again."),
                );
                return Err(SubmitError::Failed(incomplete.into()));
            }
        };

        match endpoint.create_event(&payload).await {
            Ok(created) => {
                info!("event {} created", created.id);
                self.submitted = true;
                Ok(created)
            }
            Err(err) => {
                error!("submission failed: {err}");
                self.errors.insert(
                    FieldId::Submit,
                    Violation::submission("Could not create the event. Please try again."),
                );
                Err(SubmitError::Failed(err))
            }
        }
    }
}
