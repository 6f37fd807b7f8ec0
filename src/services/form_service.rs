use std::collections::BTreeSet;

use serde::Serialize;
use uuid::Uuid;

use crate::dto::requisition_dto::FormView;
use crate::error::{Error, Result};
use crate::models::requisition::{
    RequisitionDraft, RequisitionStatus, SavedDraft, SubmittedRequisition,
};
use crate::models::step::{StepDefinition, StepId};
use crate::services::step_service::{active_step_ids, get_active_steps};
use crate::services::validation_service::{check_step, validate_step, validate_submission};
use crate::utils::time;

/// Validates the whole draft and turns it into an accepted requisition.
pub fn submit(draft: &RequisitionDraft) -> Result<SubmittedRequisition> {
    validate_submission(draft)?;
    Ok(SubmittedRequisition {
        id: Uuid::new_v4(),
        status: RequisitionStatus::Pending,
        draft: draft.clone(),
        submitted_at: time::now(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormState {
    Editing { step: StepId },
    Submitted { id: Uuid },
}

/// One user's pass through the intake form.
#[derive(Debug, Clone)]
pub struct FormSession {
    draft: RequisitionDraft,
    template: RequisitionDraft,
    state: FormState,
    completed: BTreeSet<StepId>,
    saved: Option<SavedDraft>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(RequisitionDraft::default())
    }
}

impl FormSession {
    /// `template` is the draft restored on every reset.
    pub fn new(template: RequisitionDraft) -> Self {
        Self {
            draft: template.clone(),
            template,
            state: FormState::Editing {
                step: StepId::BasicDetails,
            },
            completed: BTreeSet::new(),
            saved: None,
        }
    }

    pub fn draft(&self) -> &RequisitionDraft {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, FormState::Submitted { .. })
    }

    pub fn steps(&self) -> Vec<StepDefinition> {
        get_active_steps(&self.draft)
    }

    pub fn current_step(&self) -> Option<StepId> {
        match self.state {
            FormState::Editing { step } => Some(step),
            FormState::Submitted { .. } => None,
        }
    }

    pub fn is_completed(&self, step: StepId) -> bool {
        self.completed.contains(&step)
    }

    pub fn completed_steps(&self) -> impl Iterator<Item = StepId> + '_ {
        self.completed.iter().copied()
    }

    /// `(completed, total)` over the active sequence.
    pub fn progress(&self) -> (usize, usize) {
        (self.completed.len(), active_step_ids(&self.draft).len())
    }

    /// Snapshot for rendering; `errors` are the live inline errors of the current step.
    pub fn view(&self) -> FormView {
        let errors = self
            .current_step()
            .map(|step| check_step(step, &self.draft).errors)
            .unwrap_or_default();
        FormView {
            state: self.state,
            steps: self.steps(),
            completed: self.completed_steps().collect(),
            errors,
        }
    }

    pub fn last_saved(&self) -> Option<&SavedDraft> {
        self.saved.as_ref()
    }

    fn editing_step(&self) -> Result<StepId> {
        self.current_step().ok_or_else(|| {
            Error::InvalidTransition("requisition has already been submitted".to_string())
        })
    }

    pub fn update<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut RequisitionDraft),
    {
        let step = self.editing_step()?;
        let before = self.draft.work_arrangement;
        mutate(&mut self.draft);
        if self.draft.work_arrangement != before {
            self.resequence(step);
        }
        Ok(())
    }

    fn resequence(&mut self, step: StepId) {
        let ids = active_step_ids(&self.draft);
        self.completed.retain(|s| ids.contains(s));
        if !ids.contains(&step) {
            let fallback = ids.last().copied().unwrap_or(StepId::BasicDetails);
            self.state = FormState::Editing { step: fallback };
        }
        tracing::debug!(
            steps = ids.len(),
            arrangement = ?self.draft.work_arrangement,
            "step sequence recomputed"
        );
    }

    fn neighbour(&self, step: StepId, forward: bool) -> StepId {
        let ids = active_step_ids(&self.draft);
        let idx = ids.iter().position(|s| *s == step).unwrap_or(0);
        let target = if forward {
            (idx + 1).min(ids.len() - 1)
        } else {
            idx.saturating_sub(1)
        };
        ids[target]
    }

    pub fn next(&mut self) -> Result<StepId> {
        let step = self.editing_step()?;
        if let Err(e) = validate_step(step, &self.draft) {
            tracing::info!(step = ?step, "cannot advance, step has validation errors");
            return Err(e);
        }
        self.completed.insert(step);
        let target = self.neighbour(step, true);
        self.state = FormState::Editing { step: target };
        tracing::debug!(from = ?step, to = ?target, "advanced step");
        Ok(target)
    }

    pub fn previous(&mut self) -> Result<StepId> {
        let step = self.editing_step()?;
        let target = self.neighbour(step, false);
        self.state = FormState::Editing { step: target };
        Ok(target)
    }

    /// Jumps to an active step at or before the furthest reachable one.
    pub fn go_to(&mut self, target: StepId) -> Result<StepId> {
        let step = self.editing_step()?;
        let ids = active_step_ids(&self.draft);
        let Some(target_idx) = ids.iter().position(|s| *s == target) else {
            return Err(Error::InactiveStep(target));
        };
        let current_idx = ids.iter().position(|s| *s == step).unwrap_or(0);
        let reachable = target_idx <= current_idx
            || ids[..target_idx].iter().all(|s| self.completed.contains(s));
        if !reachable {
            return Err(Error::InvalidTransition(format!(
                "cannot skip ahead to {}",
                target
            )));
        }
        self.state = FormState::Editing { step: target };
        Ok(target)
    }

    /// Snapshots the draft without validating it, then moves forward.
    pub fn save_and_continue(&mut self) -> Result<StepId> {
        let step = self.editing_step()?;
        self.saved = Some(SavedDraft {
            draft: self.draft.clone(),
            step,
            saved_at: time::now(),
        });
        let target = self.neighbour(step, true);
        self.state = FormState::Editing { step: target };
        tracing::info!(step = ?step, "draft saved");
        Ok(target)
    }

    pub fn submit(&mut self) -> Result<SubmittedRequisition> {
        let step = self.editing_step()?;
        let ids = active_step_ids(&self.draft);
        if ids.last() != Some(&step) {
            return Err(Error::InvalidTransition(format!(
                "submission is only allowed from the final step, currently on {}",
                step
            )));
        }
        let record = match submit(&self.draft) {
            Ok(record) => record,
            Err(e) => {
                tracing::info!(error = %e, "requisition submission rejected");
                return Err(e);
            }
        };
        self.completed.insert(step);
        self.state = FormState::Submitted { id: record.id };
        tracing::info!(id = %record.id, title = %record.draft.job_title, "requisition submitted");
        Ok(record)
    }

    pub fn reset(&mut self) {
        self.draft = self.template.clone();
        self.state = FormState::Editing {
            step: StepId::BasicDetails,
        };
        self.completed.clear();
        self.saved = None;
    }
}
