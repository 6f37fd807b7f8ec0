use crate::models::requisition::RequisitionDraft;
use crate::models::step::{StepDefinition, StepId};

/// Step ids in display order for the current selections.
pub fn active_step_ids(draft: &RequisitionDraft) -> Vec<StepId> {
    let mut ids = StepId::BASE_SEQUENCE.to_vec();
    if draft.is_onsite() {
        ids.push(StepId::OnsiteSpecific);
    }
    ids
}

pub fn get_active_steps(draft: &RequisitionDraft) -> Vec<StepDefinition> {
    active_step_ids(draft)
        .into_iter()
        .enumerate()
        .map(|(idx, id)| StepDefinition::new(id, idx + 1))
        .collect()
}

pub fn is_active(step: StepId, draft: &RequisitionDraft) -> bool {
    active_step_ids(draft).contains(&step)
}
