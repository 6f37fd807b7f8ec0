pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::services::form_service::submit;
pub use crate::services::step_service::get_active_steps;
pub use crate::services::validation_service::validate_step;

use crate::config::Config;
use crate::error::Result;
use crate::models::requisition::RequisitionDraft;
use crate::services::{
    form_service::FormSession,
    reference_service::ReferenceService,
    requisition_service::{MockRequisitionSource, RequisitionService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub source: Arc<MockRequisitionSource>,
    pub requisition_service: RequisitionService,
    pub reference_service: ReferenceService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let source = Arc::new(MockRequisitionSource::new(config.mock_fetch_delay())?);
        let requisition_service = RequisitionService::new(source.clone());
        let reference_service = ReferenceService::default();

        Ok(Self {
            config,
            source,
            requisition_service,
            reference_service,
        })
    }

    /// Fresh form session, prefilled with the configured requester if any.
    pub fn new_session(&self) -> FormSession {
        let template = match &self.config.default_requested_by {
            Some(name) => RequisitionDraft::with_requester(name.clone()),
            None => RequisitionDraft::default(),
        };
        FormSession::new(template)
    }
}
