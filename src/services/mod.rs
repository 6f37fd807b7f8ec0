pub mod form_service;
pub mod reference_service;
pub mod requisition_service;
pub mod step_service;
pub mod validation_service;
