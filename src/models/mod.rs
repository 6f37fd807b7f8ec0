pub mod reference;
pub mod requisition;
pub mod step;
pub mod validation;
