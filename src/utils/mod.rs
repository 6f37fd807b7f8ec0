pub mod telemetry;
pub mod time;
pub mod validation;
