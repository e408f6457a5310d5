pub mod content;
pub mod error;
pub mod preferences;
pub mod telemetry;
