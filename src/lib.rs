pub mod config;
pub mod date_key;
pub mod report;
pub mod script;
pub mod stylesheet;
pub mod target;

pub use config::Config;
pub use report::{PatchReport, Step, StepOutcome};
pub use target::PatchError;
