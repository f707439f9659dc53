pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::args::CliConfig;
pub use crate::config::{prompt::Prompter, storage::LocalStorage, RunConfig};

pub use crate::core::{
    engine::{ReportEngine, RunSummary},
    pipeline::ReportPipeline,
    report::format_report,
    validator::validate,
};
pub use crate::domain::model::{RejectReason, Statistics, ValidationError};
pub use crate::utils::error::{ReportError, Result};
