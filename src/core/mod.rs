pub mod aggregate;
pub mod engine;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod validator;

pub use crate::domain::model::{Record, RejectReason, Statistics, ValidationError};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RenderedReport, Storage};
pub use crate::utils::error::Result;
