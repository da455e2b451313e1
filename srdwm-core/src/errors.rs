use crate::models::{MonitorId, WindowHandle, WorkspaceId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SrdError>;

#[derive(Debug, Error)]
pub enum SrdError {
    #[error("Window not found: {0}")]
    WindowNotFound(WindowHandle),
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),
    #[error("Monitor not found: {0}")]
    MonitorNotFound(MonitorId),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Event handler failed: {0}")]
    HandlerFailed(String),
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
}
