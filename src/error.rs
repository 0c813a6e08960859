use thiserror::Error;

/// Failures that stop the hook before a policy decision can be made.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to read stdin: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HookError>;
