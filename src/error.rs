//! Failure taxonomy and exit-code mapping.

use thiserror::Error;

/// `E_FAIL`, used when a step fails without a usable status code.
pub const E_FAIL: i32 = 0x8000_4005_u32 as i32;

/// Exit code for "no target executable supplied".
pub const EXIT_NO_TARGET: i32 = 1;

/// A platform status code plus whatever description came with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HRESULT 0x{code:08X}")]
pub struct Failure {
    pub code: i32,
    pub description: Option<String>,
}

impl Failure {
    /// Codes that read as success are recorded as `E_FAIL` so a failure
    /// can never map to exit code 0.
    pub fn new(code: i32, description: Option<String>) -> Self {
        let code = if code >= 0 { E_FAIL } else { code };
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self { code, description }
    }

    pub fn from_code(code: i32) -> Self {
        Self::new(code, None)
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for Failure {
    fn from(err: windows::core::Error) -> Self {
        Self::new(err.code().0, Some(err.message()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("COM initialization failed: {0}")]
    ComInit(Failure),
    #[error("shell automation service unavailable: {0}")]
    ServiceUnavailable(Failure),
    #[error("desktop shell window not found: {0}")]
    NotFound(Failure),
    #[error("{step} not supported: {failure}")]
    InterfaceUnsupported {
        step: &'static str,
        failure: Failure,
    },
    #[error("shell execute failed: {0}")]
    ExecutionFailed(Failure),
    #[error("no target executable supplied")]
    NoTarget,
}

impl LaunchError {
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::ComInit(f)
            | Self::ServiceUnavailable(f)
            | Self::NotFound(f)
            | Self::ExecutionFailed(f) => Some(f),
            Self::InterfaceUnsupported { failure, .. } => Some(failure),
            Self::NoTarget => None,
        }
    }

    /// Process exit code: 1 for a missing target, otherwise `|hr|`.
    ///
    /// `|hr|` can itself be 1; the two are not distinguished.
    pub fn exit_code(&self) -> i32 {
        match self.failure() {
            Some(f) => f.code.wrapping_abs(),
            None => EXIT_NO_TARGET,
        }
    }
}
