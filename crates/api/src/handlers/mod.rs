//! HTTP request handlers, one module per resource.

pub mod book;
pub mod media;
pub mod project;
pub mod project_details;
pub mod project_progress;

use atelier_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Short-circuit mutating handlers when the mutation gate is closed.
///
/// The flag is injected via config at startup; no handler reads the process
/// environment. Returning before any repository call guarantees a blocked
/// request leaves row counts unchanged.
pub(crate) fn ensure_mutations_allowed(state: &AppState) -> Result<(), AppError> {
    if state.config.allow_mutations {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Not available in production".to_string(),
        )))
    }
}
