//! Component state behind each view
//!
//! Each component keeps only its local UI state. Remote calls go through the
//! [`crate::ports::TaskTimeApi`] port and results are merged into the
//! [`crate::board::TaskBoard`] by the caller or the card itself.

pub mod account;
pub mod filters;
pub mod summary_panel;
pub mod task_card;
pub mod task_form;

pub use account::{LoginForm, RegisterForm};
pub use filters::{TaskFilter, TimeFilter};
pub use summary_panel::{SummaryPanel, SummaryRow, SummaryState, SummaryView};
pub use task_card::TaskCard;
pub use task_form::TaskForm;

use tasktime_common::validation::ValidationError;
use tasktime_domain::TaskTimeError;
use thiserror::Error;

/// Why a form submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Rejected before any request, per field
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] TaskTimeError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::Api(err) => err.user_message(),
        }
    }
}

impl From<SubmitError> for TaskTimeError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Invalid(invalid) => TaskTimeError::Validation(invalid.to_string()),
            SubmitError::Api(inner) => inner,
        }
    }
}
