//! Error type for wizard operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// `submit` called before the final step. The renderer is expected to
    /// only offer the submit action on the last step; reaching this error
    /// means a caller broke that contract.
    #[error("cannot submit from step {current}: submission is only available on the final step")]
    NotAtFinalStep { current: u8 },
}
