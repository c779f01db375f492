/// Errors from the notification pipeline.
use thiserror::Error;

/// Terminal failures surfaced to `main`.
///
/// Every variant ends the process; nothing is retried.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// One or more option constraints were violated. Collected as a unit:
    /// the list holds every problem found, not just the first.
    #[error("invalid parameters: {}", errors.join("; "))]
    Invalid {
        /// All validation problems, in check order.
        errors: Vec<String>,
    },

    /// The API rejected the notification or the POST itself failed.
    #[error("delivery failed: {}", reasons.join("; "))]
    Delivery {
        /// Transport reason first, then any API-reported errors.
        reasons: Vec<String>,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Exit code mapping for `NotifyError` variants.
impl NotifyError {
    /// Return the CLI exit code for this error.
    ///
    /// Validation failures exit 2, matching clap's own exit code for
    /// argument errors; everything else exits 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid { .. } => 2,
            Self::Delivery { .. } | Self::Http(_) => 1,
        }
    }
}
