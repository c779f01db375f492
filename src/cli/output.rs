/// User-facing result reporting: confirmation, warnings, failure lists.
use crate::notify::NotifyError;

/// Print the success confirmation, unless `--quiet` was given.
pub fn write_success(quiet: bool) {
    if !quiet {
        println!("Notification sent.");
    }
}

/// Print non-fatal warnings to stderr.
///
/// Warnings never block the send; they flag options the remote API will
/// ignore.
pub fn write_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

/// Write a terminal error to stderr in its user-facing shape.
///
/// Validation errors are listed one per line with a pointer to `--help`;
/// delivery failures print a header followed by every collected reason.
pub fn write_error(err: &NotifyError) {
    match err {
        NotifyError::Invalid { errors } => {
            for error in errors {
                eprintln!("{error}");
            }
            eprintln!("Run with --help for usage.");
        }
        NotifyError::Delivery { reasons } => {
            eprintln!("Failed to send notification:");
            for reason in reasons {
                eprintln!("  - {reason}");
            }
        }
        NotifyError::Http(_) => eprintln!("{err}"),
    }
}
