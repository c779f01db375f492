/// Notification pipeline: validate, build, send, report.
pub mod errors;
pub mod request;
pub mod validate;

use log::debug;

use crate::api::{ApiClient, DEFAULT_ENDPOINT, Outcome};
use crate::cli::{Cli, output};

pub use errors::NotifyError;
pub use request::Request;
pub use validate::validate;

/// Run the full pipeline for one invocation: validate the raw options,
/// build the wire request, send it, and report the outcome.
///
/// # Errors
///
/// Returns `NotifyError::Invalid` when validation fails (before any network
/// activity) and `NotifyError::Delivery` when the POST fails or the API
/// rejects the message.
pub fn run(raw: &Cli) -> Result<(), NotifyError> {
    let validated = validate(raw).map_err(|errors| NotifyError::Invalid { errors })?;
    output::write_warnings(&validated.warnings);

    let request = Request::from_options(&validated.options);
    // Token deliberately left out of the trace.
    debug!(
        "sending: user={} priority={} sound={} retry={}",
        request.user, request.priority, request.sound, request.retry
    );

    let client = ApiClient::new(DEFAULT_ENDPOINT)?;
    match client.send(&request) {
        Outcome::Success => {
            output::write_success(validated.options.quiet);
            Ok(())
        }
        Outcome::Failure(reasons) => Err(NotifyError::Delivery { reasons }),
    }
}
