/// CLI argument definitions via clap derive.
use clap::Parser;

/// The raw, unvalidated flag set.
///
/// Every value flag is optional at the parser level; presence and
/// cross-field constraints are enforced by the validator so that all
/// problems are reported together instead of one at a time.
#[derive(Debug, Parser)]
#[command(
    name = "pushover",
    about = "Send a push notification through the Pushover API",
    version
)]
pub struct Cli {
    /// Recipient user or group key.
    #[arg(long, value_name = "KEY", env = "PUSHOVER_USER")]
    pub user: Option<String>,

    /// Application API token.
    #[arg(long, value_name = "TOKEN", env = "PUSHOVER_TOKEN")]
    pub token: Option<String>,

    /// Message body to send.
    #[arg(long, value_name = "TEXT")]
    pub msg: Option<String>,

    /// Notification sound from the Pushover sound catalog.
    #[arg(long, value_name = "NAME")]
    pub sound: Option<String>,

    /// Priority from -2 (lowest) to 2 (emergency).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub priority: Option<i8>,

    /// Re-delivery interval in seconds until an emergency notification
    /// is acknowledged (minimum 30).
    #[arg(long, value_name = "SECONDS")]
    pub retry: Option<u32>,

    /// Seconds after which emergency re-delivery gives up (maximum 10800).
    #[arg(long, value_name = "SECONDS")]
    pub expire: Option<u32>,

    /// Time-to-live in seconds for a non-emergency notification.
    #[arg(long, value_name = "SECONDS")]
    pub ttl: Option<u32>,

    /// Message title shown above the body.
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Deliver to a single named device instead of all devices.
    #[arg(long, value_name = "NAME")]
    pub device: Option<String>,

    /// Supplementary URL shown with the message.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Display title for --url.
    #[arg(long, value_name = "TEXT")]
    pub url_title: Option<String>,

    /// Suppress the confirmation line on success.
    #[arg(long)]
    pub quiet: bool,
}
