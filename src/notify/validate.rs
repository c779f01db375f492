/// Option validation and normalization.
///
/// The checks run as an ordered sequence with no short-circuiting, so a
/// single pass reports every problem at once. Bounds are checked before the
/// emergency-priority defaulting, and defaulting fires only on absence, so
/// an explicit out-of-bounds value is reported rather than silently
/// replaced.
use crate::cli::Cli;

/// Minimum legal re-delivery interval, in seconds.
pub const RETRY_MIN: u32 = 30;
/// Maximum legal re-delivery window, in seconds.
pub const EXPIRE_MAX: u32 = 10_800;
/// Emergency priority: the API re-delivers until acknowledged.
pub const PRIORITY_EMERGENCY: i8 = 2;

const PRIORITY_MIN: i8 = -2;
const PRIORITY_MAX: i8 = 2;
const DEFAULT_SOUND: &str = "pushover";

/// Validated and defaulted options, ready for the request builder.
#[derive(Debug, Clone)]
pub struct NormalizedOptions {
    pub user: String,
    pub token: String,
    pub message: String,
    pub sound: String,
    pub priority: i8,
    /// Present when supplied, or forced to `RETRY_MIN` under emergency
    /// priority.
    pub retry: Option<u32>,
    /// Present when supplied, or forced to `EXPIRE_MAX` under emergency
    /// priority.
    pub expire: Option<u32>,
    /// Kept even under emergency priority, where the API ignores it.
    pub ttl: Option<u32>,
    pub title: Option<String>,
    pub device: Option<String>,
    pub url: Option<String>,
    pub url_title: Option<String>,
    pub quiet: bool,
}

/// Successful validation: normalized options plus non-fatal warnings.
#[derive(Debug)]
pub struct Validated {
    pub options: NormalizedOptions,
    /// Ordered warnings to show the user; these never block the send.
    pub warnings: Vec<String>,
}

/// Validate raw CLI options into a normalized set.
///
/// # Errors
///
/// Returns the full list of constraint violations when any check fails.
/// Validation fails as a unit: no partial option set is produced.
pub fn validate(raw: &Cli) -> Result<Validated, Vec<String>> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (flag, value) in [
        ("--user", &raw.user),
        ("--token", &raw.token),
        ("--msg", &raw.msg),
    ] {
        if value.as_deref().is_none_or(str::is_empty) {
            errors.push(format!("Missing required parameter {flag}"));
        }
    }

    let priority = raw.priority.unwrap_or(0);
    if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
        errors.push(format!(
            "Priority must be between {PRIORITY_MIN} and {PRIORITY_MAX}"
        ));
    }

    if raw.retry.is_some_and(|retry| retry < RETRY_MIN) {
        errors.push(format!("Retry must be at least {RETRY_MIN} seconds"));
    }

    if raw.expire.is_some_and(|expire| expire > EXPIRE_MAX) {
        errors.push(format!("Expire must be at most {EXPIRE_MAX} seconds"));
    }

    // Emergency priority requires acknowledgment-retry parameters. Only
    // absent values are forced to the legal bounds; explicit values were
    // already bounds-checked above.
    let mut retry = raw.retry;
    let mut expire = raw.expire;
    if priority == PRIORITY_EMERGENCY {
        if expire.is_none() {
            expire = Some(EXPIRE_MAX);
        }
        if retry.is_none() {
            retry = Some(RETRY_MIN);
        }
        if raw.ttl.is_some() {
            warnings.push("TTL is ignored for emergency-priority notifications".to_owned());
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Validated {
        options: NormalizedOptions {
            user: raw.user.clone().unwrap_or_default(),
            token: raw.token.clone().unwrap_or_default(),
            message: raw.msg.clone().unwrap_or_default(),
            sound: raw
                .sound
                .clone()
                .unwrap_or_else(|| DEFAULT_SOUND.to_owned()),
            priority,
            retry,
            expire,
            ttl: raw.ttl,
            title: raw.title.clone(),
            device: raw.device.clone(),
            url: raw.url.clone(),
            url_title: raw.url_title.clone(),
            quiet: raw.quiet,
        },
        warnings,
    })
}
