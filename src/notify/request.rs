/// Wire request construction: normalized options to POST field set.
use serde::Serialize;

use super::validate::NormalizedOptions;

/// The form-encoded field set POSTed to the message endpoint.
///
/// `retry` is always transmitted and defaults to 0 when no interval was
/// requested below emergency priority; the remaining optional fields are
/// omitted from the form entirely when unset. This asymmetry matches the
/// documented wire contract.
#[derive(Debug, Serialize)]
pub struct Request {
    pub token: String,
    pub user: String,
    pub message: String,
    pub priority: i8,
    pub sound: String,
    pub retry: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
}

impl Request {
    /// Project normalized options onto the wire field set. No validation
    /// happens here.
    #[must_use]
    pub fn from_options(options: &NormalizedOptions) -> Self {
        Self {
            token: options.token.clone(),
            user: options.user.clone(),
            message: options.message.clone(),
            priority: options.priority,
            sound: options.sound.clone(),
            retry: options.retry.unwrap_or(0),
            expire: options.expire,
            ttl: options.ttl,
            title: options.title.clone(),
            device: options.device.clone(),
            url: options.url.clone(),
            url_title: options.url_title.clone(),
        }
    }
}
