/// Blocking HTTP client for the message endpoint.
use log::debug;

use super::response::ApiResponse;
use crate::notify::Request;

/// The fixed Pushover message endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

/// Classified result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The API accepted the notification.
    Success,
    /// Delivery failed; transport reason first, then API-reported errors.
    Failure(Vec<String>),
}

/// One-shot client for the message endpoint.
///
/// No timeout is imposed beyond the transport's defaults; the process makes
/// exactly one call and exits.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl ApiClient {
    /// Build a client for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the TLS backend cannot be
    /// initialized.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// POST the request form-encoded and classify the outcome.
    ///
    /// Failure reasons accumulate from two independent sources: a
    /// transport-level problem (connection failure or non-2xx status) and
    /// the `errors` array of a parseable response body. The API can return
    /// 200 with an internal error list, a non-2xx with no parseable body,
    /// or both at once; every reason found is surfaced together.
    #[must_use]
    pub fn send(&self, request: &Request) -> Outcome {
        let mut reasons = Vec::new();

        debug!("POST {}", self.endpoint);
        match self.http.post(self.endpoint.as_str()).form(request).send() {
            Ok(response) => {
                let status = response.status();
                debug!("response status: {status}");
                if !status.is_success() {
                    reasons.push(format!("HTTP {status}"));
                }
                // An unparseable body is not itself an error; the status
                // check above is authoritative for transport problems.
                let parsed = response
                    .text()
                    .ok()
                    .and_then(|body| serde_json::from_str::<ApiResponse>(&body).ok());
                if let Some(parsed) = parsed {
                    debug!(
                        "api status: {:?}, request id: {:?}",
                        parsed.status, parsed.request
                    );
                    reasons.extend(parsed.errors.unwrap_or_default());
                }
            }
            Err(err) => reasons.push(format!("request failed: {err}")),
        }

        if reasons.is_empty() {
            Outcome::Success
        } else {
            Outcome::Failure(reasons)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    use super::*;

    /// Read one full HTTP request: headers, then content-length body bytes.
    fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).expect("read request");
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    return;
                }
            }
        }
    }

    /// Spawn a one-shot HTTP server returning the canned status and body.
    fn stub_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
        });
        format!("http://{addr}")
    }

    fn request() -> Request {
        Request {
            token: "tk".to_owned(),
            user: "uk".to_owned(),
            message: "hello".to_owned(),
            priority: 0,
            sound: "pushover".to_owned(),
            retry: 0,
            expire: None,
            ttl: None,
            title: None,
            device: None,
            url: None,
            url_title: None,
        }
    }

    #[test]
    fn ok_with_empty_body_is_success() {
        let url = stub_server("200 OK", "{}");
        let client = ApiClient::new(url).unwrap();
        assert_eq!(client.send(&request()), Outcome::Success);
    }

    #[test]
    fn server_error_with_unparseable_body_reports_the_status_alone() {
        let url = stub_server("500 Internal Server Error", "not json");
        let client = ApiClient::new(url).unwrap();

        let Outcome::Failure(reasons) = client.send(&request()) else {
            panic!("expected failure");
        };
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("500"), "unexpected reason: {}", reasons[0]);
    }

    #[test]
    fn api_errors_surface_even_on_http_ok() {
        let url = stub_server("200 OK", r#"{"status":0,"errors":["invalid token"]}"#);
        let client = ApiClient::new(url).unwrap();

        assert_eq!(
            client.send(&request()),
            Outcome::Failure(vec!["invalid token".to_owned()])
        );
    }

    #[test]
    fn transport_and_api_errors_combine_transport_first() {
        let url = stub_server(
            "400 Bad Request",
            r#"{"status":0,"errors":["user identifier is invalid"]}"#,
        );
        let client = ApiClient::new(url).unwrap();

        let Outcome::Failure(reasons) = client.send(&request()) else {
            panic!("expected failure");
        };
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("400"), "unexpected reason: {}", reasons[0]);
        assert_eq!(reasons[1], "user identifier is invalid");
    }

    #[test]
    fn connection_failure_is_a_single_failure_reason() {
        // Bind then drop to get a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}")).unwrap();
        let Outcome::Failure(reasons) = client.send(&request()) else {
            panic!("expected failure");
        };
        assert_eq!(reasons.len(), 1);
    }
}
