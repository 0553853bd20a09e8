use url::Url;

use crate::error::RefwatchError;

/// Where the change feed is served when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:12345/events";

/// Build a `ws://` URL from its parts. IPv6 literals are bracketed.
pub fn compose_endpoint(host: &str, port: u16, path: &str) -> String {
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_string()
    };
    if path.starts_with('/') {
        format!("ws://{host}:{port}{path}")
    } else {
        format!("ws://{host}:{port}/{path}")
    }
}

/// Parse and validate an endpoint URL. Only `ws` and `wss` are accepted.
pub fn parse_endpoint(raw: &str) -> Result<Url, RefwatchError> {
    let url = Url::parse(raw).map_err(|e| RefwatchError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "ws" | "wss" => {}
        other => {
            return Err(RefwatchError::InvalidEndpoint {
                url: raw.to_string(),
                reason: format!("scheme must be ws or wss, got {other}"),
            });
        }
    }

    if url.host_str().is_none() {
        return Err(RefwatchError::InvalidEndpoint {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod endpoint_tests;
