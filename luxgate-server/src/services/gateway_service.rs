use std::fmt;
use std::time::Duration;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, header};
use axum::response::Response;

use crate::configs::Gateway;
use crate::errors::{ApiError, GatewayError};

/// Internal service reachable behind the public gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Control,
    Logging,
}

impl Upstream {
    pub const ALL: [Upstream; 2] = [Upstream::Control, Upstream::Logging];

    pub const fn prefix(&self) -> &'static str {
        match self {
            Upstream::Control => "/controle",
            Upstream::Logging => "/logging",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Upstream::Control => "control",
            Upstream::Logging => "logging",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub upstream: Upstream,
    /// Path on the upstream with the public prefix stripped.
    pub path: String,
}

/// Maps a public path onto an upstream, stripping the matched prefix.
///
/// Prefixes only match whole segments: `/controle/config` and `/controle`
/// route to the control service while `/controlex` does not.
pub fn route(path: &str) -> Result<Route, GatewayError> {
    for upstream in Upstream::ALL {
        let Some(rest) = path.strip_prefix(upstream.prefix()) else {
            continue;
        };

        if rest.is_empty() {
            return Ok(Route {
                upstream,
                path: "/".to_string(),
            });
        }

        if rest.starts_with('/') {
            return Ok(Route {
                upstream,
                path: rest.to_string(),
            });
        }
    }

    Err(GatewayError::RouteNotFound(path.to_string()))
}

/// Largest request body the gateway buffers before forwarding.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// Connection scoped headers are never relayed in either direction.
const HOP_BY_HOP: [HeaderName; 5] = [
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::TE,
    header::TRAILER,
    header::UPGRADE,
];

fn forwardable_request_headers(mut headers: HeaderMap) -> HeaderMap {
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);
    headers.remove("keep-alive");

    headers
}

fn relayed_response_header(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(name)
        && *name != header::CONTENT_LENGTH
        && name.as_str() != "keep-alive"
        && !name.as_str().starts_with("access-control-")
}

pub struct GatewayService {
    client: reqwest::Client,
    control_url: String,
    logging_url: String,
}

impl GatewayService {
    pub fn new(
        control_url: impl Into<String>,
        logging_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            control_url: control_url.into(),
            logging_url: logging_url.into(),
        })
    }

    pub fn from_settings(gateway: &Gateway) -> Result<Self, reqwest::Error> {
        Self::new(
            gateway.control_url.clone(),
            gateway.logging_url.clone(),
            gateway.upstream_timeout_ms.map(Duration::from_millis),
        )
    }

    pub fn base_url(&self, upstream: Upstream) -> &str {
        match upstream {
            Upstream::Control => &self.control_url,
            Upstream::Logging => &self.logging_url,
        }
    }

    /// Relays a public request to its upstream and hands back the upstream's
    /// answer untouched. Failures reaching the upstream are not retried.
    pub async fn forward(&self, request: Request) -> Result<Response, ApiError> {
        let (parts, body) = request.into_parts();
        let route = route(parts.uri.path())?;

        let mut url = format!(
            "{}{}",
            self.base_url(route.upstream).trim_end_matches('/'),
            route.path
        );
        if let Some(query) = parts.uri.query() {
            url.push('?');
            url.push_str(query);
        }

        let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|_| GatewayError::PayloadTooLarge(MAX_BODY_BYTES))?;

        tracing::debug!(
            method = %parts.method,
            upstream = %route.upstream,
            path = %route.path,
            "Forwarding request"
        );

        let service = route.upstream.name();
        let upstream_response = self
            .client
            .request(parts.method, &url)
            .headers(forwardable_request_headers(parts.headers))
            .body(body)
            .send()
            .await
            .map_err(|source| GatewayError::ServiceUnavailable { service, source })?;

        let status = upstream_response.status();
        let headers = upstream_response.headers().clone();
        let bytes = upstream_response
            .bytes()
            .await
            .map_err(|source| GatewayError::ServiceUnavailable { service, source })?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        for (name, value) in headers.iter() {
            if relayed_response_header(name) {
                response.headers_mut().append(name.clone(), value.clone());
            }
        }

        Ok(response)
    }
}
