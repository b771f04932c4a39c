//! Private REST client for Userful device communication
//!
//! This crate provides a minimal blocking HTTP client specifically designed
//! for talking to the JSON management API of Userful signage servers. It
//! knows nothing about sessions or endpoints; callers build full URLs and
//! optionally attach a cookie header per request.

mod error;

pub use error::RestError;

use serde::Serialize;
use std::time::Duration;

/// A raw HTTP response: status code plus the body as received
///
/// The management API's response shapes are interpreted by the caller, so
/// the body is carried verbatim. [`RestResponse::json`] is a convenience for
/// callers that want structured access.
#[derive(Debug, Clone)]
pub struct RestResponse {
    status: u16,
    body: String,
}

impl RestResponse {
    /// HTTP status code of the response
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body as received
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the response, returning the body
    pub fn into_body(self) -> String {
        self.body
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value, RestError> {
        serde_json::from_str(&self.body).map_err(|e| RestError::Json(e.to_string()))
    }
}

/// A minimal blocking HTTP client for JSON REST APIs
#[derive(Debug, Clone)]
pub struct RestClient {
    agent: ureq::Agent,
}

impl RestClient {
    /// Create a new REST client with default timeouts
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }

    /// Send a GET request
    pub fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> Result<RestResponse, RestError> {
        let request = self.prepare("GET", url, query, cookie);
        Self::finish(request.call())
    }

    /// Send a POST request with a JSON body
    pub fn post<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        cookie: Option<&str>,
    ) -> Result<RestResponse, RestError> {
        let request = self.prepare("POST", url, &[], cookie);
        Self::finish(request.send_json(body))
    }

    /// Send a PUT request with a JSON body
    pub fn put<B: Serialize>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &B,
        cookie: Option<&str>,
    ) -> Result<RestResponse, RestError> {
        let request = self.prepare("PUT", url, query, cookie);
        Self::finish(request.send_json(body))
    }

    /// Send a PUT request with no body
    pub fn put_empty(
        &self,
        url: &str,
        query: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> Result<RestResponse, RestError> {
        let request = self.prepare("PUT", url, query, cookie);
        Self::finish(request.call())
    }

    fn prepare(
        &self,
        method: &str,
        url: &str,
        query: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> ureq::Request {
        let mut request = self.agent.request(method, url);
        for (name, value) in query {
            request = request.query(name, value);
        }
        if let Some(cookie) = cookie {
            request = request.set("Cookie", cookie);
        }
        request
    }

    fn finish(result: Result<ureq::Response, ureq::Error>) -> Result<RestResponse, RestError> {
        match result {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|e| RestError::Network(e.to_string()))?;
                Ok(RestResponse { status, body })
            }
            // ureq reports 4xx/5xx as errors; surface them as-is so the
            // caller sees exactly what the server sent.
            Err(ureq::Error::Status(code, response)) => Err(RestError::Status {
                code,
                body: response.into_string().unwrap_or_default(),
            }),
            Err(e) => Err(RestError::Network(e.to_string())),
        }
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn test_client_creation() {
        let _client = RestClient::new();
        let _default_client = RestClient::default();
    }

    #[test]
    fn test_json_parses_valid_body() {
        let response = RestResponse {
            status: 200,
            body: r#"{"session":{"value":"abc"}}"#.to_string(),
        };

        let value = response.json().unwrap();
        assert_eq!(value["session"]["value"], "abc");
    }

    #[test]
    fn test_json_rejects_invalid_body() {
        let response = RestResponse {
            status: 200,
            body: "<html>not json</html>".to_string(),
        };

        match response.json() {
            Err(RestError::Json(_)) => {}
            other => panic!("expected RestError::Json, got {:?}", other),
        }
    }

    #[test]
    fn test_get_attaches_query_and_cookie() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/things")
            .match_query(Matcher::UrlEncoded("name".into(), "Lobby".into()))
            .match_header("cookie", "JSESSIONID=abc")
            .with_body("[]")
            .create();

        let client = RestClient::new();
        let response = client
            .get(
                &format!("{}/things", server.url()),
                &[("name", "Lobby")],
                Some("JSESSIONID=abc"),
            )
            .unwrap();

        mock.assert();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "[]");
    }

    #[test]
    fn test_non_success_status_surfaces_with_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/things")
            .with_status(503)
            .with_body("maintenance")
            .create();

        let client = RestClient::new();
        let result = client.get(&format!("{}/things", server.url()), &[], None);

        match result {
            Err(RestError::Status { code, body }) => {
                assert_eq!(code, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected RestError::Status, got {:?}", other),
        }
    }

    #[test]
    fn test_network_error_on_unreachable_host() {
        let client = RestClient::new();
        // Reserved TEST-NET-1 address, nothing listens there.
        let result = client.get("http://192.0.2.1:9/things", &[], None);

        match result {
            Err(RestError::Network(_)) => {}
            other => panic!("expected RestError::Network, got {:?}", other),
        }
    }
}
