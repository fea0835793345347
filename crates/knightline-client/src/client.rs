//! Authenticated request executor.

use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use reqwest::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::stream::{CancelHandle, RecordStream, stream_response};
use crate::{ClientConfig, ClientError, Endpoints, RequestParams, Result};

/// Async client for the lichess.org API.
///
/// Holds the bearer credential, the HTTP transport and the endpoint table.
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LichessClient {
    http: reqwest::Client,
    authorization: HeaderValue,
    endpoints: Endpoints,
    stream_buffer: usize,
}

impl LichessClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be carried in an HTTP header, or
    /// if the default transport cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let authorization = bearer_header(&config.token)?;

        let http = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&config.user_agent)
                .connect_timeout(config.connect_timeout)
                .tcp_nodelay(true)
                .gzip(true)
                .build()?,
        };

        Ok(Self {
            http,
            authorization,
            endpoints: config.endpoints,
            stream_buffer: config.stream_buffer.max(1),
        })
    }

    /// Creates an anonymous client for the public lichess.org service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Returns the endpoint table.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the stream buffer capacity.
    #[must_use]
    pub const fn stream_buffer(&self) -> usize {
        self.stream_buffer
    }

    /// Turns request parameters into a transport request without sending it.
    ///
    /// The `Authorization` header always carries the configured credential.
    /// A caller-supplied `Authorization` header is discarded. Query
    /// parameters are appended to any query already present in the URL and
    /// the body is passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] or [`ClientError::InvalidHeader`].
    pub fn build_request(&self, params: RequestParams) -> Result<Request> {
        let RequestParams {
            method,
            url,
            headers,
            query,
            body,
        } = params;

        let mut target = Url::parse(&url).map_err(|source| ClientError::InvalidUrl {
            url: url.clone(),
            source,
        })?;
        if !query.is_empty() {
            target.query_pairs_mut().extend_pairs(&query);
        }

        let mut request = Request::new(method, target);
        let header_map = request.headers_mut();
        header_map.insert(AUTHORIZATION, self.authorization.clone());

        for (name, value) in &headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
            if header_name == AUTHORIZATION {
                warn!("ignoring caller-supplied Authorization header");
                continue;
            }
            let header_value = HeaderValue::try_from(value.as_str())
                .map_err(|e| ClientError::InvalidHeader(format!("{name}: {e}")))?;
            header_map.insert(header_name, header_value);
        }

        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }

    /// Builds and sends a request, returning the raw response.
    ///
    /// Non-success statuses are returned as responses, not errors. Nothing is
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns a construction error, or [`ClientError::Http`] if the
    /// transport fails.
    #[instrument(
        name = "lichess_request",
        skip(self, params),
        fields(
            http.method = %params.method(),
            http.url = %params.url(),
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute(&self, params: RequestParams) -> Result<Response> {
        let request = self.build_request(params)?;
        let response = self.http.execute(request).await?;

        Span::current().record("http.status_code", response.status().as_u16());
        debug!("response received");

        Ok(response)
    }

    /// Sends a request and decodes the body as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for non-success statuses and
    /// [`ClientError::Decode`] if the body does not match `T`, in addition
    /// to the errors of [`execute`](Self::execute).
    pub async fn fetch_json<T>(&self, params: RequestParams) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = ensure_success(self.execute(params).await?).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends a request and decodes the body as newline-delimited JSON.
    ///
    /// # Errors
    ///
    /// Fails before any record is produced if the request cannot be sent or
    /// the server answers with a non-success status.
    pub async fn fetch_stream<T>(
        &self,
        params: RequestParams,
    ) -> Result<(RecordStream<T>, CancelHandle)>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let response = ensure_success(self.execute(params).await?).await?;
        Ok(stream_response(response, self.stream_buffer))
    }
}

/// Formats the credential as an `Authorization` header value.
///
/// An empty token still yields `Bearer ` so the header shape never changes.
fn bearer_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::try_from(format!("Bearer {token}")).map_err(|_| {
        ClientError::InvalidHeader("authorization token contains invalid characters".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Turns a non-success response into [`ClientError::Status`].
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "failed to read error body");
            String::new()
        }
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
pub(crate) fn mock_client(base_url: &str, token: &str) -> LichessClient {
    LichessClient::new(
        ClientConfig::default()
            .with_token(token)
            .with_base_url(base_url),
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use knightline_types::User;
    use reqwest::Method;
    use wiremock::matchers::{body_string, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::StreamEnd;

    fn client(token: &str) -> LichessClient {
        mock_client("https://lichess.org", token)
    }

    #[test]
    fn test_bearer_header_with_token() {
        let request = client("lip_secret")
            .build_request(RequestParams::get("https://lichess.org/api/account"))
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer lip_secret");
    }

    #[test]
    fn test_bearer_header_with_empty_token() {
        let request = client("")
            .build_request(RequestParams::get("https://lichess.org/api/account"))
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer ");
        assert_eq!(request.headers().get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_caller_cannot_override_authorization() {
        let params = RequestParams::get("https://lichess.org/api/account")
            .header("Authorization", "Bearer stolen")
            .header("authorization", "Basic abc");
        let request = client("mine").build_request(params).unwrap();

        let values: Vec<_> = request.headers().get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values, ["Bearer mine"]);
    }

    #[test]
    fn test_headers_and_query_merged() {
        let params = RequestParams::get("https://lichess.org/player?lang=en")
            .header("Accept", "application/vnd.lichess.v3+json")
            .query("ids", "a,b");
        let request = client("t").build_request(params).unwrap();

        assert_eq!(request.headers()["accept"], "application/vnd.lichess.v3+json");
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("lang".to_string(), "en".to_string()),
                ("ids".to_string(), "a,b".to_string())
            ]
        );
    }

    #[test]
    fn test_header_names_case_insensitive() {
        let params = RequestParams::get("https://lichess.org/player")
            .header("Accept", "application/json")
            .header("accept", "application/vnd.lichess.v3+json");
        let request = client("t").build_request(params).unwrap();

        let values: Vec<_> = request.headers().get_all("accept").iter().collect();
        assert_eq!(values, ["application/vnd.lichess.v3+json"]);
    }

    #[test]
    fn test_body_passed_verbatim() {
        let params = RequestParams::post("https://lichess.org/api/users").body("a,b,c");
        let request = client("t").build_request(params).unwrap();

        assert_eq!(request.method(), &Method::POST);
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, b"a,b,c");
        assert!(request.headers().get(reqwest::header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_malformed_url() {
        let err = client("t")
            .build_request(RequestParams::get("not a url"))
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
        assert!(err.is_construction());
    }

    #[test]
    fn test_invalid_header_name() {
        let params = RequestParams::get("https://lichess.org").header("bad header", "x");
        let err = client("t").build_request(params).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }

    #[test]
    fn test_token_with_newline_rejected() {
        let err = LichessClient::new(ClientConfig::default().with_token("a\nb")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", client("lip_secret"));
        assert!(!rendered.contains("lip_secret"));
    }

    #[tokio::test]
    async fn test_execute_sends_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/account"))
            .and(header("authorization", "Bearer lip_token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "lip_token");
        let response = client
            .execute(RequestParams::get(&client.endpoints().account_profile))
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn test_execute_sends_header_for_empty_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/account"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "");
        client
            .execute(RequestParams::get(&client.endpoints().account_profile))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_execute_returns_error_status_as_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{\"error\":\"Not found\"}"))
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "t");
        let response = client
            .execute(RequestParams::get(format!("{}/api/user/ghost", server.uri())))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
    }

    #[tokio::test]
    async fn test_execute_post_query_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/account/kid"))
            .and(query_param("v", "true"))
            .and(body_string("raw body"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "t");
        let params = RequestParams::post(&client.endpoints().account_kid_mode)
            .query("v", "true")
            .body("raw body");
        client.execute(params).await.unwrap();
    }

    #[tokio::test]
    async fn test_transport_error_surfaces() {
        // Nothing listens on port 9 of the loopback interface.
        let client = mock_client("http://127.0.0.1:9", "t");
        let err = client
            .execute(RequestParams::get(&client.endpoints().account_profile))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_json_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "t");
        let err = client
            .fetch_json::<User>(RequestParams::get(format!("{}/api/account", server.uri())))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_json_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"No such token\"}"))
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "bad");
        let err = client
            .fetch_json::<User>(RequestParams::get(format!("{}/api/account", server.uri())))
            .await
            .unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("No such token"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_unreadable_error_body_is_logged() {
        let chunks: Vec<std::io::Result<&'static str>> = vec![
            Ok("{\"error\":"),
            Err(std::io::Error::other("connection reset")),
        ];
        let body = reqwest::Body::wrap_stream(futures::stream::iter(chunks));
        let response = Response::from(
            http::Response::builder()
                .status(502)
                .body(body)
                .unwrap(),
        );

        match ensure_success(response).await.unwrap_err() {
            ClientError::Status { status, body } => {
                assert_eq!(status, 502);
                assert!(body.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(logs_contain("failed to read error body"));
    }

    #[tokio::test]
    async fn test_fetch_stream_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/someone/followers"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                "{\"id\":\"a\",\"username\":\"A\"}\n{\"id\":\"b\",\"username\":\"B\"}\n",
                "application/x-ndjson",
            ))
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "t");
        let url = format!("{}/api/user/someone/followers", server.uri());
        let (mut stream, _cancel) = client
            .fetch_stream::<User>(RequestParams::get(url))
            .await
            .unwrap();

        assert_eq!(stream.next().await.unwrap().id, "a");
        assert_eq!(stream.next().await.unwrap().id, "b");
        assert!(stream.next().await.is_none());
        assert_eq!(stream.termination(), Some(&StreamEnd::Eof));
    }

    #[tokio::test]
    async fn test_fetch_stream_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = mock_client(&server.uri(), "t");
        let result = client
            .fetch_stream::<User>(RequestParams::get(format!("{}/api/team/x/users", server.uri())))
            .await;
        assert_eq!(result.unwrap_err().status(), Some(429));
    }
}
