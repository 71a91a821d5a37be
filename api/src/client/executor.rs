//! Request execution with tracing instrumentation.
//!
//! This module provides the [`Executor`] struct for running typed queries
//! against the service's single endpoint with Basic auth and tracing.

use std::time::Duration;

use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderValue, ACCEPT_ENCODING, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn, Span};
use url::Url;

use super::request::{PreparedRequest, ACCEPT_ENCODING_VALUE, SERVICE_PARAM};
use crate::config::ApiConfig;
use crate::content_type::ContentType;
use crate::error::{ApiError, ClientError, ConfigError};
use crate::query::{QueryObject, QueryParams};
use crate::resource::Resource;
use crate::response::decode;

/// Highest status code still treated as success.
///
/// Anything strictly greater fails the call; 300 itself succeeds.
pub const SUCCESS_CEILING: u16 = 300;

/// Builder for configuring an [`Executor`].
#[derive(Debug)]
pub struct ExecutorBuilder {
    config: ApiConfig,
}

impl ExecutorBuilder {
    fn new(base_url: Url, username: String, password: String) -> Self {
        Self {
            config: ApiConfig {
                base_url,
                username,
                password,
                content_type: ContentType::default(),
                timeout: None,
            },
        }
    }

    /// Sets the body format for both requests and responses.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let executor = Executor::builder(base_url, "user", "pass")
    ///     .content_type(ContentType::Xml)
    ///     .build();
    /// ```
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.config.content_type = content_type;
        self
    }

    /// Sets a per-request timeout. Without one, calls wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Builds the [`Executor`].
    pub fn build(self) -> Executor {
        Executor {
            config: self.config,
        }
    }
}

/// Async executor for typed queries against the service endpoint.
///
/// The executor holds read-only configuration only. Every call assembles its
/// own parameters and builds its own `reqwest::Client`, so a single executor
/// can be shared across tasks (e.g. behind an `Arc`) without locking.
///
/// ## Examples
///
/// ```rust,ignore
/// use ccb_api::Executor;
/// use ccb_api::processes::queue_managers::{QueueManagerCollection, QueueManagerQuery};
///
/// let executor = Executor::builder(base_url, "api_user", "secret").build();
///
/// let query = QueueManagerQuery { process_id: Some(5), queue_id: None };
/// let managers: QueueManagerCollection = executor.execute(&query, "queue_managers").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    config: ApiConfig,
}

impl Executor {
    /// Creates a new builder.
    ///
    /// ## Arguments
    ///
    /// * `base_url` - The URL every request is sent to.
    /// * `username` - Basic auth username.
    /// * `password` - Basic auth password.
    pub fn builder(
        base_url: Url,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ExecutorBuilder {
        ExecutorBuilder::new(base_url, username.into(), password.into())
    }

    /// Creates an executor from a complete configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Creates an executor from the `CCB_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    /// Returns the base URL for this executor.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Returns the configured content type preference.
    pub fn content_type(&self) -> ContentType {
        self.config.content_type
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Assembles the request for `service` without sending it.
    ///
    /// The parameters are `{srv: service}` merged with the flattened query.
    /// On a key collision the query's value wins and a warning is logged.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingServiceName`] for an empty service name,
    /// or [`ConfigError::InvalidQueryObject`] if the query cannot be flattened.
    pub fn prepare<Q>(&self, service: &str, query: &Q) -> Result<PreparedRequest, ConfigError>
    where
        Q: QueryObject + ?Sized,
    {
        let content_type = HeaderValue::from_static(self.config.content_type.mime());
        self.assemble(service, query, content_type)
    }

    /// Like [`prepare`](Self::prepare), with an explicit `Content-Type` header.
    ///
    /// The response is still decoded with the configured content type.
    ///
    /// ## Errors
    ///
    /// In addition to the [`prepare`](Self::prepare) errors, returns
    /// [`ConfigError::InvalidHeader`] if `content_type` is not a valid header value.
    pub fn prepare_with_content_type<Q>(
        &self,
        service: &str,
        query: &Q,
        content_type: &str,
    ) -> Result<PreparedRequest, ConfigError>
    where
        Q: QueryObject + ?Sized,
    {
        let content_type =
            HeaderValue::from_str(content_type).map_err(|_| ConfigError::InvalidHeader {
                value: content_type.to_string(),
            })?;
        self.assemble(service, query, content_type)
    }

    fn assemble<Q>(
        &self,
        service: &str,
        query: &Q,
        content_type: HeaderValue,
    ) -> Result<PreparedRequest, ConfigError>
    where
        Q: QueryObject + ?Sized,
    {
        if service.trim().is_empty() {
            return Err(ConfigError::MissingServiceName);
        }

        let mut params = QueryParams::new();
        params.insert(SERVICE_PARAM, service);

        for key in params.merge(query.flatten()?) {
            warn!(
                parameter = %key,
                service,
                "query field overrides a request parameter"
            );
        }

        Ok(PreparedRequest {
            url: self.config.base_url.clone(),
            params,
            content_type,
        })
    }

    /// Executes `service` with the given query and decodes the response.
    ///
    /// ## Type Parameters
    ///
    /// * `S` - The result shape. An empty body yields `S::default()`.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The service name is empty (before any network activity)
    /// - The request cannot be sent or no response arrives
    /// - The server responds with a status code above 300
    /// - The body does not decode into `S`
    pub async fn execute<S, Q>(&self, query: &Q, service: &str) -> Result<S, ApiError>
    where
        S: DeserializeOwned + Default,
        Q: QueryObject + ?Sized,
    {
        let prepared = self.prepare(service, query)?;
        self.send(prepared).await
    }

    /// Executes the service declared by `R`.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use ccb_api::processes::queue_managers::{QueueManagerQuery, QueueManagers};
    ///
    /// let query = QueueManagerQuery { process_id: Some(5), queue_id: None };
    /// let managers = executor.call::<QueueManagers>(&query).await?;
    /// ```
    pub async fn call<R>(&self, query: &R::Query) -> Result<R::Output, ApiError>
    where
        R: Resource,
    {
        self.execute(query, R::SERVICE).await
    }

    /// Sends a prepared request and decodes the response.
    ///
    /// A new transport is built for every call.
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            service = request.service().unwrap_or_default(),
            http.method = "GET",
            http.url = %request.url(),
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send<S>(&self, request: PreparedRequest) -> Result<S, ApiError>
    where
        S: DeserializeOwned + Default,
    {
        let client = self.transport()?;

        let response = client
            .get(request.url)
            .query(&request.params)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(ACCEPT_ENCODING, ACCEPT_ENCODING_VALUE)
            .header(CONTENT_TYPE, request.content_type)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let status_code = status.as_u16();

        // Record status in span
        Span::current().record("http.status_code", status_code);

        if status_code > SUCCESS_CEILING {
            let message = status_description(&response);

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            debug!(status = status_code, %message, "remote service rejected request");

            return Err(ClientError::RemoteService {
                status: status_code,
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(ClientError::Transport)?;
        let parsed = decode(self.config.content_type, &body)?;

        Ok(parsed)
    }

    fn transport(&self) -> Result<reqwest::Client, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(ClientError::Transport)
    }
}

/// The status line's reason phrase as sent by the server.
///
/// hyper only stores the phrase when it differs from the canonical one, so
/// fall back to the canonical reason and then to the bare code.
fn status_description(response: &reqwest::Response) -> String {
    let status = response.status();
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| status.as_u16().to_string())
}
