//! # Reddit Service Client
//!
//! This module implements the high-level surface of the crate: building a
//! client against a validated endpoint and invoking the one supported
//! operation, `GetPostComments`.
//!
//! ## Error domain
//!
//! Every invocation produces exactly one response or exactly one error, and
//! the error tells the caller which of three distinct things went wrong:
//!
//! 1. **[`CreateClientError`]**: the endpoint was rejected before any call
//!    was attempted.
//! 2. **[`CallError::Request`]**: the call never reached the server; no
//!    status code exists.
//! 3. **[`CallError::Status`]**: the call completed and the server reported a
//!    non-OK status, carried as a [`StatusError`].
//!
//! Undecodable response payloads are not an error; they resolve as a fallback
//! response (see [`crate::grpc::codec::decode`]).
mod types;

pub use types::*;

use crate::BoxError;
use crate::grpc::client::{GrpcClient, GrpcRequestError};
use crate::grpc::descriptor::GET_POST_COMMENTS;
use http_body::Body as HttpBody;
use tonic::{
    client::GrpcService,
    transport::{Channel, Endpoint},
};

/// Message substituted when the server reports a status without one.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown gRPC error";

/// Errors raised while building a client, before any call is attempted.
#[derive(Debug, thiserror::Error)]
pub enum CreateClientError {
    #[error("gRPC host URL is required")]
    MissingHost,
    #[error("gRPC host URL '{0}' must start with 'http://' or 'https://'")]
    UnsupportedScheme(String),
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
}

/// A non-OK status reported by the remote service on a completed call.
///
/// Carries the status code so callers can branch on it, unlike the generic
/// wrapped errors of [`CallError::Request`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("gRPC error: '{message}' (code: {code:?})")]
pub struct StatusError {
    pub message: String,
    pub code: tonic::Code,
}

impl From<tonic::Status> for StatusError {
    fn from(status: tonic::Status) -> Self {
        let message = if status.message().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            status.message().to_string()
        };
        Self {
            message,
            code: status.code(),
        }
    }
}

/// Errors that can occur when invoking the RPC operation.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The call completed but the server reported a non-OK status.
    #[error(transparent)]
    Status(#[from] StatusError),
    /// The call could not be dispatched at all.
    #[error("Failed to perform the gRPC request: '{0}'")]
    Request(#[from] GrpcRequestError),
}

impl CallError {
    /// True when this error is a status reported by the remote service
    /// rather than a local dispatch failure.
    pub fn is_status(&self) -> bool {
        self.status().is_some()
    }

    /// The status reported by the remote service, if any.
    pub fn status(&self) -> Option<&StatusError> {
        match self {
            CallError::Status(status) => Some(status),
            CallError::Request(_) => None,
        }
    }
}

/// Client for the `reddit_implementation.RedditService` gRPC service.
///
/// The generic parameter `S` is the underlying transport; production code
/// uses the default lazy [`Channel`], tests inject a simulated service
/// through [`RedditClient::from_service`].
pub struct RedditClient<S = Channel> {
    grpc_client: GrpcClient<S>,
}

impl RedditClient<Channel> {
    /// Validates `host` and builds a client bound to it.
    ///
    /// Validation is synchronous and never touches the network: `host` must
    /// be an absolute `http://` or `https://` URL. The underlying channel
    /// connects lazily on the first call.
    ///
    /// # Returns
    ///
    /// * `Ok(RedditClient)` - The client bound to the validated host.
    /// * `Err(CreateClientError)` - If the host is missing or not an
    ///   accepted URL.
    pub fn new(host: &str) -> Result<Self, CreateClientError> {
        if host.is_empty() {
            return Err(CreateClientError::MissingHost);
        }

        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(CreateClientError::UnsupportedScheme(host.to_string()));
        }

        let endpoint = Endpoint::new(host.to_string())
            .map_err(|e| CreateClientError::InvalidUrl(host.to_string(), e))?;

        Ok(Self::from_service(endpoint.connect_lazy()))
    }
}

impl<S> RedditClient<S>
where
    S: GrpcService<tonic::body::Body>,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Creates a client from an existing Tonic service/channel.
    pub fn from_service(service: S) -> Self {
        Self {
            grpc_client: GrpcClient::new(service),
        }
    }

    /// Fetches comments for a subreddit search.
    ///
    /// Performs exactly one RPC per invocation; the returned future resolves
    /// exactly once. Concurrent invocations are independent, with no ordering
    /// guarantee between them, and neither cancellation nor timeouts are
    /// applied here.
    pub async fn get_post_comments(
        &mut self,
        request: PostRequest,
    ) -> Result<CommentsResponse, CallError> {
        match self
            .grpc_client
            .unary(&GET_POST_COMMENTS, request, vec![])
            .await?
        {
            Ok(response) => Ok(response),
            Err(status) => Err(CallError::Status(status.into())),
        }
    }
}
