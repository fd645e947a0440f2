//! # Unary gRPC Client
//!
//! This module wraps a standard `tonic` client to perform the one unary call
//! this crate supports.
//!
//! ## How it works
//!
//! The [`GrpcClient`] pairs the static [`MethodDescriptor`] with the
//! [`super::codec::JsonCodec`] and dispatches exactly one call per
//! invocation. It is generic over the underlying service so tests can inject
//! a simulated transport in place of a real channel.
//!
//! ## Outcomes
//!
//! The nested result keeps dispatch failures apart from completed calls:
//! the outer `Err` means no status code ever existed, the inner `Err` is the
//! status the server reported.
use super::codec::GRPC_JSON_CONTENT_TYPE;
use super::descriptor::MethodDescriptor;
use crate::BoxError;
use crate::client::{CommentsResponse, PostRequest};
use http_body::Body as HttpBody;
use std::str::FromStr;
use tonic::{
    client::GrpcService,
    metadata::{
        MetadataKey, MetadataValue,
        errors::{InvalidMetadataKey, InvalidMetadataValue},
    },
    transport::Channel,
};

#[derive(thiserror::Error, Debug)]
pub enum GrpcRequestError {
    #[error("Internal error, the client was not ready: '{0}'")]
    ClientNotReady(#[source] BoxError),
    #[error("Invalid metadata (header) key '{key}': '{source}'")]
    InvalidMetadataKey {
        key: String,
        source: InvalidMetadataKey,
    },
    #[error("Invalid metadata (header) value for key '{key}': '{source}'")]
    InvalidMetadataValue {
        key: String,
        source: InvalidMetadataValue,
    },
}

/// A unary gRPC client carrying JSON payloads.
pub struct GrpcClient<S = Channel> {
    client: tonic::client::Grpc<S>,
}

impl<S> GrpcClient<S>
where
    S: GrpcService<tonic::body::Body>,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    pub fn new(service: S) -> Self {
        let client = tonic::client::Grpc::new(service);
        Self { client }
    }

    /// Performs a Unary gRPC call (Single Request -> Single Response).
    ///
    /// The returned future resolves exactly once; no retries and no timeout
    /// are applied here.
    ///
    /// # Returns
    /// * `Ok(Ok(CommentsResponse))` - Successful RPC execution.
    /// * `Ok(Err(Status))` - RPC executed, but server returned an error.
    /// * `Err(GrpcRequestError)` - Failed to send request or connect.
    pub async fn unary(
        &mut self,
        method: &MethodDescriptor,
        payload: PostRequest,
        headers: Vec<(String, String)>,
    ) -> Result<Result<CommentsResponse, tonic::Status>, GrpcRequestError> {
        self.client
            .ready()
            .await
            .map_err(|e| GrpcRequestError::ClientNotReady(e.into()))?;

        let codec = method.codec();
        let path = method.path();
        let request = build_request(payload, headers)?;

        tracing::debug!("Sending unary request to '{path}'");

        match self.client.unary(request, path, codec).await {
            Ok(response) => Ok(Ok(response.into_inner())),
            Err(status) => Ok(Err(status)),
        }
    }
}

fn build_request(
    payload: PostRequest,
    headers: Vec<(String, String)>,
) -> Result<tonic::Request<PostRequest>, GrpcRequestError> {
    let mut request = tonic::Request::new(payload);

    // The payload is JSON rather than the transport's default binary
    // encoding; declare it for both the outgoing and the accepted type.
    let content_headers = [
        ("content-type".to_string(), GRPC_JSON_CONTENT_TYPE.to_string()),
        ("accept".to_string(), GRPC_JSON_CONTENT_TYPE.to_string()),
    ];

    for (k, v) in content_headers.into_iter().chain(headers) {
        let key =
            MetadataKey::from_str(&k).map_err(|source| GrpcRequestError::InvalidMetadataKey {
                key: k.clone(),
                source,
            })?;
        let val = MetadataValue::from_str(&v)
            .map_err(|source| GrpcRequestError::InvalidMetadataValue { key: k, source })?;
        request.metadata_mut().insert(key, val);
    }
    Ok(request)
}
