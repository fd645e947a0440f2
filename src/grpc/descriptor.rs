//! # Method Descriptor
//!
//! Static metadata identifying the one remote method this crate can call.
//! The schema is known at compile time, so the descriptor is a plain `const`
//! shared by every call.

use super::codec::JsonCodec;
use http::uri::PathAndQuery;
use std::str::FromStr;

/// Static description of a gRPC method: fully-qualified service name, method
/// name and streaming flags.
///
/// Immutable and freely shareable across calls; the transport pairs it with
/// the [`JsonCodec`](super::codec::JsonCodec) when dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Fully-qualified service name (e.g. `my.package.Service`).
    pub service: &'static str,
    /// Method name (e.g. `MyMethod`).
    pub method: &'static str,
    pub request_stream: bool,
    pub response_stream: bool,
}

/// The `GetPostComments` method of the Reddit comments service.
pub const GET_POST_COMMENTS: MethodDescriptor = MethodDescriptor {
    service: "reddit_implementation.RedditService",
    method: "GetPostComments",
    request_stream: false,
    response_stream: false,
};

impl MethodDescriptor {
    /// Builds the HTTP/2 request path (e.g., `/package.Service/Method`).
    pub fn path(&self) -> PathAndQuery {
        let path = format!("/{}/{}", self.service, self.method);
        PathAndQuery::from_str(&path).expect("valid gRPC path")
    }

    /// The codec bound to this method's request and response types.
    pub fn codec(&self) -> JsonCodec {
        JsonCodec
    }
}
