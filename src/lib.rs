//! # Grebbit
//!
//! `grebbit` is a typed unary gRPC client for the
//! `reddit_implementation.RedditService` comment-search service.
//!
//! No Protobuf encoder is available for these messages, so the client carries
//! JSON payloads inside standard gRPC framing and declares the JSON variant of
//! the gRPC media type on every call. The service exposes exactly one method,
//! `GetPostComments`, and this crate exposes exactly one operation for it.
//!
//! ## Key Components
//!
//! * **[`client::RedditClient`]:** The main entry point. It validates the
//!   endpoint up front and exposes the `GetPostComments` operation, mapping
//!   every outcome into the typed error domain of [`client::CallError`].
//! * **[`grpc::client::GrpcClient`]:** The transport layer. A thin wrapper
//!   over `tonic`'s generic client that performs exactly one unary call per
//!   invocation using the [`grpc::codec::JsonCodec`].
//! * **[`grpc::codec`]:** The wire format. Pure `encode`/`decode` functions
//!   over the message types; decoding never fails, degrading to a fallback
//!   response instead.
//!
//! ## Error domain
//!
//! Callers can branch on three distinct failures: a configuration error when
//! the client is built, a dispatch failure carrying no status code, and a
//! completed call whose status was not `OK`. Undecodable response payloads are
//! deliberately not a failure; see [`grpc::codec::decode`].
//!
//! ## Re-exports
//!
//! This crate re-exports `tonic` to ensure that consumers use a compatible
//! version of the underlying dependency.
pub mod client;
pub mod grpc;

// Re-exports
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
