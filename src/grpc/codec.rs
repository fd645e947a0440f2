//! # JSON Codec
//!
//! This module implements `tonic::codec::Codec` so that `tonic` can transport
//! the typed Reddit messages with JSON as the wire encoding.
//!
//! ## How it works
//!
//! 1. **Encoder (Request -> bytes)**:
//!    - Takes a [`PostRequest`].
//!    - Serializes its fields into a self-describing JSON byte payload.
//!    - Cannot fail for a well-formed request.
//!
//! 2. **Decoder (bytes -> Response)**:
//!    - Reads the length-delimited payload `tonic` hands it.
//!    - Parses it into a [`CommentsResponse`], defaulting any missing fields.
//!    - On parse failure it yields a fallback response instead of an error:
//!      the gRPC completion path has no separate channel for "the call
//!      succeeded but the payload was undecodable", so decode failure is
//!      deliberately non-fatal.
//!
//! The pure [`encode`] and [`decode`] functions define the wire contract; the
//! codec types only bind them to `tonic`'s buffers.
use crate::client::{Comment, CommentsResponse, PostRequest};
use bytes::{Buf, BufMut};
use tonic::{
    Status,
    codec::{Codec, DecodeBuf, Decoder, EncodeBuf, Encoder},
};

/// The JSON variant of the gRPC media type, declared as both the outgoing
/// content type and the accepted response type of every call.
pub const GRPC_JSON_CONTENT_TYPE: &str = "application/grpc+json";

/// Title of the fallback response built when decoding fails.
pub const PARSE_ERROR_TITLE: &str = "Error parsing response";

/// Serializes a request into its JSON wire payload.
pub fn encode(request: &PostRequest) -> Vec<u8> {
    serde_json::to_vec(request).expect("PostRequest serializes to JSON")
}

/// Parses a JSON wire payload into a response.
///
/// Fields absent from the payload take their defaults (see
/// [`CommentsResponse`]). Malformed or wrong-shaped payloads never produce an
/// error: the result is a fallback response whose title signals the parse
/// failure and whose single synthetic comment names the underlying cause.
pub fn decode(bytes: &[u8]) -> CommentsResponse {
    match serde_json::from_slice(bytes) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("Failed to decode response payload: {err}");
            CommentsResponse {
                post_title: PARSE_ERROR_TITLE.to_string(),
                comments: vec![Comment {
                    body: format!("Failed to parse response: {err}"),
                }],
            }
        }
    }
}

/// A codec that bridges the typed Reddit messages and JSON wire payloads.
#[derive(Debug, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    type Encode = PostRequest;
    type Decode = CommentsResponse;

    type Encoder = JsonEncoder;
    type Decoder = JsonDecoder;

    fn encoder(&mut self) -> Self::Encoder {
        JsonEncoder
    }

    fn decoder(&mut self) -> Self::Decoder {
        JsonDecoder
    }
}

/// Responsible for encoding a request into JSON bytes.
#[derive(Debug)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    type Item = PostRequest;
    type Error = Status;

    fn encode(&mut self, item: Self::Item, dst: &mut EncodeBuf<'_>) -> Result<(), Self::Error> {
        dst.put_slice(&encode(&item));
        Ok(())
    }
}

/// Responsible for decoding JSON bytes into a response.
#[derive(Debug)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    type Item = CommentsResponse;
    type Error = Status;

    fn decode(&mut self, src: &mut DecodeBuf<'_>) -> Result<Option<Self::Item>, Self::Error> {
        // `tonic` owns the 5-byte frame header and hands over exactly one
        // message payload per call.
        let payload = src.copy_to_bytes(src.remaining());
        Ok(Some(decode(&payload)))
    }
}
