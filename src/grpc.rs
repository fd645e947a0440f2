//! # gRPC Transport
//!
//! This module contains the low-level building blocks for performing the
//! unary gRPC call.
//!
//! Unlike standard `tonic` clients which serialize messages to Protobuf
//! binary, the components here put JSON bytes on the wire: no Protobuf
//! encoder exists for these messages, so the codec's JSON output is the wire
//! format, declared through the JSON variant of the gRPC media type.
pub mod client;
pub mod codec;
pub mod descriptor;
