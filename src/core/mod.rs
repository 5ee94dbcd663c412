//! # Core Wire Components
//!
//! Low-level encoding shared by the channel pipeline.
//!
//! ## Components
//! - **Codec**: VarInt integers, length-prefixed UTF-8 strings and a
//!   `tokio_util` codec for VarInt length-delimited frames
//! - **Packet**: custom payload packets (channel identifier + opaque data)
//!
//! ## Wire Format
//! ```text
//! Frame:   [Length(VarInt)] [Body(N)]
//! String:  [ByteLength(VarInt)] [UTF-8(N)]
//! Payload: [Channel(String)] [Data(rest)]
//! ```
//!
//! ## Limits
//! - Frame bodies are capped at 2 MiB (three-byte VarInt length)
//! - Strings are capped by a declared character length; the encoded byte
//!   length may not exceed four times that

pub mod codec;
pub mod packet;
