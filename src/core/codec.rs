use crate::error::{constants, BridgeError, Result};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Largest frame body accepted by [`FrameCodec`] (fits a three-byte VarInt)
pub const MAX_FRAME_SIZE: usize = 2 * 1024 * 1024 - 1;

/// Default maximum declared string length in characters
pub const MAX_STRING_LENGTH: usize = i16::MAX as usize;

const MAX_VARINT_BYTES: usize = 5;

/// Read a VarInt (LEB128, little-endian groups of seven bits)
pub fn read_varint<B: Buf>(buf: &mut B) -> Result<i32> {
    let mut value: u32 = 0;
    for position in 0..MAX_VARINT_BYTES {
        if !buf.has_remaining() {
            return Err(BridgeError::Decode(constants::ERR_BUFFER_UNDERFLOW.into()));
        }
        let byte = buf.get_u8();
        value |= u32::from(byte & 0x7F) << (7 * position);
        if byte & 0x80 == 0 {
            return Ok(value as i32);
        }
    }
    Err(BridgeError::Decode(constants::ERR_VARINT_TOO_BIG.into()))
}

pub fn write_varint<B: BufMut>(buf: &mut B, value: i32) {
    let mut value = value as u32;
    loop {
        if value & !0x7F == 0 {
            buf.put_u8(value as u8);
            return;
        }
        buf.put_u8((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
}

/// Number of bytes `value` occupies as a VarInt
pub fn varint_len(value: i32) -> usize {
    let value = value as u32;
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        _ => 5,
    }
}

/// Length of a string in UTF-16 code units, the unit the protocol limits count in
#[inline]
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Longest prefix of `value` that fits in `max_length` UTF-16 code units
pub fn truncate_utf16(value: &str, max_length: usize) -> &str {
    let mut units = 0usize;
    for (index, ch) in value.char_indices() {
        units += ch.len_utf16();
        if units > max_length {
            return &value[..index];
        }
    }
    value
}

/// Read a length-prefixed UTF-8 string of at most `max_length` characters
pub fn read_string<B: Buf>(buf: &mut B, max_length: usize) -> Result<String> {
    let length = read_varint(buf)?;
    if length < 0 {
        return Err(BridgeError::Decode(constants::ERR_NEGATIVE_LENGTH.into()));
    }
    let length = length as usize;
    let max_bytes = max_length.saturating_mul(4);
    if length > max_bytes {
        return Err(BridgeError::Decode(format!(
            "Encoded string length {length} exceeds maximum of {max_bytes} bytes"
        )));
    }
    if buf.remaining() < length {
        return Err(BridgeError::Decode(constants::ERR_BUFFER_UNDERFLOW.into()));
    }

    let mut bytes = vec![0u8; length];
    buf.copy_to_slice(&mut bytes);
    let value = String::from_utf8(bytes)
        .map_err(|_| BridgeError::Decode(constants::ERR_INVALID_UTF8.into()))?;

    let chars = utf16_len(&value);
    if chars > max_length {
        return Err(BridgeError::Decode(format!(
            "String length {chars} exceeds maximum of {max_length}"
        )));
    }
    Ok(value)
}

/// Write a length-prefixed UTF-8 string, rejecting values over `max_length` characters
pub fn write_string<B: BufMut>(buf: &mut B, value: &str, max_length: usize) -> Result<()> {
    let chars = utf16_len(value);
    if chars > max_length {
        return Err(BridgeError::Encode(format!(
            "String length {chars} exceeds maximum of {max_length}"
        )));
    }
    write_varint(buf, value.len() as i32);
    buf.put_slice(value.as_bytes());
    Ok(())
}

/// Decode a VarInt from the front of `src` without consuming it.
///
/// Returns `None` when more bytes are needed.
fn peek_varint(src: &[u8]) -> Result<Option<(i32, usize)>> {
    let mut value: u32 = 0;
    for (position, byte) in src.iter().take(MAX_VARINT_BYTES).enumerate() {
        value |= u32::from(byte & 0x7F) << (7 * position);
        if byte & 0x80 == 0 {
            return Ok(Some((value as i32, position + 1)));
        }
    }
    if src.len() >= MAX_VARINT_BYTES {
        return Err(BridgeError::Decode(constants::ERR_VARINT_TOO_BIG.into()));
    }
    Ok(None)
}

/// VarInt length-delimited frames.
///
/// The proxy pipeline hands decrypted, decompressed frame bodies to the
/// channel layer; this codec only splits and joins them.
#[derive(Debug, Clone, Copy)]
pub struct FrameCodec {
    max_frame_size: usize,
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self {
            max_frame_size: MAX_FRAME_SIZE,
        }
    }
}

impl FrameCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self { max_frame_size }
    }

    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }
}

impl Decoder for FrameCodec {
    type Item = BytesMut;
    type Error = BridgeError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        let Some((length, header)) = peek_varint(src)? else {
            return Ok(None);
        };
        if length < 0 {
            return Err(BridgeError::Decode(constants::ERR_NEGATIVE_LENGTH.into()));
        }
        let length = length as usize;
        if length > self.max_frame_size {
            return Err(BridgeError::OversizedFrame(length));
        }

        if src.len() < header + length {
            src.reserve(header + length - src.len());
            return Ok(None);
        }

        src.advance(header);
        Ok(Some(src.split_to(length)))
    }
}

impl Encoder<Bytes> for FrameCodec {
    type Error = BridgeError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        if item.len() > self.max_frame_size {
            return Err(BridgeError::OversizedFrame(item.len()));
        }
        dst.reserve(varint_len(item.len() as i32) + item.len());
        write_varint(dst, item.len() as i32);
        dst.extend_from_slice(&item);
        Ok(())
    }
}
