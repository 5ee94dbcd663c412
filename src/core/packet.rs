//! Custom payload packets: a channel identifier followed by opaque data.

use crate::core::codec::{read_string, write_string, MAX_STRING_LENGTH};
use crate::error::Result;
use bytes::{Bytes, BytesMut};

/// Application-level message multiplexed over the generic payload packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPayload {
    pub channel: String,
    pub data: Bytes,
}

impl CustomPayload {
    pub fn new(channel: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            channel: channel.into(),
            data: data.into(),
        }
    }

    /// Decode from a packet body (packet id already stripped)
    pub fn decode(mut body: Bytes) -> Result<Self> {
        let channel = read_string(&mut body, MAX_STRING_LENGTH)?;
        Ok(Self {
            channel,
            data: body,
        })
    }

    pub fn encode(&self) -> Result<Bytes> {
        let mut out = BytesMut::with_capacity(self.channel.len() + self.data.len() + 5);
        write_string(&mut out, &self.channel, MAX_STRING_LENGTH)?;
        out.extend_from_slice(&self.data);
        Ok(out.freeze())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn data_is_the_rest_of_the_body() {
        let packet = CustomPayload::new("minecraft:brand", Bytes::from_static(b"\x07vanilla"));
        let body = packet.encode().unwrap();
        assert_eq!(body[0] as usize, "minecraft:brand".len());

        let decoded = CustomPayload::decode(body).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn truncated_channel_fails() {
        assert!(CustomPayload::decode(Bytes::from_static(b"\x0fminecraft")).is_err());
    }
}
