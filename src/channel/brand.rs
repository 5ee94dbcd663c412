//! Brand channel rewriting.
//!
//! Servers announce their software name on the brand channel. The proxy
//! replaces it with a chain showing both negotiated versions:
//!
//! ```text
//! ViaProxy (<client-version>) -> <server-brand> (<server-version>)
//! ```

use crate::channel::dispatcher::{ConnectionVersions, Direction, PayloadContext, PayloadHandler};
use crate::channel::{ChannelId, BRAND};
use crate::config::BrandConfig;
use crate::core::codec::{read_string, truncate_utf16, write_string, MAX_STRING_LENGTH};
use crate::error::{BridgeError, Result};
use crate::utils::metrics::global_metrics;
use crate::version::catalog::V1_20;
use crate::version::{ProtocolVersion, VersionRegistry};
use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

/// Legacy formatting reset code
const FORMATTING_RESET: &str = "\u{a7}r";

#[derive(Debug, Clone)]
pub struct BrandHandler {
    proxy_name: String,
    placeholder: String,
    strict_after: ProtocolVersion,
    max_length: usize,
    reset_formatting: bool,
}

impl Default for BrandHandler {
    fn default() -> Self {
        let config = BrandConfig::default();
        Self {
            proxy_name: config.proxy_name,
            placeholder: config.placeholder,
            strict_after: V1_20,
            max_length: config.max_length,
            reset_formatting: config.reset_formatting,
        }
    }
}

impl BrandHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configuration, resolving the strictness cutoff through `registry`
    pub fn from_config(config: &BrandConfig, registry: &VersionRegistry) -> Result<Self> {
        let strict_after = registry
            .closest_match(&config.strict_after)
            .ok_or_else(|| BridgeError::UnresolvedVersion(config.strict_after.clone()))?;

        Ok(Self {
            proxy_name: config.proxy_name.clone(),
            placeholder: config.placeholder.clone(),
            strict_after,
            max_length: config.max_length,
            reset_formatting: config.reset_formatting,
        })
    }

    pub fn strict_after(&self) -> &ProtocolVersion {
        &self.strict_after
    }

    pub fn format_brand(&self, versions: &ConnectionVersions, brand: &str) -> String {
        let reset = if self.reset_formatting { FORMATTING_RESET } else { "" };
        format!(
            "{} ({}) -> {} {}({})",
            self.proxy_name, versions.client, brand, reset, versions.server
        )
    }

    /// Decode the server's brand and encode the replacement.
    ///
    /// Clients newer than the cutoff reject malformed brands, so the decode
    /// error is propagated for them; older clients get the placeholder.
    /// The server's brand is read at the protocol limit; only the output is
    /// capped to `max_length`.
    pub fn rewrite_brand(&self, versions: &ConnectionVersions, data: &[u8]) -> Result<Bytes> {
        let mut cursor = data;
        let brand = match read_string(&mut cursor, MAX_STRING_LENGTH) {
            Ok(brand) => brand,
            Err(e) if versions.client.newer_than(&self.strict_after) => {
                warn!(error = %e, client = %versions.client, "Malformed server brand");
                return Err(e);
            }
            Err(e) => {
                debug!(
                    error = %e,
                    placeholder = %self.placeholder,
                    "Substituting malformed server brand"
                );
                global_metrics().brand_placeholder_substituted();
                self.placeholder.clone()
            }
        };

        let rewritten = self.format_brand(versions, &brand);
        let rewritten = truncate_utf16(&rewritten, self.max_length);

        let mut out = BytesMut::with_capacity(rewritten.len() + 3);
        write_string(&mut out, rewritten, self.max_length)?;
        Ok(out.freeze())
    }
}

impl PayloadHandler for BrandHandler {
    fn name(&self) -> &'static str {
        "brand"
    }

    fn claims(&self, channel: &ChannelId, direction: Direction) -> bool {
        direction == Direction::Clientbound && BRAND.matches(channel)
    }

    fn rewrite(
        &self,
        ctx: &mut PayloadContext<'_>,
        _channel: &ChannelId,
        data: Bytes,
    ) -> Result<Bytes> {
        self.rewrite_brand(ctx.versions(), &data)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::version::catalog::{B1_7_3, V1_12_2, V1_20_5, V1_8};

    fn encode(brand: &str) -> Bytes {
        let mut out = BytesMut::new();
        write_string(&mut out, brand, MAX_STRING_LENGTH).unwrap();
        out.freeze()
    }

    fn decode(data: &[u8]) -> String {
        read_string(&mut &data[..], MAX_STRING_LENGTH).unwrap()
    }

    #[test]
    fn rewrites_with_both_versions() {
        let versions = ConnectionVersions::new(V1_20_5, V1_8);
        let out = BrandHandler::new().rewrite_brand(&versions, &encode("Paper")).unwrap();
        assert_eq!(decode(&out), "ViaProxy (1.20.5-1.20.6) -> Paper (1.8.x)");
    }

    #[test]
    fn reset_formatting_inserts_code() {
        let config = BrandConfig {
            reset_formatting: true,
            ..BrandConfig::default()
        };
        let handler = BrandHandler::from_config(&config, &VersionRegistry::standard()).unwrap();
        let versions = ConnectionVersions::new(V1_12_2, B1_7_3);
        let out = handler.rewrite_brand(&versions, &encode("\u{a7}cRed")).unwrap();
        assert_eq!(decode(&out), "ViaProxy (1.12.2) -> \u{a7}cRed \u{a7}r(b1.7-b1.7.3)");
    }

    #[test]
    fn malformed_brand_depends_on_client_version() {
        let garbage = [0x05u8, b'a'];
        let handler = BrandHandler::new();

        let old = ConnectionVersions::new(V1_20, V1_8);
        let out = handler.rewrite_brand(&old, &garbage).unwrap();
        assert_eq!(decode(&out), "ViaProxy (1.20-1.20.1) -> Unknown (1.8.x)");

        let new = ConnectionVersions::new(V1_20_5, V1_8);
        assert!(matches!(
            handler.rewrite_brand(&new, &garbage),
            Err(BridgeError::Decode(_))
        ));
    }

    #[test]
    fn output_is_capped() {
        let config = BrandConfig {
            max_length: 24,
            ..BrandConfig::default()
        };
        let handler = BrandHandler::from_config(&config, &VersionRegistry::standard()).unwrap();
        let versions = ConnectionVersions::new(V1_20_5, V1_8);
        let out = handler.rewrite_brand(&versions, &encode("vanilla")).unwrap();
        let text = decode(&out);
        assert_eq!(text.chars().count(), 24);
        assert!(text.starts_with("ViaProxy (1.20.5"));
    }

    #[test]
    fn long_brand_is_truncated_not_rejected() {
        let config = BrandConfig {
            max_length: 64,
            ..BrandConfig::default()
        };
        let handler = BrandHandler::from_config(&config, &VersionRegistry::standard()).unwrap();
        let brand = "x".repeat(100);

        for client in [V1_12_2, V1_20_5] {
            let versions = ConnectionVersions::new(client, V1_8);
            let out = handler.rewrite_brand(&versions, &encode(&brand)).unwrap();
            let text = decode(&out);
            assert_eq!(text.chars().count(), 64);
            assert!(text.ends_with("xxxx"));
            assert!(!text.contains("Unknown"));
        }
    }

    #[test]
    fn claims_only_clientbound_brand() {
        let handler = BrandHandler::new();
        assert!(handler.claims(&"MC|Brand".into(), Direction::Clientbound));
        assert!(handler.claims(&"minecraft:brand".into(), Direction::Clientbound));
        assert!(!handler.claims(&"minecraft:brand".into(), Direction::Serverbound));
        assert!(!handler.claims(&"minecraft:register".into(), Direction::Clientbound));
    }
}
