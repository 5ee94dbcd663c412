//! Standard chronological version catalog.
//!
//! Ordinals are dense and increase with release date. Range versions carry the
//! individual release names they cover so that `closest_match("b1.7.3")`
//! resolves to `b1.7-b1.7.3`.

use super::ProtocolVersion;

pub const A1_0_15: ProtocolVersion = ProtocolVersion::known(0, "a1.0.15", &[]);
pub const A1_2_6: ProtocolVersion = ProtocolVersion::known(1, "a1.2.6", &[]);
pub const B1_1_01: ProtocolVersion =
    ProtocolVersion::known(2, "b1.0-b1.1_01", &["b1.0", "b1.1", "b1.1_01"]);
pub const B1_2_02: ProtocolVersion =
    ProtocolVersion::known(3, "b1.2-b1.2_02", &["b1.2", "b1.2_01", "b1.2_02"]);
pub const B1_3_01: ProtocolVersion =
    ProtocolVersion::known(4, "b1.3-b1.3_01", &["b1.3", "b1.3_01"]);
pub const B1_4_01: ProtocolVersion =
    ProtocolVersion::known(5, "b1.4-b1.4_01", &["b1.4", "b1.4_01"]);
pub const B1_5_02: ProtocolVersion =
    ProtocolVersion::known(6, "b1.5-b1.5_02", &["b1.5", "b1.5_01", "b1.5_02"]);
pub const B1_6_6: ProtocolVersion = ProtocolVersion::known(
    7,
    "b1.6-b1.6.6",
    &["b1.6", "b1.6.1", "b1.6.2", "b1.6.3", "b1.6.4", "b1.6.5", "b1.6.6"],
);
/// Last generation with unstackable, metadata-free food
pub const B1_7_3: ProtocolVersion =
    ProtocolVersion::known(8, "b1.7-b1.7.3", &["b1.7", "b1.7.2", "b1.7.3"]);
/// Last generation with the legacy armor durability values
pub const B1_8_1: ProtocolVersion = ProtocolVersion::known(9, "b1.8-b1.8.1", &["b1.8", "b1.8.1"]);
pub const V1_0: ProtocolVersion = ProtocolVersion::known(10, "1.0.0-1.0.1", &["1.0", "1.0.0", "1.0.1"]);
pub const V1_1: ProtocolVersion = ProtocolVersion::known(11, "1.1", &[]);
pub const V1_2_1: ProtocolVersion = ProtocolVersion::known(12, "1.2.1-1.2.3", &["1.2.1", "1.2.2", "1.2.3"]);
pub const V1_2_4: ProtocolVersion = ProtocolVersion::known(13, "1.2.4-1.2.5", &["1.2.4", "1.2.5"]);
pub const V1_3_1: ProtocolVersion = ProtocolVersion::known(14, "1.3.1-1.3.2", &["1.3.1", "1.3.2"]);
pub const V1_4_2: ProtocolVersion = ProtocolVersion::known(15, "1.4.2", &[]);
pub const V1_4_4: ProtocolVersion = ProtocolVersion::known(16, "1.4.4-1.4.5", &["1.4.4", "1.4.5"]);
pub const V1_4_6: ProtocolVersion = ProtocolVersion::known(17, "1.4.6-1.4.7", &["1.4.6", "1.4.7"]);
pub const V1_5_1: ProtocolVersion = ProtocolVersion::known(18, "1.5-1.5.1", &["1.5", "1.5.1"]);
pub const V1_5_2: ProtocolVersion = ProtocolVersion::known(19, "1.5.2", &[]);
pub const V1_6_1: ProtocolVersion = ProtocolVersion::known(20, "1.6.1", &[]);
pub const V1_6_2: ProtocolVersion = ProtocolVersion::known(21, "1.6.2", &[]);
pub const V1_6_4: ProtocolVersion = ProtocolVersion::known(22, "1.6.4", &[]);
pub const V1_7_2: ProtocolVersion =
    ProtocolVersion::known(23, "1.7.2-1.7.5", &["1.7.2", "1.7.3", "1.7.4", "1.7.5"]);
pub const V1_7_6: ProtocolVersion = ProtocolVersion::known(
    24,
    "1.7.6-1.7.10",
    &["1.7.6", "1.7.7", "1.7.8", "1.7.9", "1.7.10"],
);
/// Last generation where swords could be "eaten" for the blocking animation
pub const V1_8: ProtocolVersion = ProtocolVersion::known(
    25,
    "1.8.x",
    &["1.8", "1.8.1", "1.8.2", "1.8.3", "1.8.4", "1.8.5", "1.8.6", "1.8.7", "1.8.8", "1.8.9"],
);
pub const V1_9: ProtocolVersion = ProtocolVersion::known(26, "1.9", &[]);
pub const V1_9_1: ProtocolVersion = ProtocolVersion::known(27, "1.9.1", &[]);
pub const V1_9_2: ProtocolVersion = ProtocolVersion::known(28, "1.9.2", &[]);
pub const V1_9_3: ProtocolVersion = ProtocolVersion::known(29, "1.9.3-1.9.4", &["1.9.3", "1.9.4"]);
pub const V1_10: ProtocolVersion = ProtocolVersion::known(30, "1.10.x", &["1.10", "1.10.1", "1.10.2"]);
pub const V1_11: ProtocolVersion = ProtocolVersion::known(31, "1.11", &[]);
pub const V1_11_1: ProtocolVersion = ProtocolVersion::known(32, "1.11.1-1.11.2", &["1.11.1", "1.11.2"]);
pub const V1_12: ProtocolVersion = ProtocolVersion::known(33, "1.12", &[]);
pub const V1_12_1: ProtocolVersion = ProtocolVersion::known(34, "1.12.1", &[]);
pub const V1_12_2: ProtocolVersion = ProtocolVersion::known(35, "1.12.2", &[]);
pub const V1_13: ProtocolVersion = ProtocolVersion::known(36, "1.13", &[]);
pub const V1_13_1: ProtocolVersion = ProtocolVersion::known(37, "1.13.1", &[]);
pub const V1_13_2: ProtocolVersion = ProtocolVersion::known(38, "1.13.2", &[]);
pub const V1_14: ProtocolVersion = ProtocolVersion::known(39, "1.14", &[]);
pub const V1_14_1: ProtocolVersion = ProtocolVersion::known(40, "1.14.1", &[]);
pub const V1_14_2: ProtocolVersion = ProtocolVersion::known(41, "1.14.2", &[]);
pub const V1_14_3: ProtocolVersion = ProtocolVersion::known(42, "1.14.3", &[]);
pub const V1_14_4: ProtocolVersion = ProtocolVersion::known(43, "1.14.4", &[]);
pub const V1_15: ProtocolVersion = ProtocolVersion::known(44, "1.15", &[]);
pub const V1_15_1: ProtocolVersion = ProtocolVersion::known(45, "1.15.1", &[]);
pub const V1_15_2: ProtocolVersion = ProtocolVersion::known(46, "1.15.2", &[]);
pub const V1_16: ProtocolVersion = ProtocolVersion::known(47, "1.16", &[]);
pub const V1_16_1: ProtocolVersion = ProtocolVersion::known(48, "1.16.1", &[]);
pub const V1_16_2: ProtocolVersion = ProtocolVersion::known(49, "1.16.2", &[]);
pub const V1_16_3: ProtocolVersion = ProtocolVersion::known(50, "1.16.3", &[]);
pub const V1_16_4: ProtocolVersion = ProtocolVersion::known(51, "1.16.4-1.16.5", &["1.16.4", "1.16.5"]);
pub const V1_17: ProtocolVersion = ProtocolVersion::known(52, "1.17", &[]);
/// Last generation without enchantment-driven crossbow durability
pub const V1_17_1: ProtocolVersion = ProtocolVersion::known(53, "1.17.1", &[]);
pub const V1_18: ProtocolVersion = ProtocolVersion::known(54, "1.18-1.18.1", &["1.18", "1.18.1"]);
pub const V1_18_2: ProtocolVersion = ProtocolVersion::known(55, "1.18.2", &[]);
pub const V1_19: ProtocolVersion = ProtocolVersion::known(56, "1.19", &[]);
pub const V1_19_1: ProtocolVersion = ProtocolVersion::known(57, "1.19.1-1.19.2", &["1.19.1", "1.19.2"]);
pub const V1_19_3: ProtocolVersion = ProtocolVersion::known(58, "1.19.3", &[]);
pub const V1_19_4: ProtocolVersion = ProtocolVersion::known(59, "1.19.4", &[]);
/// Clients at or below this generation tolerate malformed brand payloads
pub const V1_20: ProtocolVersion = ProtocolVersion::known(60, "1.20-1.20.1", &["1.20", "1.20.1"]);
pub const V1_20_2: ProtocolVersion = ProtocolVersion::known(61, "1.20.2", &[]);
pub const V1_20_3: ProtocolVersion = ProtocolVersion::known(62, "1.20.3-1.20.4", &["1.20.3", "1.20.4"]);
pub const V1_20_5: ProtocolVersion = ProtocolVersion::known(63, "1.20.5-1.20.6", &["1.20.5", "1.20.6"]);

/// Every catalogued version in ascending order; `STANDARD[v.ordinal()] == v`
pub const STANDARD: &[ProtocolVersion] = &[
    A1_0_15, A1_2_6, B1_1_01, B1_2_02, B1_3_01, B1_4_01, B1_5_02, B1_6_6, B1_7_3, B1_8_1, V1_0,
    V1_1, V1_2_1, V1_2_4, V1_3_1, V1_4_2, V1_4_4, V1_4_6, V1_5_1, V1_5_2, V1_6_1, V1_6_2, V1_6_4,
    V1_7_2, V1_7_6, V1_8, V1_9, V1_9_1, V1_9_2, V1_9_3, V1_10, V1_11, V1_11_1, V1_12, V1_12_1,
    V1_12_2, V1_13, V1_13_1, V1_13_2, V1_14, V1_14_1, V1_14_2, V1_14_3, V1_14_4, V1_15, V1_15_1,
    V1_15_2, V1_16, V1_16_1, V1_16_2, V1_16_3, V1_16_4, V1_17, V1_17_1, V1_18, V1_18_2, V1_19,
    V1_19_1, V1_19_3, V1_19_4, V1_20, V1_20_2, V1_20_3, V1_20_5,
];
