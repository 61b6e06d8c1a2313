use crate::constants::{ADDRESS_DELIMITER, MAX_OCTET_DIGITS, OCTET_COUNT};
use crate::error::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// 32ビット整数で表現したIPv4アドレス。
/// o0.o1.o2.o3 は o0*256^3 + o1*256^2 + o2*256 + o3 に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    pub const fn new(value: u32) -> Self {
        Ipv4Address(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// 上位から順に4つのオクテットを返す
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Ipv4Address(value)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(u32::from(addr))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl FromStr for Ipv4Address {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_address(s)
    }
}

// JSON出力ではドット区切りの文字列として扱う
impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// ドット区切り10進表記のIPv4アドレスを検証し、32ビット整数に変換する。
/// 名前解決は一切行わない。
pub fn parse_address(text: &str) -> Result<Ipv4Address, ValidationError> {
    let invalid = || ValidationError::InvalidAddressFormat(text.to_string());

    let segments: Vec<&str> = text.split(ADDRESS_DELIMITER).collect();
    if segments.len() != OCTET_COUNT {
        return Err(invalid());
    }

    let mut value: u32 = 0;
    for segment in segments {
        let octet = parse_octet(segment).ok_or_else(invalid)?;
        value = (value << 8) | u32::from(octet);
    }

    Ok(Ipv4Address(value))
}

/// 1オクテット分の文字列を0-255の数値に変換する。
/// 空文字、数字以外、4桁以上、冗長な先頭ゼロ ("010" など) は None。
fn parse_octet(segment: &str) -> Option<u8> {
    if segment.is_empty() || segment.len() > MAX_OCTET_DIGITS {
        return None;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    // 3桁以下の数字列なのでu16に必ず収まる
    let n: u16 = segment.parse().ok()?;
    u8::try_from(n).ok()
}
