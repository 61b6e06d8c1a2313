use crate::constants::{DEFAULT_PREFIX_LEN, IPV4_BITS, MAX_PREFIX_DIGITS, PREFIX_DELIMITER};
use crate::error::ValidationError;
use crate::ipv4_utils::{self, AddressRange};
use crate::parse_ipv4::{Ipv4Address, parse_address};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// ベースアドレスとプレフィックス長の組。
/// ベースアドレスのホスト部は0でなくてもよい (10.10.0.1/16 も有効)。
/// ホスト部のマスクは範囲計算時にのみ行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    base: Ipv4Address,
    prefix_len: u8,
}

impl CidrBlock {
    /// prefix_len が 0-32 の範囲外なら InvalidPrefixLength
    pub fn new(base: Ipv4Address, prefix_len: u8) -> Result<Self, ValidationError> {
        if prefix_len > IPV4_BITS {
            return Err(ValidationError::InvalidPrefixLength(prefix_len.to_string()));
        }
        Ok(CidrBlock { base, prefix_len })
    }

    pub fn base(&self) -> Ipv4Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn range(&self) -> AddressRange {
        ipv4_utils::range_of(self)
    }

    /// ホスト部を0にしたネットワークアドレス
    pub fn network(&self) -> Ipv4Address {
        self.range().low()
    }

    pub fn netmask(&self) -> Ipv4Address {
        Ipv4Address::new(ipv4_utils::netmask(self))
    }

    pub fn contains(&self, candidate: Ipv4Address) -> bool {
        self.range().contains(candidate)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base, PREFIX_DELIMITER, self.prefix_len)
    }
}

impl FromStr for CidrBlock {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cidr(s)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// "a.b.c.d" または "a.b.c.d/n" 形式のCIDRを解析する。
/// スラッシュを省略した場合は /32 とみなす。
pub fn parse_cidr(text: &str) -> Result<CidrBlock, ValidationError> {
    let mut parts = text.split(PREFIX_DELIMITER);
    let address_part = parts.next().unwrap_or_default();
    let prefix_part = parts.next();

    // スラッシュが2つ以上
    if parts.next().is_some() {
        return Err(ValidationError::InvalidCidrFormat(text.to_string()));
    }
    if address_part.is_empty() {
        return Err(ValidationError::InvalidCidrFormat(text.to_string()));
    }

    let base = parse_address(address_part)?;
    let prefix_len = match prefix_part {
        Some(p) => parse_prefix_len(p)?,
        None => DEFAULT_PREFIX_LEN,
    };

    CidrBlock::new(base, prefix_len)
}

/// プレフィックス長の文字列を0-32の数値に変換する。
/// 空文字、数字以外、3桁以上、冗長な先頭ゼロ ("08" など) は不正。
pub fn parse_prefix_len(text: &str) -> Result<u8, ValidationError> {
    let invalid = || ValidationError::InvalidPrefixLength(text.to_string());

    if text.is_empty() || text.len() > MAX_PREFIX_DIGITS {
        return Err(invalid());
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if text.len() > 1 && text.starts_with('0') {
        return Err(invalid());
    }

    let n: u8 = text.parse().map_err(|_| invalid())?;
    if n > IPV4_BITS {
        return Err(invalid());
    }
    Ok(n)
}
