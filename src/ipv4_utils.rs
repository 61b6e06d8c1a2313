use crate::constants::IPV4_BITS;
use crate::parse::CidrBlock;
use crate::parse_ipv4::Ipv4Address;
use serde::Serialize;
use std::fmt;

/// CIDRブロックが表す両端を含むアドレス範囲 [low, high]。
/// 判定のたびに計算される一時的な値。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressRange {
    low: Ipv4Address,
    high: Ipv4Address,
}

impl AddressRange {
    pub fn low(&self) -> Ipv4Address {
        self.low
    }

    pub fn high(&self) -> Ipv4Address {
        self.high
    }

    /// low <= candidate <= high を符号なし比較で判定する
    pub fn contains(&self, candidate: Ipv4Address) -> bool {
        self.low <= candidate && candidate <= self.high
    }

    /// 範囲に含まれるアドレス数。/0 では 2^32 になるため u64 で返す。
    pub fn size(&self) -> u64 {
        u64::from(self.high.value()) - u64::from(self.low.value()) + 1
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}

/// ホスト部 (下位 32 - prefix_len ビット) がすべて1のマスクを返す。
/// /0 のときは u32::MAX、/32 のときは 0。
/// プレフィックス長は CidrBlock の構築時に 0-32 へ検証済み。
pub fn host_mask(block: &CidrBlock) -> u32 {
    let host_bits = u32::from(IPV4_BITS - block.prefix_len());
    // host_bits == 32 でもシフトが溢れないよう u64 で計算する
    ((1u64 << host_bits) - 1) as u32
}

/// ネットワーク部がすべて1のマスク (例: /20 → 255.255.240.0)
pub fn netmask(block: &CidrBlock) -> u32 {
    !host_mask(block)
}

/// CIDRブロックの両端アドレスを計算する。
/// ベースアドレスのホスト部を0にしたものが low、1にしたものが high。
pub fn range_of(block: &CidrBlock) -> AddressRange {
    let base = block.base().value();
    let mask = host_mask(block);

    if mask == 0 {
        // /32 はビットを一切変更しない
        return AddressRange {
            low: block.base(),
            high: block.base(),
        };
    }

    AddressRange {
        low: Ipv4Address::new(base & !mask),
        high: Ipv4Address::new(base | mask),
    }
}

/// 範囲に候補アドレスが含まれるか
pub fn contains(range: &AddressRange, candidate: Ipv4Address) -> bool {
    range.contains(candidate)
}
