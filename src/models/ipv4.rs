//! IPv4 network values in CIDR notation.
//!
//! Provides the [`Ipv4`] block type used by the merger, along with the bit
//! helpers it is built on. Every [`Ipv4`] is aligned: its address is always the
//! network address of the block.

use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Shape of a CIDR string: dotted quad, slash, one or two digit prefix length.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3}(?:\.\d{1,3}){3})/(\d{1,2})$").expect("Invalid Regex")
    })
}

/// Error returned when a CIDR string cannot be turned into an [`Ipv4`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrParseError {
    #[error("invalid CIDR format: '{0}' (expected a.b.c.d/n)")]
    Syntax(String),

    #[error("invalid IPv4 address in '{0}'")]
    Address(String),

    #[error("prefix length out of range 0-32 in '{0}'")]
    PrefixLength(String),
}

impl CidrParseError {
    /// The offending input, as it was given to the parser.
    pub fn input(&self) -> &str {
        match self {
            CidrParseError::Syntax(s)
            | CidrParseError::Address(s)
            | CidrParseError::PrefixLength(s) => s,
        }
    }
}

/// Convert a prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are clamped to a full mask.
///
/// # Examples
/// ```
/// use aws_cidr_merge::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Network address of `addr` for the given prefix length.
pub fn cut_addr(addr: u32, len: u8) -> u32 {
    addr & get_cidr_mask(len)
}

/// Last (broadcast) address of the block holding `addr` at the given prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> u32 {
    let mask = get_cidr_mask(len);
    (addr & mask) | !mask
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << MAX_LENGTH.saturating_sub(len)
}

/// Smallest prefix length for which `addr` is a valid network address.
///
/// `0.0.0.0` is aligned to every length and returns 0.
pub fn lo_mask(addr: u32) -> u8 {
    let trailing_zeros = addr.trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// One IPv4 CIDR block.
///
/// Ordered by `(address, prefix length)`, so a wider block sorts before the
/// narrower blocks that share its first address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// `0.0.0.0/0`, the block covering every address.
    pub const ALL: Ipv4 = Ipv4 {
        addr: Ipv4Addr::UNSPECIFIED,
        mask: 0,
    };

    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// Surrounding whitespace is ignored. Host bits are cleared, so
    /// "10.0.0.5/24" yields `10.0.0.0/24`.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CidrParseError> {
        let trimmed = addr_cidr.trim();
        let caps = get_cidr_regex()
            .captures(trimmed)
            .ok_or_else(|| CidrParseError::Syntax(addr_cidr.to_string()))?;

        let addr: Ipv4Addr = caps[1]
            .parse()
            .map_err(|_| CidrParseError::Address(addr_cidr.to_string()))?;
        let mask: u8 = caps[2]
            .parse()
            .map_err(|_| CidrParseError::PrefixLength(addr_cidr.to_string()))?;

        Ipv4::from_parts(addr, mask)
            .map_err(|_| CidrParseError::PrefixLength(addr_cidr.to_string()))
    }

    /// Build a block from an address and prefix length, clearing host bits.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, CidrParseError> {
        if mask > MAX_LENGTH {
            return Err(CidrParseError::PrefixLength(format!("{addr}/{mask}")));
        }
        Ok(Ipv4::from_bits(u32::from(addr), mask))
    }

    /// Caller guarantees `mask <= MAX_LENGTH`.
    pub(crate) fn from_bits(addr: u32, mask: u8) -> Ipv4 {
        debug_assert!(mask <= MAX_LENGTH, "mask[{mask}] > 32 should never happen.");
        Ipv4 {
            addr: Ipv4Addr::from(cut_addr(addr, mask)),
            mask,
        }
    }

    /// Network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Number of addresses covered.
    pub fn block_size(&self) -> u64 {
        block_size(self.mask)
    }

    /// First address of the block.
    pub fn lo(&self) -> u32 {
        u32::from(self.addr)
    }

    /// Last (broadcast) address of the block.
    pub fn hi(&self) -> u32 {
        broadcast_addr(self.lo(), self.mask)
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        let ip = u32::from(ip);
        ip >= self.lo() && ip <= self.hi()
    }

    /// True if `other` lies entirely within this block, equality included.
    pub fn supernet_of(&self, other: &Ipv4) -> bool {
        self.mask <= other.mask && other.lo() >= self.lo() && other.hi() <= self.hi()
    }

    /// True if the two blocks share at least one address.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }

    /// True if `next` starts on the address right after this block ends.
    pub fn is_followed_by(&self, next: &Ipv4) -> bool {
        self.hi() as u64 + 1 == next.lo() as u64
    }

    /// The block one prefix length wider, when this block is its lower half.
    ///
    /// Returns `None` for `0.0.0.0/0` and for upper halves, which can only be
    /// combined downwards with their lower sibling.
    pub fn parent_if_lower_half(&self) -> Option<Ipv4> {
        if self.mask == 0 {
            return None;
        }
        let parent_mask = self.mask - 1;
        if lo_mask(self.lo()) > parent_mask {
            return None;
        }
        Some(Ipv4::from_bits(self.lo(), parent_mask))
    }
}

impl FromStr for Ipv4 {
    type Err = CidrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
