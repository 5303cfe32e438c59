//! Core types shared by every key-management component
//!
//! [`Selection`] names the key parts an operation acts on, and [`KeyType`]
//! is the key-type class that decides whether a classical sub-key exists.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

/// Set of key parts an operation should act on
///
/// Bit values follow the host framework's selection flags so that masks
/// received from the framework can be used directly via [`Selection::from_bits`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection(u8);

impl Selection {
    /// The private half of a key pair
    pub const PRIVATE_KEY: Self = Self(0x01);
    /// The public half of a key pair
    pub const PUBLIC_KEY: Self = Self(0x02);
    /// Algorithm-level domain parameters
    pub const DOMAIN_PARAMETERS: Self = Self(0x04);
    /// Any other parameters
    pub const OTHER_PARAMETERS: Self = Self(0x80);

    /// Both halves of a key pair
    pub const KEYPAIR: Self = Self(0x01 | 0x02);
    /// Domain and other parameters
    pub const ALL_PARAMETERS: Self = Self(0x04 | 0x80);
    /// Everything
    pub const ALL: Self = Self(0x01 | 0x02 | 0x04 | 0x80);

    /// The empty selection
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a selection from raw framework bits; unknown bits are dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bit value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every bit of `other` is set in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set in `self`
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if no bit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Selection {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Selection {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Selection {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Selection, &str); 4] = [
            (Selection::PRIVATE_KEY, "PRIVATE_KEY"),
            (Selection::PUBLIC_KEY, "PUBLIC_KEY"),
            (Selection::DOMAIN_PARAMETERS, "DOMAIN_PARAMETERS"),
            (Selection::OTHER_PARAMETERS, "OTHER_PARAMETERS"),
        ];

        if self.is_empty() {
            return write!(f, "Selection(empty)");
        }
        write!(f, "Selection(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        write!(f, ")")
    }
}

/// Key-type class of an algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Pure post-quantum signature key
    Sig,
    /// Pure post-quantum KEM key
    Kem,
    /// Post-quantum KEM paired with a NIST prime-curve key
    EcpHybridKem,
    /// Post-quantum KEM paired with a Montgomery-curve key
    EcxHybridKem,
}

impl KeyType {
    /// True for the classes that carry a classical sub-key
    pub const fn is_hybrid(self) -> bool {
        matches!(self, Self::EcpHybridKem | Self::EcxHybridKem)
    }

    /// True for the KEM classes, hybrid or not
    pub const fn is_kem(self) -> bool {
        !matches!(self, Self::Sig)
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sig => "signature",
            Self::Kem => "kem",
            Self::EcpHybridKem => "ecp-hybrid-kem",
            Self::EcxHybridKem => "ecx-hybrid-kem",
        };
        f.write_str(name)
    }
}
