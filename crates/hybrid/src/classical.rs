//! Classical elliptic-curve half of a hybrid key

use core::fmt;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use pqkm_api::error::{validate, Error, Result};
use rand::rngs::OsRng;
use zeroize::{Zeroize, Zeroizing};

/// Classical curve paired with the post-quantum half of a hybrid key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassicalCurve {
    /// NIST P-256, SEC1 uncompressed public point
    P256,
    /// X25519 (RFC 7748)
    X25519,
}

impl ClassicalCurve {
    /// Encoded public-key length
    pub const fn public_key_len(self) -> usize {
        match self {
            Self::P256 => 65,
            Self::X25519 => 32,
        }
    }

    /// Encoded private-key length
    pub const fn secret_key_len(self) -> usize {
        match self {
            Self::P256 => 32,
            Self::X25519 => 32,
        }
    }

    /// Curve name as used in hybrid algorithm names
    pub const fn name(self) -> &'static str {
        match self {
            Self::P256 => "p256",
            Self::X25519 => "x25519",
        }
    }
}

impl fmt::Display for ClassicalCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
enum ClassicalSecret {
    P256(p256::SecretKey),
    X25519(x25519_dalek::StaticSecret),
}

/// Owning handle to a classical key: the public point and optionally its scalar
///
/// Both secret variants zeroize themselves on drop.
#[derive(Clone)]
pub struct ClassicalKey {
    curve: ClassicalCurve,
    public: Vec<u8>,
    secret: Option<ClassicalSecret>,
}

impl ClassicalKey {
    /// Draw a fresh key pair from the OS CSPRNG
    pub fn generate(curve: ClassicalCurve) -> Result<Self> {
        let secret = match curve {
            ClassicalCurve::P256 => ClassicalSecret::P256(p256::SecretKey::random(&mut OsRng)),
            ClassicalCurve::X25519 => {
                ClassicalSecret::X25519(x25519_dalek::StaticSecret::random_from_rng(OsRng))
            }
        };
        Ok(Self::with_secret(curve, secret))
    }

    /// Rebuild a public-only handle from an encoded public key
    pub fn from_public(curve: ClassicalCurve, bytes: &[u8]) -> Result<Self> {
        validate::length("classical public key", bytes.len(), curve.public_key_len())?;

        if curve == ClassicalCurve::P256 {
            p256::PublicKey::from_sec1_bytes(bytes).map_err(|_| {
                Error::invalid_input("classical public key", "not a valid P-256 point")
            })?;
        }

        Ok(Self {
            curve,
            public: bytes.to_vec(),
            secret: None,
        })
    }

    /// Rebuild a full handle from an encoded private key, deriving the public key
    pub fn from_secret(curve: ClassicalCurve, bytes: &[u8]) -> Result<Self> {
        validate::length("classical private key", bytes.len(), curve.secret_key_len())?;

        let secret = match curve {
            ClassicalCurve::P256 => {
                let scalar = p256::SecretKey::from_slice(bytes).map_err(|_| {
                    Error::invalid_input("classical private key", "not a valid P-256 scalar")
                })?;
                ClassicalSecret::P256(scalar)
            }
            ClassicalCurve::X25519 => {
                let mut raw = Zeroizing::new([0u8; 32]);
                raw.copy_from_slice(bytes);
                ClassicalSecret::X25519(x25519_dalek::StaticSecret::from(*raw))
            }
        };
        Ok(Self::with_secret(curve, secret))
    }

    fn with_secret(curve: ClassicalCurve, secret: ClassicalSecret) -> Self {
        let public = match &secret {
            ClassicalSecret::P256(sk) => sk.public_key().to_encoded_point(false).as_bytes().to_vec(),
            ClassicalSecret::X25519(sk) => x25519_dalek::PublicKey::from(sk).as_bytes().to_vec(),
        };
        Self {
            curve,
            public,
            secret: Some(secret),
        }
    }

    /// Curve of this key
    pub fn curve(&self) -> ClassicalCurve {
        self.curve
    }

    /// Encoded public key
    pub fn public_bytes(&self) -> &[u8] {
        &self.public
    }

    /// Whether the scalar is held
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Encoded private key, if held
    pub fn secret_bytes(&self) -> Option<Zeroizing<Vec<u8>>> {
        self.secret.as_ref().map(|secret| match secret {
            ClassicalSecret::P256(sk) => {
                let mut bytes = sk.to_bytes();
                let out = Zeroizing::new(bytes.to_vec());
                bytes.as_mut_slice().zeroize();
                out
            }
            ClassicalSecret::X25519(sk) => {
                let bytes = Zeroizing::new(sk.to_bytes());
                Zeroizing::new(bytes.to_vec())
            }
        })
    }

    /// Drop the scalar, keeping the public point
    pub fn forget_secret(&mut self) {
        self.secret = None;
    }
}

impl fmt::Debug for ClassicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassicalKey")
            .field("curve", &self.curve)
            .field("public_len", &self.public.len())
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
