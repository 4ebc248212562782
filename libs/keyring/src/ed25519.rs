//! Ed25519 cryptographic primitives for space chain keys
//!
//! Implements the consensus-key conventions of the space chain: a 64-byte
//! secret key in seed-then-public form, a 32-byte public key, and a 20-byte
//! account address computed as the truncated SHA-256 of the public key.
//!
//! ## Secret key layout
//!
//! Node key files store the secret key as 64 bytes: the 32-byte RFC 8032
//! seed followed by the 32-byte public key. Only the seed half determines
//! the key; the public half is recomputed from the seed on load, so a
//! stored pair whose halves disagree is canonicalized rather than producing
//! signatures that never verify.

use ed25519_dalek::{Signer, Verifier};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Key and signature errors
#[derive(Error, Debug)]
pub enum KeyError {
    /// Invalid key length error
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Wrong byte length for a signature
    #[error("Invalid signature encoding: expected {expected} bytes, got {actual}")]
    InvalidEncoding {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// Hex decoding error
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;

/// Ed25519 secret key (64 bytes, seed followed by public key)
#[derive(Clone)]
pub struct SecretKey {
    sk: ed25519_dalek::SigningKey,
}

impl SecretKey {
    /// Size of the stored secret key in bytes (seed + public half)
    pub const SIZE: usize = ed25519_dalek::KEYPAIR_LENGTH;

    /// Create a secret key from 64 bytes
    ///
    /// The first 32 bytes are the RFC 8032 seed; the trailing 32 bytes are
    /// ignored and recomputed (see module docs).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(KeyError::InvalidKeyLength {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut seed = [0u8; ed25519_dalek::SECRET_KEY_LENGTH];
        seed.copy_from_slice(&bytes[..ed25519_dalek::SECRET_KEY_LENGTH]);
        Ok(Self {
            sk: ed25519_dalek::SigningKey::from_bytes(&seed),
        })
    }

    /// Decode a secret key from its 128-character hex form
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Convert to the stored 64-byte form (seed followed by public key)
    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.sk.to_keypair_bytes()
    }

    /// Hex form of the stored 64-byte key
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the public key
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            bytes: self.sk.verifying_key().to_bytes(),
        }
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Ed25519 public key (32 bytes)
///
/// Holds raw bytes; curve-point validity is only checked at verification
/// time, where an undecodable key verifies nothing rather than erroring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PublicKey {
    bytes: [u8; Self::SIZE],
}

impl PublicKey {
    /// Size of public key in bytes
    pub const SIZE: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

    /// Create from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(KeyError::InvalidKeyLength {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut out = [0u8; Self::SIZE];
        out.copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Decode from hex
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Convert to bytes
    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.bytes
    }

    /// Hex form
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Compute the account address (truncated SHA-256)
    #[must_use]
    pub fn address(&self) -> Address {
        Address::hash_bytes(&self.bytes)
    }
}

/// Account address (20 bytes, truncated SHA-256 of the public key)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Address {
    bytes: [u8; Self::SIZE],
}

impl Address {
    /// Size of an address in bytes
    pub const SIZE: usize = 20;

    /// Hash bytes into an address: `SHA-256(data)` truncated to 20 bytes
    #[must_use]
    pub fn hash_bytes(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        let mut bytes = [0u8; Self::SIZE];
        bytes.copy_from_slice(&digest[..Self::SIZE]);
        Self { bytes }
    }

    /// Create from raw address bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(KeyError::InvalidKeyLength {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut out = [0u8; Self::SIZE];
        out.copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Raw address bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.bytes
    }

    /// Hex form
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

/// Ed25519 signature (64 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Signature {
    bytes: [u8; Self::SIZE],
}

impl Signature {
    /// Size of a signature in bytes
    pub const SIZE: usize = ed25519_dalek::SIGNATURE_LENGTH;

    /// Create from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(KeyError::InvalidEncoding {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut out = [0u8; Self::SIZE];
        out.copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Convert to bytes
    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.bytes
    }

    /// Hex form
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

/// Compute the SHA-256 digest of a message
///
/// Messages are hashed before signing; `sign` and `verify` operate on the
/// 32-byte digest, never on the raw message.
#[must_use]
pub fn digest(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// Sign a 32-byte digest
///
/// RFC 8032 signing is deterministic: the same key and digest always produce
/// the same signature.
#[must_use]
pub fn sign(sk: &SecretKey, digest: &[u8; 32]) -> Signature {
    let sig = sk.sk.sign(digest);
    Signature {
        bytes: sig.to_bytes(),
    }
}

/// Verify a signature over a 32-byte digest
///
/// Returns `true` iff `sig` was produced by the secret key matching `pk`
/// over exactly `digest`. A public key that does not decode to a curve
/// point, or a signature that does not verify, yields `false`; this
/// function never errors.
#[must_use]
pub fn verify(pk: &PublicKey, digest: &[u8; 32], sig: &Signature) -> bool {
    let Ok(vk) = ed25519_dalek::VerifyingKey::from_bytes(&pk.bytes) else {
        return false;
    };

    let sig = ed25519_dalek::Signature::from_bytes(&sig.bytes);
    vk.verify(digest, &sig).is_ok()
}
