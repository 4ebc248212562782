//! Loaded keypair with cached derivations

use crate::ed25519::{self, Address, PublicKey, SecretKey, Signature};
use log::debug;

/// A secret key together with its derived public key and address
///
/// Derivation happens once at construction; repeated address lookups and
/// signing calls reuse the cached values.
#[derive(Clone)]
pub struct Keypair {
    secret_key: SecretKey,
    public_key: PublicKey,
    address: Address,
}

impl Keypair {
    /// Create a keypair from a secret key
    #[must_use]
    pub fn new(secret_key: SecretKey) -> Self {
        let public_key = secret_key.public_key();
        let address = public_key.address();

        Self {
            secret_key,
            public_key,
            address,
        }
    }

    /// Create a keypair from a hex-encoded secret key
    pub fn from_hex(sk_hex: &str) -> ed25519::Result<Self> {
        let secret_key = SecretKey::from_hex(sk_hex)?;
        let keypair = Self::new(secret_key);
        debug!("loaded keypair for address {}", keypair.address.to_hex());
        Ok(keypair)
    }

    /// Get the secret key
    #[must_use]
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Get the public key
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the address
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Sign a 32-byte digest with the secret key
    #[must_use]
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Signature {
        ed25519::sign(&self.secret_key, digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ed25519::{digest, verify, KeyError};

    const SK_HEX: &str = "44da02ea3d3829415ff1175467c5f1cf9e3b4b90ef740758e2d9bccbb2520b1971492d9da0d7c2f82bc28b18ee17a34a58656963e022cf1d43143ca788f81510";

    #[test]
    fn test_cached_derivations_match() {
        let keypair = Keypair::from_hex(SK_HEX).unwrap();
        assert_eq!(*keypair.public_key(), keypair.secret_key().public_key());
        assert_eq!(*keypair.address(), keypair.public_key().address());
    }

    #[test]
    fn test_sign_digest() {
        let keypair = Keypair::from_hex(SK_HEX).unwrap();
        let h = digest(b"needsignmessage");
        let sig = keypair.sign_digest(&h);
        assert!(verify(keypair.public_key(), &h, &sig));
    }

    #[test]
    fn test_from_hex_rejects_short_key() {
        let result = Keypair::from_hex("44da02ea");
        assert!(matches!(result, Err(KeyError::InvalidKeyLength { .. })));
    }

    #[test]
    fn test_from_hex_rejects_bad_hex() {
        let result = Keypair::from_hex("not hex at all");
        assert!(matches!(result, Err(KeyError::InvalidHex(_))));
    }
}
