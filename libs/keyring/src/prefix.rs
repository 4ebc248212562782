//! Configurable bech32 prefixes for the six address roles
//!
//! A chain renders the same raw bytes under different human-readable
//! prefixes depending on what the value is: an account address, a validator
//! operator key, a consensus node key. The prefix changes nothing about the
//! payload; it only tells a human reader the role.
//!
//! Prefixes are an explicit configuration value passed to the encoding
//! calls. There is no process-wide prefix state.

use crate::bech32::{self, Bech32Error};
use log::debug;

/// Logical role a bech32-encoded value plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Account address
    AccountAddress,
    /// Account public key
    AccountPublicKey,
    /// Validator operator address
    ValidatorAddress,
    /// Validator operator public key
    ValidatorPublicKey,
    /// Consensus node address
    ConsensusAddress,
    /// Consensus node public key
    ConsensusPublicKey,
}

impl Role {
    /// All six roles, in display order
    #[must_use]
    pub fn all() -> [Self; 6] {
        [
            Self::AccountAddress,
            Self::AccountPublicKey,
            Self::ValidatorAddress,
            Self::ValidatorPublicKey,
            Self::ConsensusAddress,
            Self::ConsensusPublicKey,
        ]
    }

    /// Human-readable label for display output
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AccountAddress => "account address",
            Self::AccountPublicKey => "account public key",
            Self::ValidatorAddress => "validator address",
            Self::ValidatorPublicKey => "validator public key",
            Self::ConsensusAddress => "consensus address",
            Self::ConsensusPublicKey => "consensus public key",
        }
    }
}

/// The six human-readable prefixes used to render addresses and public keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Prefixes {
    /// Prefix for account addresses
    pub account_address: String,
    /// Prefix for account public keys
    pub account_public_key: String,
    /// Prefix for validator operator addresses
    pub validator_address: String,
    /// Prefix for validator operator public keys
    pub validator_public_key: String,
    /// Prefix for consensus node addresses
    pub consensus_address: String,
    /// Prefix for consensus node public keys
    pub consensus_public_key: String,
}

impl Bech32Prefixes {
    /// Derive the conventional six prefixes from a bare chain prefix
    ///
    /// `"space"` yields `space`, `spacepub`, `spacevaloper`,
    /// `spacevaloperpub`, `spacevalcons`, `spacevalconspub`.
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        Self {
            account_address: base.to_string(),
            account_public_key: format!("{base}pub"),
            validator_address: format!("{base}valoper"),
            validator_public_key: format!("{base}valoperpub"),
            consensus_address: format!("{base}valcons"),
            consensus_public_key: format!("{base}valconspub"),
        }
    }

    /// The prefix configured for `role`
    #[must_use]
    pub fn prefix(&self, role: Role) -> &str {
        match role {
            Role::AccountAddress => &self.account_address,
            Role::AccountPublicKey => &self.account_public_key,
            Role::ValidatorAddress => &self.validator_address,
            Role::ValidatorPublicKey => &self.validator_public_key,
            Role::ConsensusAddress => &self.consensus_address,
            Role::ConsensusPublicKey => &self.consensus_public_key,
        }
    }

    /// Encode `payload` under the prefix configured for `role`
    pub fn encode(&self, role: Role, payload: &[u8]) -> Result<String, Bech32Error> {
        bech32::encode(self.prefix(role), payload)
    }

    /// Encode `payload` under all six role prefixes
    ///
    /// Returns one `(role, encoded)` pair per role, in display order. The
    /// payload bytes are identical across all six; only the prefix differs.
    pub fn encode_all(&self, payload: &[u8]) -> Result<Vec<(Role, String)>, Bech32Error> {
        Role::all()
            .into_iter()
            .map(|role| Ok((role, self.encode(role, payload)?)))
            .collect()
    }

    /// Decode `s`, requiring the prefix configured for `role`
    pub fn decode_expecting(&self, role: Role, s: &str) -> Result<Vec<u8>, Bech32Error> {
        let (hrp, payload) = bech32::decode(s)?;
        let expected = self.prefix(role);
        if hrp != expected {
            return Err(Bech32Error::WrongPrefix {
                expected: expected.to_string(),
                found: hrp,
            });
        }
        debug!("decoded {} payload bytes under prefix {expected}", payload.len());
        Ok(payload)
    }
}
