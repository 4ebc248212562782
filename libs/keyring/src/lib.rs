//! Ed25519 key derivation, bech32 address encoding, and digest signing for
//! the space chain
//!
//! This library implements the stateless pipeline from a raw consensus key
//! to its human-readable renderings and a signature proof:
//!
//! - `ed25519` module: 64-byte secret key → 32-byte public key → 20-byte
//!   address (truncated SHA-256), plus deterministic digest signing and
//!   binary verification
//! - `bech32` module: checksummed text encoding of arbitrary byte payloads
//!   under a human-readable prefix
//! - `prefix` module: the six role prefixes a chain renders the same bytes
//!   under, as an explicit configuration value
//!
//! Every operation is pure and synchronous; inputs and outputs are immutable
//! value types, so all functions may be called concurrently without
//! synchronization.
//!
//! # Example Usage
//!
//! ```rust
//! use spacekey_keyring::{digest, sign, verify, Bech32Prefixes, Role, SecretKey};
//!
//! let sk = SecretKey::from_hex(
//!     "44da02ea3d3829415ff1175467c5f1cf9e3b4b90ef740758e2d9bccbb2520b19\
//!      71492d9da0d7c2f82bc28b18ee17a34a58656963e022cf1d43143ca788f81510",
//! )?;
//! let pk = sk.public_key();
//!
//! // Render the address under the account prefix
//! let prefixes = Bech32Prefixes::with_base("space");
//! let address = prefixes.encode(Role::AccountAddress, pk.address().as_bytes())?;
//! assert!(address.starts_with("space1"));
//!
//! // Sign the digest of a message and verify it
//! let h = digest(b"needsignmessage");
//! let sig = sign(&sk, &h);
//! assert!(verify(&pk, &h, &sig));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod bech32;
pub mod ed25519;
pub mod keypair;
pub mod prefix;

// Re-export commonly used types
pub use bech32::Bech32Error;
pub use ed25519::{digest, sign, verify, Address, KeyError, PublicKey, SecretKey, Signature};
pub use keypair::Keypair;
pub use prefix::{Bech32Prefixes, Role};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
