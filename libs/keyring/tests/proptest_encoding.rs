//! Property-based tests for bech32 encoding and signing using proptest
//!
//! These tests verify that:
//! 1. Decoding never panics on any input (crash safety)
//! 2. Encode/decode roundtrips for arbitrary payloads and prefixes
//! 3. Single-character corruption never goes undetected
//! 4. Sign-then-verify holds for arbitrary digests and fails across digests

use proptest::prelude::*;
use spacekey_keyring::bech32;
use spacekey_keyring::{sign, verify, Bech32Prefixes, SecretKey};

const SK_HEX: &str = "44da02ea3d3829415ff1175467c5f1cf9e3b4b90ef740758e2d9bccbb2520b1971492d9da0d7c2f82bc28b18ee17a34a58656963e022cf1d43143ca788f81510";

const CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

// ============================================================================
// Bech32 - Crash Safety
// ============================================================================

proptest! {
    /// Decoding arbitrary strings must return Ok or Err, never panic
    #[test]
    fn decode_never_panics(s in "\\PC{0,128}") {
        let _ = bech32::decode(&s);
    }

    /// Decoding arbitrary ASCII must never panic either
    #[test]
    fn decode_ascii_never_panics(s in "[ -~]{0,128}") {
        let _ = bech32::decode(&s);
    }
}

// ============================================================================
// Bech32 - Roundtrip and Corruption Detection
// ============================================================================

proptest! {
    /// decode(encode(hrp, payload)) recovers the exact inputs
    #[test]
    fn roundtrip_arbitrary_payloads(
        payload in prop::collection::vec(any::<u8>(), 0..64),
        hrp in prop::sample::select(vec!["space", "spacevalconspub", "n", "cosmos"]),
    ) {
        let encoded = bech32::encode(hrp, &payload).unwrap();
        let (decoded_hrp, decoded) = bech32::decode(&encoded).unwrap();
        prop_assert_eq!(decoded_hrp, hrp);
        prop_assert_eq!(decoded, payload);
    }

    /// Substituting any data-part character for another alphabet character
    /// must make decoding fail
    #[test]
    fn single_substitution_detected(
        payload in prop::collection::vec(any::<u8>(), 1..33),
        pos_seed in any::<usize>(),
        replacement in prop::sample::select(CHARSET.to_vec()),
    ) {
        let encoded = bech32::encode("space", &payload).unwrap();
        let sep = encoded.rfind('1').unwrap();
        let mut bytes = encoded.into_bytes();
        let pos = sep + 1 + pos_seed % (bytes.len() - sep - 1);
        prop_assume!(bytes[pos] != replacement);

        bytes[pos] = replacement;
        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert!(bech32::decode(&corrupted).is_err());
    }

    /// All six role encodings of the same payload decode back to it
    #[test]
    fn role_encodings_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        let prefixes = Bech32Prefixes::with_base("space");
        for (role, encoded) in prefixes.encode_all(&payload).unwrap() {
            let decoded = prefixes.decode_expecting(role, &encoded).unwrap();
            prop_assert_eq!(decoded, payload.clone());
        }
    }
}

// ============================================================================
// Signature Proof
// ============================================================================

proptest! {
    /// A signature verifies against the digest it was produced over, and
    /// against no other digest
    #[test]
    fn sign_verify_arbitrary_digests(h in prop::array::uniform32(any::<u8>())) {
        let sk = SecretKey::from_hex(SK_HEX).unwrap();
        let pk = sk.public_key();

        let sig = sign(&sk, &h);
        prop_assert!(verify(&pk, &h, &sig));

        let mut other = h;
        other[0] ^= 0x01;
        prop_assert!(!verify(&pk, &other, &sig));
    }
}
