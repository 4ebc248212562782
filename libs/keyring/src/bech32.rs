//! Bech32 encoding/decoding for space chain addresses
//!
//! Classic bech32 (BCH checksum over GF(32), encoding constant 1) with no
//! overall length cap, since role prefixes like `spacevalconspub` plus a
//! 20-byte payload exceed the 90-character limit used elsewhere.

use thiserror::Error;

/// Bech32 encoding/decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    /// No `'1'` separator between prefix and data
    #[error("Missing separator '1'")]
    MissingSeparator,

    /// Empty or malformed human-readable part
    #[error("Invalid human-readable part")]
    InvalidHrp,

    /// String mixes upper- and lowercase characters
    #[error("Mixed-case string")]
    MixedCase,

    /// Data character outside the bech32 alphabet
    #[error("Invalid character {found:?} in data part")]
    InvalidCharacter {
        /// The offending character
        found: char,
    },

    /// Checksum verification failed
    #[error("Checksum mismatch")]
    ChecksumMismatch,

    /// Leftover bits after repacking are non-zero or too many
    #[error("Padding mismatch in data part")]
    PaddingMismatch,

    /// Decoded prefix does not match the expected one
    #[error("Prefix mismatch: expected {expected:?}, found {found:?}")]
    WrongPrefix {
        /// The prefix that was required
        expected: String,
        /// The prefix actually present
        found: String,
    },
}

/// Result type for bech32 operations
pub type Result<T> = std::result::Result<T, Bech32Error>;

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

const CHECKSUM_LEN: usize = 6;

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(v);
        for (i, coeff) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= coeff;
            }
        }
    }
    chk
}

// High bits of each prefix character, a zero separator, then the low bits.
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hrp.len() * 2 + 1);
    out.extend(hrp.bytes().map(|b| b >> 5));
    out.push(0);
    out.extend(hrp.bytes().map(|b| b & 0x1f));
    out
}

fn charset_index(b: u8) -> Option<u8> {
    CHARSET.iter().position(|&c| c == b).map(|i| i as u8)
}

// Regroup 8-bit bytes into 5-bit groups, MSB first, zero-padding the tail.
fn to_five_bit(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &b in data {
        acc = (acc << 8) | u32::from(b);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

// Inverse regrouping. The tail must be shorter than one group and all zero,
// otherwise the groups did not come from whole bytes.
fn to_eight_bit(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &v in data {
        acc = (acc << 5) | u32::from(v);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || (acc << (8 - bits)) & 0xff != 0 {
        return Err(Bech32Error::PaddingMismatch);
    }
    Ok(out)
}

fn validate_hrp(hrp: &str) -> Result<()> {
    if hrp.is_empty() || hrp.bytes().any(|b| !(33..=126).contains(&b)) {
        return Err(Bech32Error::InvalidHrp);
    }
    Ok(())
}

fn check_case(s: &str) -> Result<()> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }
    Ok(())
}

/// Encode `payload` under the human-readable prefix `hrp`
///
/// Output is lowercase: `hrp`, the separator `'1'`, the 5-bit payload groups,
/// and a 6-character checksum.
pub fn encode(hrp: &str, payload: &[u8]) -> Result<String> {
    validate_hrp(hrp)?;
    check_case(hrp)?;
    let hrp = hrp.to_lowercase();

    let data = to_five_bit(payload);

    let mut values = hrp_expand(&hrp);
    values.extend_from_slice(&data);
    values.extend_from_slice(&[0; CHECKSUM_LEN]);
    let chk = polymod(&values) ^ 1;

    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LEN);
    out.push_str(&hrp);
    out.push('1');
    for v in data {
        out.push(CHARSET[v as usize] as char);
    }
    for i in 0..CHECKSUM_LEN {
        let v = (chk >> (5 * (5 - i))) & 0x1f;
        out.push(CHARSET[v as usize] as char);
    }
    Ok(out)
}

/// Decode a bech32 string into its prefix and payload bytes
///
/// Exact inverse of [`encode`]: splits on the last `'1'`, maps the data part
/// back through the alphabet, verifies the checksum, and repacks the 5-bit
/// groups into bytes. All-uppercase input is accepted and normalized.
pub fn decode(s: &str) -> Result<(String, Vec<u8>)> {
    check_case(s)?;
    let s = s.to_lowercase();

    let sep = s.rfind('1').ok_or(Bech32Error::MissingSeparator)?;
    let hrp = &s[..sep];
    let data_part = &s[sep + 1..];
    validate_hrp(hrp)?;
    if data_part.len() < CHECKSUM_LEN {
        return Err(Bech32Error::ChecksumMismatch);
    }

    let data = data_part
        .bytes()
        .map(|b| charset_index(b).ok_or(Bech32Error::InvalidCharacter { found: b as char }))
        .collect::<Result<Vec<u8>>>()?;

    let mut values = hrp_expand(hrp);
    values.extend_from_slice(&data);
    if polymod(&values) != 1 {
        return Err(Bech32Error::ChecksumMismatch);
    }

    let payload = to_eight_bit(&data[..data.len() - CHECKSUM_LEN])?;
    Ok((hrp.to_string(), payload))
}
