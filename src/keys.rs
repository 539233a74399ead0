//! X25519 key handling

use std::convert::TryInto;
use x25519_dalek::{PublicKey, StaticSecret};

/// Decodes a base64-encoded 32-byte key
///
/// Returns `None` when the value is not valid base64 or is not exactly 32
/// bytes long.
pub fn decode_key(value: &str) -> Option<[u8; 32]> {
    let bytes = base64::decode(value.trim()).ok()?;
    bytes.try_into().ok()
}

/// Derives the base64-encoded public key for a base64-encoded private key
///
/// WireGuard keys are X25519, so the public half is always recomputable
/// from the private half.  Returns `None` when the private key does not
/// decode; a malformed key reads as "no identity" rather than failing a
/// parse.
pub fn public_key_for(private_key: &str) -> Option<String> {
    let bytes = match decode_key(private_key) {
        Some(bytes) => bytes,
        None => {
            tracing::debug!("private key is not a 32-byte base64 value");
            return None;
        }
    };

    let secret: StaticSecret = bytes.into();
    let public = PublicKey::from(&secret);
    Some(base64::encode(public.as_bytes()))
}
