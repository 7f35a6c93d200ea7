//! LINE webhook signature verification
//!
//! LINE signs each webhook body with the channel secret:
//! `X-Line-Signature = base64(HMAC-SHA256(channel_secret, body))`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "x-line-signature";

fn keyed_mac(channel_secret: &str, body: &[u8]) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes()).ok()?;
    mac.update(body);
    Some(mac)
}

/// Compute the signature LINE would send for `body`
pub fn sign(channel_secret: &str, body: &[u8]) -> String {
    keyed_mac(channel_secret, body)
        .map(|mac| STANDARD.encode(mac.finalize().into_bytes()))
        .unwrap_or_default()
}

/// Check a signature header value against the body (constant time)
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature.trim()) else {
        return false;
    };

    match keyed_mac(channel_secret, body) {
        Some(mac) => mac.verify_slice(&expected).is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "channel-secret";
    const BODY: &[u8] = br#"{"destination":"U1","events":[]}"#;

    #[test]
    fn test_valid_signature() {
        let signature = sign(SECRET, BODY);
        assert!(verify_signature(SECRET, BODY, &signature));
    }

    #[test]
    fn test_tampered_body() {
        let signature = sign(SECRET, BODY);
        assert!(!verify_signature(SECRET, br#"{"destination":"U2","events":[]}"#, &signature));
    }

    #[test]
    fn test_wrong_secret() {
        let signature = sign("other-secret", BODY);
        assert!(!verify_signature(SECRET, BODY, &signature));
    }

    #[test]
    fn test_malformed_signature() {
        assert!(!verify_signature(SECRET, BODY, "not base64!!"));
        assert!(!verify_signature(SECRET, BODY, ""));
    }
}
