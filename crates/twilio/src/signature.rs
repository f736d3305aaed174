//! Webhook signature verification.
//!
//! Each webhook request carries an `X-Twilio-Signature` header: the hex
//! HMAC-SHA256 of the public webhook URL followed by every form parameter as
//! `{key}{value}`, sorted by key. The key is the account auth token.

use {
    hmac::{Hmac, Mac},
    secrecy::{ExposeSecret, Secret},
};

type HmacSha256 = Hmac<sha2::Sha256>;

pub const SIGNATURE_HEADER: &str = "x-twilio-signature";

pub struct SignatureValidator {
    auth_token: Secret<String>,
    public_url: String,
}

impl SignatureValidator {
    #[must_use]
    pub fn new(auth_token: Secret<String>, public_url: impl Into<String>) -> Self {
        Self {
            auth_token,
            public_url: public_url.into(),
        }
    }

    fn mac_over(&self, params: &[(String, String)]) -> Option<HmacSha256> {
        let mut mac =
            HmacSha256::new_from_slice(self.auth_token.expose_secret().as_bytes()).ok()?;
        mac.update(self.public_url.as_bytes());
        let mut sorted: Vec<&(String, String)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, value) in sorted {
            mac.update(key.as_bytes());
            mac.update(value.as_bytes());
        }
        Some(mac)
    }

    /// Check a header value against the expected digest for `params`.
    ///
    /// The comparison runs inside the HMAC verify, which is constant-time.
    /// Undecodable hex never matches.
    #[must_use]
    pub fn validate(&self, params: &[(String, String)], signature: &str) -> bool {
        let Ok(provided) = hex::decode(signature) else {
            return false;
        };
        self.mac_over(params)
            .is_some_and(|mac| mac.verify_slice(&provided).is_ok())
    }

    /// Hex digest for `params`, as the header would carry it.
    #[must_use]
    pub fn sign(&self, params: &[(String, String)]) -> String {
        self.mac_over(params)
            .map(|mac| hex::encode(mac.finalize().into_bytes()))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for SignatureValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureValidator")
            .field("auth_token", &"[REDACTED]")
            .field("public_url", &self.public_url)
            .finish()
    }
}
