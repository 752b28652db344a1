use super::matches::Match;
use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose;

/// Opaque transport token for keeping a match client-side.
impl Match {
    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        general_purpose::STANDARD.encode(json)
    }

    pub fn try_decode(token: &str) -> anyhow::Result<Self> {
        let json = general_purpose::STANDARD
            .decode(token.trim())
            .context("token is not base64")?;
        let decoded = serde_json::from_slice::<Self>(&json).context("token is not a match")?;
        decoded.validate().context("token holds an impossible match")?;
        Ok(decoded)
    }

    /// Never fails: a token that doesn't decode starts a fresh match.
    pub fn decode(token: &str) -> Self {
        match Self::try_decode(token) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::warn!("starting a new match: {:#}", e);
                Self::new()
            }
        }
    }
}
