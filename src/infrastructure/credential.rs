// Bearer credential for the telemetry API
use crate::infrastructure::config::SamsaraSettings;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;

#[derive(Clone)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            anyhow::bail!("API token is empty");
        }
        Ok(Self(token))
    }

    /// Inline `api_token` wins over `api_token_file`
    pub fn from_settings(settings: &SamsaraSettings) -> Result<Self> {
        if let Some(token) = &settings.api_token {
            return Self::new(token.as_str());
        }

        let path = settings
            .api_token_file
            .as_ref()
            .context("no API token configured: set samsara.api_token or samsara.api_token_file")?;
        let token = fs::read_to_string(path)
            .with_context(|| format!("Failed to read API token from {}", path.display()))?;
        Self::new(token)
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(<redacted>)")
    }
}
