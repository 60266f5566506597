//! Completion API configuration loaded from the environment.

use anyhow::{bail, Result};
use std::env;

/// Credentials and endpoint of the completion API.
#[derive(Clone)]
pub struct DeepSeekConfig {
    /// DEEPSEEK_API_KEY
    pub api_key: String,
    /// DEEPSEEK_API_URL, the full chat-completions endpoint
    pub api_url: String,
}

impl DeepSeekConfig {
    /// Loads DEEPSEEK_API_KEY and DEEPSEEK_API_URL; both are required and must be non-empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: required("DEEPSEEK_API_KEY")?,
            api_url: required("DEEPSEEK_API_URL")?,
        })
    }
}

impl std::fmt::Debug for DeepSeekConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekConfig")
            .field("api_key", &crate::mask_token(&self.api_key))
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => bail!("{} not set", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_reads_both_values() {
        env::set_var("DEEPSEEK_API_KEY", "sk-test-key-0123456789");
        env::set_var("DEEPSEEK_API_URL", "https://api.deepseek.com/chat/completions");

        let config = DeepSeekConfig::from_env().unwrap();
        assert_eq!(config.api_key, "sk-test-key-0123456789");
        assert_eq!(config.api_url, "https://api.deepseek.com/chat/completions");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key_fails() {
        env::remove_var("DEEPSEEK_API_KEY");
        env::set_var("DEEPSEEK_API_URL", "https://api.deepseek.com/chat/completions");

        let err = DeepSeekConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DEEPSEEK_API_KEY"));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_url_fails() {
        env::set_var("DEEPSEEK_API_KEY", "sk-test-key-0123456789");
        env::set_var("DEEPSEEK_API_URL", "");

        let err = DeepSeekConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DEEPSEEK_API_URL"));
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = DeepSeekConfig {
            api_key: "sk-secret-abcdefghijkl".to_string(),
            api_url: "http://localhost".to_string(),
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret-abcdefghijkl"));
        assert!(printed.contains("sk-secr***ijkl"));
    }
}
