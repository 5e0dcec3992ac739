use serde::Deserialize;

use crate::errors::CredentialsError;

/// Source of the explorer API key.
pub trait ApiKeyProvider {
    /// `Ok(None)` means this provider has no key and the next one may be tried.
    fn api_key(&self) -> Result<Option<String>, CredentialsError>;
}

/// A key passed in explicitly, e.g. from the command line.
#[derive(Clone, Debug, Default)]
pub struct StaticApiKey(pub Option<String>);

impl ApiKeyProvider for StaticApiKey {
    fn api_key(&self) -> Result<Option<String>, CredentialsError> {
        Ok(non_blank(self.0.clone()))
    }
}

#[derive(Debug, Deserialize)]
pub struct EtherscanEnv {
    pub etherscan_api_key: Option<String>,
}

/// Reads `ETHERSCAN_API_KEY` from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvApiKey;

impl ApiKeyProvider for EnvApiKey {
    fn api_key(&self) -> Result<Option<String>, CredentialsError> {
        let env: EtherscanEnv = envy::from_env()
            .map_err(|e| CredentialsError::ErrorReadingEnvironment(e.to_string()))?;
        Ok(non_blank(env.etherscan_api_key))
    }
}

/// Tries each provider in order and returns the first key found.
pub struct ChainedApiKey(Vec<Box<dyn ApiKeyProvider + Send + Sync>>);

impl ChainedApiKey {
    pub fn new(providers: Vec<Box<dyn ApiKeyProvider + Send + Sync>>) -> Self {
        Self(providers)
    }

    /// The explicit key, falling back to `ETHERSCAN_API_KEY`.
    pub fn cli_default(explicit: Option<String>) -> Self {
        Self::new(vec![Box::new(StaticApiKey(explicit)), Box::new(EnvApiKey)])
    }
}

impl ApiKeyProvider for ChainedApiKey {
    fn api_key(&self) -> Result<Option<String>, CredentialsError> {
        for provider in &self.0 {
            if let Some(key) = provider.api_key()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Resolves a key from `provider`, failing when none is configured.
pub fn require_api_key(provider: &dyn ApiKeyProvider) -> Result<String, CredentialsError> {
    provider.api_key()?.ok_or(CredentialsError::MissingApiKey)
}

fn non_blank(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_owned()).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins() {
        let provider = ChainedApiKey::new(vec![
            Box::new(StaticApiKey(Some("FIRST".to_owned()))),
            Box::new(StaticApiKey(Some("SECOND".to_owned()))),
        ]);
        assert_eq!(require_api_key(&provider).unwrap(), "FIRST");
    }

    #[test]
    fn blank_keys_are_skipped() {
        let provider = ChainedApiKey::new(vec![
            Box::new(StaticApiKey(Some("  ".to_owned()))),
            Box::new(StaticApiKey(Some("SECOND".to_owned()))),
        ]);
        assert_eq!(require_api_key(&provider).unwrap(), "SECOND");
    }

    #[test]
    fn no_key_is_an_error() {
        let provider = ChainedApiKey::new(vec![Box::new(StaticApiKey(None))]);
        assert!(matches!(
            require_api_key(&provider),
            Err(CredentialsError::MissingApiKey)
        ));
    }
}
