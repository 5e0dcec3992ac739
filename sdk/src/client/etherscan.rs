use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{MetadataSource, SourceQuery};
use crate::errors::Error;
use crate::source::ContractMetadataRecord;

pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/v2/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Etherscan signals success with status "1"; everything else is an error.
const STATUS_OK: &str = "1";

#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ExplorerConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// `{status, message, result}` wrapper around every Etherscan response.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

impl Envelope {
    /// Validates the status and returns the first record of `result`.
    pub fn into_record(self) -> Result<ContractMetadataRecord, Error> {
        if self.status != STATUS_OK {
            let result = match self.result {
                Value::String(result) => result,
                other => other.to_string(),
            };
            return Err(Error::Api {
                message: self.message,
                result,
            });
        }

        let records: Vec<ContractMetadataRecord> = serde_json::from_value(self.result)?;
        records.into_iter().next().ok_or(Error::EmptyResult)
    }
}

pub struct EtherscanClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl EtherscanClient {
    pub fn new(config: ExplorerConfig, api_key: String) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("contractloader/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
            api_key,
        })
    }
}

impl MetadataSource for EtherscanClient {
    async fn fetch_metadata(&self, query: &SourceQuery) -> Result<ContractMetadataRecord, Error> {
        debug!(
            url = %self.base_url,
            chain_id = %query.chain_id,
            address = %query.address,
            module = %query.module,
            action = %query.action,
            "Requesting contract metadata"
        );

        let envelope: Envelope = self
            .http
            .get(self.base_url.clone())
            .query(&[
                ("chainid", query.chain_id.as_str()),
                ("module", query.module.as_str()),
                ("action", query.action.as_str()),
                ("address", query.address.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(status = %envelope.status, message = %envelope.message, "Explorer responded");
        envelope.into_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> Envelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn success_returns_first_record() {
        let record = envelope(
            r#"{"status": "1", "message": "OK", "result": [{"SourceCode": "contract Foo {}", "ContractName": "Foo"}, {"SourceCode": "contract Bar {}", "ContractName": "Bar"}]}"#,
        )
        .into_record()
        .unwrap();

        assert_eq!(record.contract_name(), "Foo");
        assert_eq!(record.source_code, "contract Foo {}");
    }

    #[test]
    fn failure_status_is_an_api_error() {
        let err = envelope(r#"{"status": "0", "message": "NOTOK", "result": "Invalid API Key"}"#)
            .into_record()
            .unwrap_err();

        match err {
            Error::Api { message, result } => {
                assert_eq!(message, "NOTOK");
                assert_eq!(result, "Invalid API Key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_result_is_rejected() {
        let err = envelope(r#"{"status": "1", "message": "OK", "result": []}"#)
            .into_record()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyResult));
    }

    #[test]
    fn unexpected_result_shape_is_a_decode_error() {
        let err = envelope(r#"{"status": "1", "message": "OK", "result": "oops"}"#)
            .into_record()
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
