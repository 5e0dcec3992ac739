use std::future::Future;

use crate::errors::Error;
use crate::source::ContractMetadataRecord;

pub mod etherscan;

pub use etherscan::{DEFAULT_API_URL, EtherscanClient, ExplorerConfig};
pub use reqwest::Url;

pub const DEFAULT_MODULE: &str = "contract";
pub const DEFAULT_ACTION: &str = "getsourcecode";

/// Parameters of a single source code lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceQuery {
    pub chain_id: String,
    pub address: String,
    pub module: String,
    pub action: String,
}

impl SourceQuery {
    pub fn new(chain_id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            address: address.into(),
            module: DEFAULT_MODULE.to_owned(),
            action: DEFAULT_ACTION.to_owned(),
        }
    }
}

/// Anything able to return the verified metadata of a contract.
pub trait MetadataSource {
    fn fetch_metadata(
        &self,
        query: &SourceQuery,
    ) -> impl Future<Output = Result<ContractMetadataRecord, Error>> + Send;
}
