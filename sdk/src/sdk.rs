use std::path::{Path, PathBuf};

use tracing::debug;

pub mod chains;
pub mod client;
pub mod credentials;
pub mod errors;
pub mod materialize;
pub mod source;

pub use chains::{Chain, resolve_chain};
pub use client::{MetadataSource, SourceQuery};
pub use errors::Error;
pub use materialize::{PathPolicy, contract_dir, materialize};
pub use source::{ContractMetadataRecord, ParsedSourcePayload, PayloadFormat, SourceFileMap, parse};

pub const DEFAULT_OUTPUT_DIR: &str = "./smartcontracts";

#[derive(Clone, Debug)]
pub struct DownloadRequest {
    pub chain: Chain,
    pub address: String,
    pub module: String,
    pub action: String,
    pub output_root: PathBuf,
    pub path_policy: PathPolicy,
}

impl DownloadRequest {
    pub fn query(&self) -> SourceQuery {
        SourceQuery {
            chain_id: self.chain.id.clone(),
            address: self.address.clone(),
            module: self.module.clone(),
            action: self.action.clone(),
        }
    }
}

/// Progress notifications emitted by [`download_contract`].
#[derive(Debug)]
pub enum Stage<'a> {
    Fetching { address: &'a str, chain: &'a Chain },
    Parsing,
    Saving { dir: &'a Path },
}

#[derive(Clone, Debug)]
pub struct DownloadSummary {
    pub contract_name: String,
    pub chain: Chain,
    pub format: PayloadFormat,
    pub file_count: usize,
    pub output_dir: PathBuf,
}

/// Fetches a verified contract and writes its sources to
/// `<output_root>/<ContractName>/`.
pub async fn download_contract<S, F>(
    source: &S,
    request: &DownloadRequest,
    mut on_stage: F,
) -> Result<DownloadSummary, Error>
where
    S: MetadataSource,
    F: FnMut(Stage<'_>),
{
    on_stage(Stage::Fetching {
        address: &request.address,
        chain: &request.chain,
    });
    let record = source.fetch_metadata(&request.query()).await?;

    on_stage(Stage::Parsing);
    let payload = parse(&record)?;

    let contract_name = record.contract_name().to_owned();
    let output_dir = contract_dir(&request.output_root, &contract_name, request.path_policy)?;
    on_stage(Stage::Saving { dir: &output_dir });
    let file_count = materialize(&payload.files, &output_dir, request.path_policy)?;
    debug!(
        contract = %contract_name,
        files = file_count,
        dir = %output_dir.display(),
        "Contract saved"
    );

    Ok(DownloadSummary {
        contract_name,
        chain: request.chain.clone(),
        format: payload.format,
        file_count,
        output_dir,
    })
}
