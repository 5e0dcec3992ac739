use colored::Colorize;
use contractloader_sdk::client::{EtherscanClient, ExplorerConfig};
use contractloader_sdk::credentials::{ChainedApiKey, require_api_key};
use contractloader_sdk::{
    DownloadRequest, DownloadSummary, PathPolicy, Stage, download_contract, resolve_chain,
};
use spinoff::{Color, Spinner, spinners};
use tracing::debug;

use crate::common::DownloadArgs;
use crate::report::{display_path, render_summary};

pub async fn run(args: DownloadArgs) -> eyre::Result<()> {
    let mut spinner = Spinner::new(spinners::Dots, "Initializing...", Color::Blue);

    match download(args, &mut spinner).await {
        Ok(summary) => {
            spinner.success(
                &format!(
                    "Successfully downloaded {} source file(s).",
                    summary.file_count.to_string().bold()
                )
                .green()
                .to_string(),
            );
            print!("{}", render_summary(&summary));
            Ok(())
        }
        Err(err) => {
            spinner.clear();
            Err(err)
        }
    }
}

async fn download(args: DownloadArgs, spinner: &mut Spinner) -> eyre::Result<DownloadSummary> {
    let address = args
        .address
        .ok_or_else(|| eyre::eyre!("The contract address is required (--address)"))?;

    spinner.update_text("Resolving chain information...");
    let chain = resolve_chain(&args.chain)?;
    debug!(chain_id = %chain.id, chain = %chain.name, "Resolved chain");

    let api_key = require_api_key(&ChainedApiKey::cli_default(args.api_key))?;
    let client = EtherscanClient::new(ExplorerConfig::new(args.api_url), api_key)?;

    let request = DownloadRequest {
        chain,
        address,
        module: args.module,
        action: args.action,
        output_root: args.output,
        path_policy: if args.confine_paths {
            PathPolicy::Confine
        } else {
            PathPolicy::Trust
        },
    };

    let summary = download_contract(&client, &request, |stage| match stage {
        Stage::Fetching { address, chain } => spinner.update_text(format!(
            "Fetching contract {} from {}...",
            address.cyan(),
            chain.name.yellow()
        )),
        Stage::Parsing => spinner.update_text("Parsing contract source code..."),
        Stage::Saving { dir } => {
            spinner.update_text(format!("Saving files to {}...", display_path(dir).cyan()))
        }
    })
    .await?;

    Ok(summary)
}
