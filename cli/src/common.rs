use std::path::PathBuf;

use clap::Parser;
use contractloader_sdk::DEFAULT_OUTPUT_DIR;
use contractloader_sdk::client::{DEFAULT_ACTION, DEFAULT_API_URL, DEFAULT_MODULE, Url};

#[derive(Parser)]
pub struct DownloadArgs {
    #[arg(
        short = 'a',
        long,
        required = true,
        env = "CONTRACTLOADER_ADDRESS",
        help = "The contract address to download."
    )]
    pub address: Option<String>,
    #[arg(
        short = 'c',
        long = "chainid",
        visible_alias = "cid",
        default_value = "1",
        env = "CONTRACTLOADER_CHAINID",
        help = "Chain ID or name (e.g., \"1\", \"ethereum\", \"8453\", \"base\")."
    )]
    pub chain: String,
    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT_DIR,
        env = "CONTRACTLOADER_OUTPUT",
        help = "The output directory for the contract files."
    )]
    pub output: PathBuf,
    #[arg(
        short = 'k',
        long = "apikey",
        env = "CONTRACTLOADER_APIKEY",
        hide_env_values = true,
        help = "Your Etherscan API key.",
        long_help = "Your Etherscan API key. Falls back to the ETHERSCAN_API_KEY environment variable."
    )]
    pub api_key: Option<String>,
    #[arg(
        short = 'm',
        long,
        default_value = DEFAULT_MODULE,
        env = "CONTRACTLOADER_MODULE",
        help = "API module to use."
    )]
    pub module: String,
    #[arg(
        long,
        default_value = DEFAULT_ACTION,
        env = "CONTRACTLOADER_ACTION",
        help = "API action to use."
    )]
    pub action: String,
    #[arg(
        long = "api-url",
        default_value = DEFAULT_API_URL,
        env = "CONTRACTLOADER_API_URL",
        help = "Etherscan-compatible API endpoint."
    )]
    pub api_url: Url,
    #[arg(
        long,
        default_value_t = false,
        env = "CONTRACTLOADER_CONFINE_PATHS",
        help = "Refuse source paths that would be written outside the output directory."
    )]
    pub confine_paths: bool,
}
