use crate::commands::{autocomplete, download};
use crate::common::DownloadArgs;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use contractloader_sdk::chains::CHAINS;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

pub async fn start() -> eyre::Result<()> {
    let CLI {
        command,
        download: args,
        verbose,
    } = parse_or_exit();
    init_tracing(verbose);

    match command {
        Some(command) => command.run(),
        None => download::run(args).await,
    }
}

/// Usage errors exit with status 1 like every other failure.
fn parse_or_exit() -> CLI {
    match CLI::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            err.exit()
        }
        Err(err) => {
            err.print().ok();
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Parser)]
#[command(
    name = "contractloader",
    author,
    version = VERSION_STRING,
    about = "Download verified smart contract source code from Etherscan-like explorers.",
    long_about = None,
    subcommand_negates_reqs = true
)]
pub(crate) struct CLI {
    #[command(subcommand)]
    command: Option<Command>,
    #[clap(flatten)]
    download: DownloadArgs,
    #[arg(
        long,
        global = true,
        default_value_t = false,
        help = "Log every step to stderr (same as RUST_LOG=debug)."
    )]
    verbose: bool,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    #[clap(subcommand, about = "Generate shell completion scripts.")]
    Autocomplete(autocomplete::Command),
    #[clap(about = "List the supported chain names and their chain ids.")]
    Chains,
}

impl Command {
    pub fn run(self) -> eyre::Result<()> {
        match self {
            Command::Autocomplete(cmd) => cmd.run()?,
            Command::Chains => write_chains(&mut io::stdout().lock())?,
        };
        Ok(())
    }
}

fn write_chains(out: &mut impl Write) -> io::Result<()> {
    for (alias, id) in CHAINS {
        writeln!(out, "{alias:<24} {id}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn chains_listing_has_one_line_per_alias() {
        let mut out = Vec::new();
        write_chains(&mut out).unwrap();

        let listing = String::from_utf8(out).unwrap();
        assert_eq!(listing.lines().count(), CHAINS.len());
        assert!(listing.lines().any(|line| line.starts_with("base ") && line.ends_with(" 8453")));
    }

    #[test]
    fn chains_listing_reports_a_closed_pipe() {
        let err = write_chains(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn verbose_is_accepted_before_a_subcommand() {
        let cli = CLI::try_parse_from(["contractloader", "--verbose", "chains"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Command::Chains)));
    }
}
