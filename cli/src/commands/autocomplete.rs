use std::io;

use crate::cli::CLI;
use clap::{CommandFactory, Subcommand};
use clap_complete::{Shell, generate};

#[derive(Subcommand)]
pub(crate) enum Command {
    #[clap(about = "Print the completion script for a shell.")]
    Generate {
        #[clap(short = 's', long = "shell", help = "Default: $SHELL")]
        shell: Option<Shell>,
    },
}

impl Command {
    pub fn run(self) -> eyre::Result<()> {
        match self {
            Command::Generate { shell } => {
                let shell = shell
                    .or_else(Shell::from_env)
                    .ok_or_else(|| eyre::eyre!("Could not detect the shell, pass --shell"))?;
                let mut command = CLI::command();
                let name = command.get_name().to_owned();
                generate(shell, &mut command, name, &mut io::stdout());
            }
        }
        Ok(())
    }
}
