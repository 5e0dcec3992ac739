use colored::Colorize;

mod cli;
mod commands;
mod common;
mod report;

#[tokio::main]
async fn main() {
    if let Err(err) = cli::start().await {
        eprintln!("{} {err}", "Error:".red().bold());
        std::process::exit(1);
    }
}
