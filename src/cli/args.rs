use clap::{ArgAction, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "postcheck", version, author = "postcheck")]
#[command(about = "Content-quality reviewer for WordPress JSON exports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose human output
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Debug logs (implies verbose)
    #[arg(short = 'd', long = "debug", global = true, action = ArgAction::SetTrue)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Review a JSON export file and print the audit report
    Review {
        /// Path to a JSON array of post objects
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Write the report to this file instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Serve the reviewer over HTTP
    Serve {
        /// Address to bind
        #[arg(long = "addr", default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}
