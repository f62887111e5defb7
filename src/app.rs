use crate::{
    cli::args::{Cli, Command},
    core::{models, state::ReviewState},
    reporters::{markdown, writer},
    ui::printer,
    utils::logging,
};
use anyhow::{Context, Result};
use std::fs;

pub async fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    let level = logging::level_from_cli(&cli);
    logging::init(level)?;

    match cli.command {
        Command::Review { input, output } => {
            tracing::info!("Reviewing posts from {}", input.display());

            let raw = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read input file: {}", input.display()))?;
            let posts = models::parse_posts(&raw)
                .with_context(|| format!("Failed to decode posts from {}", input.display()))?;
            tracing::info!("Loaded {} posts", posts.len());

            let summary = ReviewState::review(&posts)?;
            let report = markdown::render(&summary);

            match output {
                Some(path) => {
                    writer::write_report(&report, &path)?;
                    printer::print_summary(&summary);
                }
                None => print!("{}", report),
            }
            Ok(())
        }
        Command::Serve { addr } => crate::server::http::serve(addr).await,
    }
}
