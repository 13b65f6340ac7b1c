//! laatste CLI - read the latest NOS.nl headlines in the terminal
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::Context;
use clap::Parser;
use laatste::{scraper, ui, RenderTheme};
use rand::Rng;

#[derive(Parser)]
#[command(name = "laatste")]
#[command(author, version, about = "Terminal reader for the latest NOS.nl headlines", long_about = None)]
struct Cli {
    /// NOS category to list articles for (e.g. "laatste", "sport")
    #[arg(short, long, default_value = "laatste")]
    category: String,

    /// Number of headlines to show
    #[arg(short, long, default_value_t = 10)]
    limit: usize,

    /// Open a random article straight away
    #[arg(long)]
    random: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let limit = cli.limit.max(1);

    // Fetched before the terminal is acquired, so a failure here reports as
    // a plain error with the cursor untouched.
    let headlines = scraper::fetch_headlines(&cli.category)
        .await
        .with_context(|| format!("could not fetch headlines for category '{}'", cli.category))?;

    let open_first = cli
        .random
        .then(|| rand::rng().random_range(0..headlines.len().min(limit)));

    ui::run(headlines, limit, RenderTheme::default(), open_first).await?;
    Ok(())
}
