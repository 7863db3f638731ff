use std::path::PathBuf;

use clap::Args;
use herbarium_app::import;
use rusty_money::iso;
use tracing::info;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Directory holding `data/products.json`, `blogs/` and `articles/`
    #[arg(long)]
    source: PathBuf,

    /// ISO 4217 code prices in `products.json` are written in
    #[arg(long, env = "SITE_CURRENCY", default_value = "INR")]
    currency: String,

    /// Apply pending migrations before importing
    #[arg(long)]
    migrate: bool,
}

pub(crate) async fn run(args: ImportArgs) -> Result<(), String> {
    let code = args.currency.trim().to_uppercase();
    let currency = iso::find(&code).ok_or_else(|| format!("unknown currency code: {code}"))?;

    let bundle = import::load(&args.source, currency).map_err(|error| report(&error))?;

    info!(
        source = %args.source.display(),
        products = bundle.products.len(),
        posts = bundle.posts.len(),
        articles = bundle.articles.len(),
        "content loaded"
    );

    let db = args.database.connect().await?;

    if args.migrate {
        db.migrate()
            .await
            .map_err(|error| format!("failed to apply migrations: {error}"))?;
    }

    let summary = import::import(&db, &bundle)
        .await
        .map_err(|error| report(&error))?;

    println!("imported {summary}");

    Ok(())
}

/// Error message with its source chain.
fn report(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
