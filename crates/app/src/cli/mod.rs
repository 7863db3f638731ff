use clap::{Args, Parser, Subcommand};
use herbarium_app::database::{self, Db, PoolSettings};

mod import;
mod migrate;

#[derive(Debug, Parser)]
#[command(name = "herbarium-app", about = "Herbarium content store CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),
    /// Load products, blog posts and articles from a content directory
    Import(import::ImportArgs),
}

/// Connection flags shared by every command.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    database_max_connections: u32,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        let settings = PoolSettings {
            max_connections: self.database_max_connections,
            ..PoolSettings::default()
        };

        database::connect(&self.database_url, settings)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Migrate(args) => migrate::run(args).await,
            Commands::Import(args) => import::run(args).await,
        }
    }
}
