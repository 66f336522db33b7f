mod analyze;
mod collect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobscope-cli")]
#[command(about = "Collect remote job listings and analyze them")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape listing pages into the store.
    Collect {
        /// Overrides `JOBSCOPE_MAX_PAGES`.
        #[arg(long)]
        max_pages: Option<usize>,
        /// Overrides `JOBSCOPE_MAX_RECORDS`.
        #[arg(long)]
        max_records: Option<usize>,
    },
    /// Clean the stored listings, report statistics and export a CSV.
    Analyze {
        /// Overrides `JOBSCOPE_EXPORT_PATH`.
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        no_charts: bool,
    },
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Create the jobs table if it does not exist.
    Init,
    Ping,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("jobscope-cli: run `collect`, `analyze` or `db --help`");
        return Ok(());
    };

    let mut config = jobscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = jobscope_db::open_store(&config.database_url).await?;
    tracing::debug!(env = %config.env, database_url = %config.database_url, "store opened");

    let result = match command {
        Commands::Collect {
            max_pages,
            max_records,
        } => {
            if let Some(pages) = max_pages {
                config.max_pages = pages;
            }
            if let Some(records) = max_records {
                config.max_records = records;
            }
            collect::run_collect(&pool, &config).await
        }
        Commands::Analyze { output, no_charts } => {
            if let Some(path) = output {
                config.export_path = path;
            }
            analyze::run_analyze(&pool, &config, !no_charts).await
        }
        Commands::Db { command } => run_db(&pool, &command).await,
    };

    pool.close().await;
    result
}

async fn run_db(pool: &sqlx::SqlitePool, command: &DbCommands) -> anyhow::Result<()> {
    match command {
        // Idempotent; open_store has already run it once.
        DbCommands::Init => {
            jobscope_db::ensure_schema(pool).await?;
            let rows = jobscope_db::count_listings(pool).await?;
            println!("jobs table ready ({rows} rows)");
        }
        DbCommands::Ping => {
            jobscope_db::ping(pool).await?;
            println!("database ok");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
