use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod format;

use commands::CliContext;

#[derive(Parser)]
#[command(name = "charm")]
#[command(about = "CHARM CLI - browse characters, create your own and chat with them", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CHARM_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding characters.json
    #[arg(long, global = true, env = "CHARM_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List characters
    List {
        /// Category name ("all" for every category)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Search name, description and category
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one character
    Show { id: String },
    /// List the categories used for filtering
    Categories,
    /// Create a character
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        greeting: String,

        #[arg(long, default_value = "")]
        tagline: String,

        /// Hide from the public catalog
        #[arg(long)]
        private: bool,

        #[arg(long)]
        image_url: Option<String>,
    },
    /// Print generated mock characters
    Mock {
        /// Maximum number of records
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Mock kind (AI, Sports, Anime, ...)
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// Chat with a character
    Chat { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so --json output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = CliContext::load(cli.config.as_deref(), cli.data_dir, cli.json)?;

    match cli.command {
        Commands::List { category, query } => commands::catalog::list(&ctx, category, query).await?,
        Commands::Show { id } => commands::catalog::show(&ctx, &id).await?,
        Commands::Categories => commands::catalog::categories(&ctx)?,
        Commands::Create {
            name,
            description,
            category,
            greeting,
            tagline,
            private,
            image_url,
        } => {
            let request = commands::create::request(
                name,
                description,
                category,
                greeting,
                tagline,
                private,
                image_url,
            );
            commands::create::run(&ctx, request).await?
        }
        Commands::Mock { count, category } => commands::mock::run(&ctx, count, category)?,
        Commands::Chat { id } => commands::chat::run(&ctx, &id).await?,
    }

    Ok(())
}
