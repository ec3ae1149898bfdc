use anyhow::Result;
use asides_client::AsideClient;
use asides_core::{DEFAULT_HOST, DEFAULT_PORT};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "asides")]
#[command(about = "Post, list, fetch and delete short text asides", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Server host
    #[arg(short = 'h', long, default_value = DEFAULT_HOST, global = true)]
    host: String,
    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT, global = true)]
    port: u16,
    /// Print help
    #[arg(long, action = ArgAction::Help, global = true)]
    help: Option<bool>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server on host:port
    #[command(disable_help_flag = true)]
    Serve {
        /// SQLite URL; defaults to ASIDES_DATABASE_URL or the user data directory
        #[arg(long)]
        database_url: Option<String>,
    },
    /// Post a new aside
    #[command(disable_help_flag = true)]
    Save {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List the most recently updated asides
    #[command(disable_help_flag = true)]
    List,
    /// Show a single aside
    #[command(disable_help_flag = true)]
    Fetch { id: i64 },
    /// Replace the text of an aside
    #[command(disable_help_flag = true)]
    Update {
        id: i64,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a single aside
    #[command(disable_help_flag = true)]
    Delete { id: i64 },
}

pub(crate) fn get_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("asides")
        .join("asides.sqlite3")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let host = cli.host;
    let port = cli.port;
    let remote = || AsideClient::new(&host, port);

    let lines = match cli.command {
        Commands::Serve { database_url } => {
            return commands::serve::run(&host, port, database_url).await;
        },
        Commands::Save { text } => commands::remote::save(&remote()?, &text.join(" ")).await,
        Commands::List => commands::remote::list(&remote()?).await,
        Commands::Fetch { id } => commands::remote::fetch(&remote()?, id).await,
        Commands::Update { id, text } => {
            commands::remote::update(&remote()?, id, &text.join(" ")).await
        },
        Commands::Delete { id } => commands::remote::delete(&remote()?, id).await,
    };
    print_lines(lines);

    Ok(())
}
