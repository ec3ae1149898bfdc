//! One-shot fetch: prints the recent asides as `(<id>) - <body>`.

use anyhow::Result;
use asides_client::AsideClient;
use asides_core::{DEFAULT_HOST, DEFAULT_PORT};
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "asides-fetch")]
#[command(about = "Print the most recently updated asides", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// Server host
    #[arg(short = 'h', long, default_value = DEFAULT_HOST)]
    host: String,
    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = AsideClient::new(&args.host, args.port)?;

    for aside in client.list().await? {
        println!("({}) - {}", aside.id, aside.body);
    }

    Ok(())
}
