mod error;
mod ai {
    pub mod client;
}
mod catalog;
mod cli;
mod config;
mod export;
mod server;
#[cfg(test)]
mod testing;

use clap::Parser;
use cli::Cli;
use dotenv::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
