//! Query OMDb and print the mapped fields.
//! Usage:
//!   cargo run --bin omdb_props -- search <title words...>
//!   cargo run --bin omdb_props -- lookup <imdb_id>
//! Requires OMDB_API_KEY in the environment (.env supported).

use anyhow::Result;
use dotenvy::dotenv;
use filmfetcher::config::Config;
use filmfetcher::omdb::{OmdbApi, OmdbClient};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn usage() -> ! {
    eprintln!("Usage: cargo run --bin omdb_props -- <search <title>|lookup <imdb_id>>");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let mut args = env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| usage());
    let rest: Vec<String> = args.collect();
    if rest.is_empty() {
        usage();
    }

    let client = OmdbClient::new(&Config::from_env()?)?;
    match mode.as_str() {
        "search" => {
            let term = rest.join(" ");
            let results = client.search(&term).await?;
            info!("--- {} result(s) for '{}' ---", results.len(), term);
            for m in results {
                info!("{} | {} | {} | {}", m.imdb_id, m.title, m.year, m.poster);
            }
        }
        "lookup" => {
            let d = client.lookup(&rest[0]).await?;
            info!("--- OMDb mapped fields ---");
            info!("imdb_id: {}", d.imdb_id);
            info!("title: {}", d.title);
            info!("poster: {}", d.poster);
            info!("released: {}", d.released);
            info!("runtime: {}", d.runtime);
            info!("genre: {}", d.genre);
            info!("imdb_rating: {}", d.imdb_rating);
            info!("plot: {}", d.plot);
            info!("actors: {}", d.actors);
            info!("director: {}", d.director);
        }
        _ => usage(),
    }
    Ok(())
}
