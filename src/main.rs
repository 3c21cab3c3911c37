use clap::Parser;
use config::Config;
use serde::Deserialize;

pub mod newsapi;
pub mod search;
pub mod server;

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_port")]
    port: u16,
    #[serde(default = "AppConfig::default_news_api_url")]
    news_api_url: String,
}

impl AppConfig {
    fn default_port() -> u16 {
        3000
    }

    fn default_news_api_url() -> String {
        String::from("https://newsapi.org")
    }
}

#[derive(Debug, Parser)]
#[command(name = "newsdesk", about = "Search newsapi.org from the browser")]
struct Cli {
    /// Newsapi.org access key
    #[arg(long)]
    apikey: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    env_logger::init();

    let cli = Cli::parse();
    if cli.apikey.is_empty() {
        anyhow::bail!("apikey must be set");
    }

    log::info!("Loading config...");
    let config = Config::builder()
        .add_source(config::Environment::with_prefix("app").try_parsing(true))
        .build()?;

    let config: AppConfig = config.try_deserialize()?;

    log::info!("Initializing...");
    server::run(config, cli.apikey).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::builder().build().unwrap();
        let config: AppConfig = config.try_deserialize().unwrap();

        assert_eq!(
            config,
            AppConfig {
                port: 3000,
                news_api_url: String::from("https://newsapi.org"),
            }
        );
    }
}
