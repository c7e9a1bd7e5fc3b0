use dotenv::dotenv;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tunebridge::api::{self, AppState};
use tunebridge::config::Config;
use tunebridge::converter::Converter;
use tunebridge::providers::Providers;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv().ok();

    // Initialize logging with debug level for our crate
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tunebridge=debug,tower_http=info,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    let config = Config::from_env()?;
    let converter = Converter::new(Providers::from_config(&config));
    let state = Arc::new(AppState::new(converter));

    api::serve(state, &config.bind_addr).await?;

    Ok(())
}
