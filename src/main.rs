use book_fetcher::utils::{logger, validation::Validate};
use book_fetcher::{BookFetcher, CliConfig, ConfigProvider, ReqwestTransport};
use clap::Parser;

const USAGE: &str = "Usage: book-fetcher <API_URL>";

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::debug!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        eprintln!("{}", USAGE);
        std::process::exit(e.exit_code());
    }

    let transport = match ReqwestTransport::from_config(&config) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };
    let fetcher = BookFetcher::new(transport);

    let books = match fetcher.fetch(config.api_url()).await {
        Ok(books) => books,
        Err(e) => {
            tracing::debug!("Fetch failed: {:?}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Fetched {} books", books.len());

    match serde_json::to_string_pretty(&books) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            let e = book_fetcher::BookError::from(e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
