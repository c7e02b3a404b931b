use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use textmorph_common::{logger, AppConfig};
use textmorph_llm::{
    ParaphraseClient, ParaphraseRequest, SummarizeClient, SummarizeRequest, SummaryLength,
};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

/// Read positional text, falling back to stdin
fn read_input_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn parse_length(length: &str) -> Result<SummaryLength> {
    match length {
        "short" => Ok(SummaryLength::Short),
        "medium" => Ok(SummaryLength::Medium),
        "long" => Ok(SummaryLength::Long),
        other => anyhow::bail!("Unknown length preset '{}' (short, medium, long)", other),
    }
}

#[derive(Parser)]
#[command(name = "textmorph")]
#[command(about = "TextMorph - AI-powered text summarization and paraphrasing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8000")]
        port: u16,
    },

    /// Summarize text (reads stdin when TEXT is omitted)
    Summarize {
        /// Text to summarize
        text: Option<String>,

        /// Length preset (short, medium, long)
        #[arg(long, default_value = "medium")]
        length: String,

        /// Model key (bart, pegasus, t5)
        #[arg(long, default_value = "bart")]
        model: String,
    },

    /// Paraphrase text (reads stdin when TEXT is omitted)
    Paraphrase {
        /// Text to paraphrase
        text: Option<String>,

        /// Number of variants to generate
        #[arg(long, default_value_t = 3)]
        variants: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("TextMorph starting...");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);

            println!("Server listening on http://{}:{}", host, port);

            textmorph_server::start_server(config).await?;
        }
        Some(Commands::Summarize {
            text,
            length,
            model,
        }) => {
            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_console_logging(&config.log_level)?;

            let request = SummarizeRequest {
                text: read_input_text(text)?,
                length: parse_length(&length)?,
                model,
            };

            let client = SummarizeClient::from_config(&config)?;
            let summary = client.summarize(request).await?;

            println!("{}", summary);
        }
        Some(Commands::Paraphrase { text, variants }) => {
            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_console_logging(&config.log_level)?;

            let request = ParaphraseRequest {
                text: read_input_text(text)?,
                num_variants: variants,
            };

            let client = ParaphraseClient::from_config(&config)?;
            let paraphrases = client.paraphrase(request).await?;

            for paraphrase in paraphrases {
                println!("{}", paraphrase);
            }
        }
        None => {
            // Default: start server with config from environment
            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("TextMorph starting with default configuration...");

            let bind_addr = config.server_bind_address();
            println!("Server listening on http://{}", bind_addr);

            textmorph_server::start_server(config).await?;
        }
    }

    Ok(())
}
