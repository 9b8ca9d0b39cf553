use clap::Parser;
use email_service::ServerConfig;
use gemini_client::GeminiConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Email completion, refinement and summarization relay backed by Gemini
#[derive(Debug, Parser)]
#[command(name = "email-service", version, about)]
struct Cli {
    /// Bind address (overrides APP_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides APP_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Gemini model name (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,
}

impl Cli {
    fn apply(self, server: &mut ServerConfig, gemini: &mut GeminiConfig) {
        if let Some(host) = self.host {
            server.host = host;
        }
        if let Some(port) = self.port {
            server.port = port;
        }
        if let Some(model) = self.model {
            gemini.model = model;
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let cli = Cli::parse();
    let mut server_config = ServerConfig::from_env();
    let mut gemini_config = GeminiConfig::from_env();
    cli.apply(&mut server_config, &mut gemini_config);

    tracing::info!(?gemini_config, "Starting standalone email service");

    if let Err(e) = email_service::run(server_config, gemini_config).await {
        tracing::error!("Failed to run email service: {:#}", e);
        return Err(e);
    }

    Ok(())
}
