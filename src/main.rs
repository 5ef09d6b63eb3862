use clap::{Args, Parser, Subcommand};
use error_reporter::{ErrorEvent, ReporterConfig, create_from_config};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publishes a single error event using the configured reporter.
    Send(SendArgs),
}

#[derive(Args)]
struct SendArgs {
    /// Directory containing `reporter.yaml`.
    #[arg(long, default_value = "configs")]
    config_dir: String,

    /// Human-readable description of the error.
    #[arg(long)]
    message: String,

    /// Classification code.
    #[arg(long, default_value = "")]
    code: String,

    /// Severity label.
    #[arg(long, default_value = "error")]
    severity: String,

    /// Additional context.
    #[arg(long, default_value = "")]
    info: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Send(args) => send(args).await?,
    }

    Ok(())
}

async fn send(args: SendArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(config_dir = %args.config_dir, "Loading reporter configuration...");
    let config = ReporterConfig::load(Some(args.config_dir.as_str()))?;
    tracing::debug!(source = %config.source, brokers = ?config.brokers, topic = %config.topic, "Configuration loaded.");

    let reporter = create_from_config(&config)?;
    let event = ErrorEvent::new(args.message, args.code, args.severity, args.info);

    let result = reporter.report(&event).await;
    reporter.close().await?;
    result?;

    tracing::info!(topic = %config.topic, "Error event published.");
    Ok(())
}
