mod config_commands;
mod session_commands;

use {
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "casita", about = "Casita — conversational real estate bot", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    // Gateway arguments (used when no subcommand is provided, or with `gateway` subcommand)
    /// Address to bind to (overrides config value).
    #[arg(long, global = true)]
    bind: Option<String>,
    /// Port to listen on (overrides config value).
    #[arg(long, global = true)]
    port: Option<u16>,
    /// Custom config directory (overrides default ~/.config/casita/).
    #[arg(long, global = true, env = "CASITA_CONFIG_DIR")]
    config_dir: Option<std::path::PathBuf>,
    /// Custom data directory (overrides default data dir).
    #[arg(long, global = true, env = "CASITA_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook gateway (default when no subcommand is provided).
    Gateway,
    /// Send an outbound message through Twilio.
    Send {
        /// Recipient, e.g. "whatsapp:+15551230000" or "+15551230000".
        #[arg(long)]
        to: String,
        #[arg(short, long)]
        message: String,
        /// Media URL to attach to the message.
        #[arg(long)]
        media: Option<String>,
    },
    /// Stored conversation management.
    Sessions {
        #[command(subcommand)]
        action: session_commands::SessionAction,
    },
    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: config_commands::ConfigAction,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    // Apply directory overrides before anything touches the config, so every
    // subcommand resolves the same files the gateway would.
    if let Some(ref dir) = cli.config_dir {
        casita_config::set_config_dir(dir.clone());
    }
    if let Some(ref dir) = cli.data_dir {
        casita_config::set_data_dir(dir.clone());
    }

    match cli.command {
        // Default: start the gateway when no subcommand is provided
        None | Some(Commands::Gateway) => {
            info!(version = env!("CARGO_PKG_VERSION"), "casita starting");

            let mut config = casita_config::discover_and_load();

            // CLI args override config values
            if let Some(bind) = cli.bind {
                config.server.bind = bind;
            }
            if let Some(port) = cli.port {
                config.server.port = port;
            }

            casita_gateway::start_gateway(config).await
        },
        Some(Commands::Send { to, message, media }) => {
            handle_send(&to, &message, media.as_deref()).await
        },
        Some(Commands::Sessions { action }) => session_commands::handle_sessions(action).await,
        Some(Commands::Config { action }) => config_commands::handle_config(action),
    }
}

async fn handle_send(to: &str, message: &str, media: Option<&str>) -> anyhow::Result<()> {
    let config = casita_config::discover_and_load();
    let twilio = &config.twilio;

    let account_sid = twilio
        .account_sid
        .clone()
        .ok_or_else(|| anyhow::anyhow!("twilio.account_sid is not configured"))?;
    let auth_token = twilio
        .auth_token
        .clone()
        .ok_or_else(|| anyhow::anyhow!("twilio.auth_token is not configured"))?;
    let from_number = twilio
        .from_number
        .clone()
        .ok_or_else(|| anyhow::anyhow!("twilio.from_number is not configured"))?;

    let client = casita_twilio::TwilioClient::with_api_base(
        account_sid,
        auth_token,
        from_number,
        twilio.api_base.clone(),
    );
    let sid = client.send_message(to, message, media).await?;
    println!("{sid}");
    Ok(())
}
