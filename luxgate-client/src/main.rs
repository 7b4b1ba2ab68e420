use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use luxgate_client::render::render_status;
use luxgate_client::{ClientError, DEFAULT_GATEWAY_URL, Dashboard, GatewayClient};
use time::UtcOffset;

#[derive(Parser, Debug)]
#[command(
    name = "luxgate",
    version,
    about = "Light sensor dashboard",
    arg_required_else_help = true
)]
struct Cli {
    /// Gateway base URL.
    #[arg(long, global = true, env = "LUXGATE_GATEWAY", default_value = DEFAULT_GATEWAY_URL)]
    gateway: String,

    /// Debug output (repeat for more).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the LED state, threshold and reading history.
    #[command(alias = "refresh")]
    Status {
        /// Limit the number of readings shown.
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Replace the brightness threshold.
    SetThreshold {
        /// New threshold value.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Resolved before the runtime starts any thread.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");

            format!("{app_name}={level}").into()
        }))
        .init();

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(execute(cli, offset)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", alert(&e));
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli, offset: UtcOffset) -> luxgate_client::Result<String> {
    let mut dashboard = Dashboard::new(GatewayClient::new(cli.gateway)?);

    match cli.command {
        Commands::Status { limit } => {
            let status = dashboard.refresh().await?;
            Ok(render_status(status, offset, limit))
        }
        Commands::SetThreshold { value } => {
            let threshold = dashboard.submit_threshold(&value).await?;
            Ok(format!("Threshold sent, current value: {}\n", threshold.limite_luz))
        }
    }
}

fn alert(error: &ClientError) -> String {
    match error {
        ClientError::EmptyInput | ClientError::InvalidInput(_) => format!("Attention: {error}"),
        _ => format!("Error: {error}. Try again."),
    }
}
