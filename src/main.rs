use anyhow::{bail, Result};
use clap::Parser;

use sentiq::api::ApiClient;
use sentiq::app::App;
use sentiq::config::Config;
use sentiq::output::OutputHandler;

#[derive(Parser)]
#[command(name = "sentiq")]
#[command(about = "CLI sentiment analysis (Traditional Chinese + English) via an OpenAI-compatible endpoint", long_about = None)]
struct Cli {
    /// API key for the completion endpoint (falls back to the config file,
    /// then the SENTIQ_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Model name
    #[arg(long)]
    model: Option<String>,

    /// Completion endpoint base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default().merge_cli(cli.api_key, cli.model, cli.base_url);
    if config.ai.api_key.is_empty() {
        bail!("No API key configured. Pass --api-key, set SENTIQ_API_KEY, or add one to {}",
            Config::get_config_path());
    }

    let client = ApiClient::new(
        config.ai.base_url.clone(),
        config.ai.api_key.clone(),
        config.ai.model.clone(),
    )?;
    let mut output = OutputHandler::new().with_debug(cli.debug);
    if cli.debug {
        output.print_system(&format!(
            "Using model {} via {}",
            config.ai.model, config.ai.base_url
        ));
    }

    let mut app = App::new(Box::new(client), output);
    app.run().await
}
