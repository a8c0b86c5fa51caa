mod constants;
mod models;
mod services;

use anyhow::{Context, Result};

use constants::DEFAULT_LOG_FILTER;
use models::Secrets;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "inject-secrets";

fn main() -> Result<()> {
    // Set RUST_LOG=debug to see which placeholders were replaced
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    log::debug!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;

    // Real environment first, then <cwd>/.env; resolved before the target is touched
    let dotenv = services::load_dotenv(&cwd);
    let secrets = Secrets::from_lookup(dotenv.layered(|name| std::env::var(name)))?;

    let outcome = services::inject(&cwd, &secrets)?;
    println!("{}", outcome);

    Ok(())
}
