// Entrypoint for the portfolio CLI.
// - Keeps `main` small: read config and flags, then hand off to `cli::dispatch`.
// - Returns `anyhow::Result` so a failed banner render exits non-zero.

use dipesh_rajoria::cli::{self, Action};
use dipesh_rajoria::config::Config;
use dipesh_rajoria::profile::PROFILE;
use dipesh_rajoria::ui::{self, DialoguerPrompt};
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env();
    let action = cli::parse_args(std::env::args_os()).action();

    if action == Action::Interactive {
        ui::clear_screen()?;
    }

    let mut stdout = io::stdout();
    cli::dispatch(action, &mut stdout, &mut DialoguerPrompt, &PROFILE, &config).await?;
    Ok(())
}
