use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::runtime::Handle;

use userlist::api::UsersClient;
use userlist::cli::Cli;
use userlist::logging::init_tracing;
use userlist::query::QueryConfig;
use userlist::ui::runtime;
use userlist::ui::text::{run_plain, TextPresenter};
use userlist::ui::users::{RenderMode, UserListController, UsersQueryCache};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config().context("loading configuration")?;
    let client = UsersClient::new(&config.api).context("building HTTP client")?;
    tracing::info!(url = client.url(), "Starting");

    let cache = Arc::new(UsersQueryCache::new(QueryConfig::from(&config.query)));
    let controller =
        UserListController::new(cache, Arc::new(client), config.ui.success_banner());

    if cli.plain {
        let mut presenter = TextPresenter::new(io::stdout());
        let mode = run_plain(&controller, &mut presenter).await?;
        return Ok(match mode {
            RenderMode::RealError { .. } => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        });
    }

    let handle = Handle::current();
    let tick_rate = config.ui.tick_rate();
    tokio::task::spawn_blocking(move || runtime::run(controller, handle, tick_rate))
        .await
        .context("terminal UI thread panicked")??;
    Ok(ExitCode::SUCCESS)
}
