mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::{App, AppActions};
use clap::Parser;
use cli::CliArgs;
use climate_atlas::config::init_app_config;
use climate_atlas::logging::{init_tracing, LogTarget};
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    args.apply_env_overrides();

    color_eyre::install()?;
    let config = init_app_config()?;

    let headless = args.headless || !is_terminal();
    if headless {
        init_tracing(LogTarget::Stderr, args.debug)?;
    } else {
        init_tracing(LogTarget::File(&config.log_file), args.debug)?;
    }
    tracing::info!(api_base = %config.api_base, headless, "starting climate-atlas");

    if headless {
        let store = app::build_store(&config)?;
        return event::run_headless(&store, &config, args.json, args.global).await;
    }

    let actions = AppActions::new(&config)?;
    let mut app = App::new(actions, config);
    app.navigate(&args.route);
    app.actions.initialize();

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
