use clap::Parser;
use counter_context::cli::Cli;
use counter_context::config::Config;
use counter_context::error::AppError;
use counter_context::headless::run_headless;
use counter_context::logging::init_tracing;
use counter_context::ui::runtime;
use std::io;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<AppError>()
            .map(AppError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load_from(&cli.config_path()).map_err(AppError::from)?;
    cli.apply(&mut config);
    config.validate().map_err(AppError::from)?;

    init_tracing(&config.logging.level);
    tracing::info!(?config, "starting");

    let provided = !cli.unprovided;
    if let Some(sequence) = &cli.headless {
        let stdout = io::stdout();
        run_headless(&config.ui.mount_id, provided, sequence, &mut stdout.lock())?;
        return Ok(());
    }

    runtime::run(&config, provided)?;
    Ok(())
}
