use clap::Parser;
use poster_type::cli::{self, Cli};
use poster_type::debug;
use poster_type::session::Session;

fn main() {
    let cli = Cli::parse();

    // --log-level beats RUST_LOG, which beats the config (applied once loaded).
    let rust_log = debug::env_log_level();
    debug::init_log_bridge(debug::resolve_level(
        cli.log_level,
        rust_log.as_deref(),
        Default::default(),
    ));

    let level_from_env = rust_log
        .as_deref()
        .and_then(debug::parse_rust_log)
        .is_some();
    if let Err(e) = run(&cli, level_from_env) {
        eprintln!("poster-type: error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, level_from_env: bool) -> anyhow::Result<()> {
    let config = cli::load_config(cli.config.as_deref())?;
    if cli.log_level.is_none() && !level_from_env {
        debug::set_level(config.log_level.to_level_filter());
    }
    log::info!("Starting poster-type {}", poster_type::VERSION);

    let session = Session::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(&cli.command, &session, cli.json, &mut out)
}
