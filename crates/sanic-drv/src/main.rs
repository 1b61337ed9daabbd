use clap::Parser as _;

use sanic_drv::{Cli, Config};

fn main() {
    let cli = Cli::parse();

    let verbose = cli.verbose;
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    std::process::exit(sanic_drv::run(&config));
}
