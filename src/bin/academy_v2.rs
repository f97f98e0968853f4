use std::process::ExitCode;

use academy::academy_v2::{run_tool::run, DEFAULT_DATABASE};
use academy::models::{Args, Config};
use academy::report::{banner, render_all};

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get config */
    let args = Args::parse();
    let config = match Config::load(&args, DEFAULT_DATABASE) {
        Ok(config) => config,
        Err(err) => {
            error!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    /* Build, seed and query the store */
    match run(&config).await {
        Ok(reports) => {
            println!(
                "{}",
                render_all("QUERY RESULTS FOR THE NORMALIZED ACADEMY DATABASE", &reports)
            );
            println!("\n{}", banner("All operations completed successfully!"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Academy run failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
