use std::process::ExitCode;

use assign_reviewers::app;
use assign_reviewers::args::Args;
use assign_reviewers::config::ActionConfig;
use assign_reviewers::errors::AppError;
use assign_reviewers::logging::{init_logging, LoggingConfig};
use assign_reviewers::reporter::report_failure;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let env_map = ActionConfig::collect_env_vars();

    if let Err(e) = init_logging(LoggingConfig::from_env(&env_map)) {
        eprintln!("{e}");
    }

    let result = match ActionConfig::from_args_and_env(args, &env_map) {
        Ok(config) => app::run(&config).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
