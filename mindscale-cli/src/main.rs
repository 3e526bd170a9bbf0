use clap::Parser;
use tracing::debug;

mod catalog;
mod cli;
mod client;
mod error;
mod form;
mod logging;
mod report;

use cli::Cli;
use error::CliError;
use logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    debug!("mindscale CLI starting");
    debug!("CLI arguments: {:?}", cli);

    match cli.run().await {
        Ok(_) => {
            debug!("mindscale CLI completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::debug!("CLI error: {:?}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(e.exit_code());
        }
    }
}
