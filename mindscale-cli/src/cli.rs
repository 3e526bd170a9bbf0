use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::client::{AssessmentClient, DEFAULT_SERVER_URL};
use crate::error::CliError;
use crate::form::{build_submission, load_answers, print_catalog, render_form};
use crate::report::render_result;

#[derive(Debug, Parser)]
#[command(name = "mindscale")]
#[command(about = "Student depression assessment survey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Base URL of the scoring service
    #[arg(long, global = true, env = "MINDSCALE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Print the raw assessment JSON instead of the report
    #[arg(long)]
    pub json: bool,

    /// Read answers from a TOML or JSON file instead of prompting
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Respondent type sent along with the submission
    #[arg(long)]
    pub user_type: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the question catalog and exit
    Questions,
}

impl Cli {
    pub async fn run(&self) -> Result<(), CliError> {
        match &self.command {
            Some(Commands::Questions) => self.handle_questions(),
            None => self.handle_survey().await,
        }
    }

    fn handle_questions(&self) -> Result<(), CliError> {
        let mut stdout = io::stdout().lock();
        print_catalog(&mut stdout)?;
        Ok(())
    }

    async fn handle_survey(&self) -> Result<(), CliError> {
        let answers = match &self.answers {
            Some(path) => load_answers(path)?,
            None => {
                let mut stdin = io::stdin().lock();
                let mut stdout = io::stdout().lock();
                render_form(&mut stdin, &mut stdout)?
            }
        };

        let records = build_submission(&answers);
        debug!(records = records.len(), "Built submission");

        let client = AssessmentClient::new(Some(self.server_url.clone()));
        let result = client.submit(records, self.user_type.clone()).await?;

        let mut stdout = io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &result)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout)?;
            render_result(&result, &mut stdout)?;
        }

        Ok(())
    }
}
