//! CLI runner - executes an export

use crate::cli::commands::Cli;
use crate::engine::{ExportStats, Exporter};
use crate::error::{Result, ResultExt};
use crate::http::HttpClient;
use crate::VERSION;
use std::io::{self, Write};
use tracing::debug;

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `-version` was requested and printed
    Version,
    /// Export finished
    Exported(ExportStats),
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against the process stdout
    pub async fn run(&self) -> Result<RunOutcome> {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        let outcome = self.run_with(&mut out).await;
        out.flush().context("flush stdout")?;
        outcome
    }

    /// Run, writing the version or the documents to `out`
    pub async fn run_with<W: Write>(&self, mut out: W) -> Result<RunOutcome> {
        if self.cli.version {
            writeln!(out, "{VERSION}")?;
            return Ok(RunOutcome::Version);
        }

        let config = self.cli.to_config()?;
        config.validate()?;
        debug!("export config: {:?}", config);

        let client = HttpClient::with_auth(config.http_config(), config.auth_config())?;
        let mut exporter = Exporter::new(
            client,
            config.select_url()?,
            config.query_params(),
            config.format()?,
        )
        .with_verbose(config.verbose);

        let stats = exporter.run(out).await?;
        Ok(RunOutcome::Exported(stats))
    }
}
