//! Command line interface for the packaging pipeline.
//!
//! Wires the production capabilities (system process runner, keychain
//! credential store, terminal confirmer) into the pipeline and maps the
//! result to a process exit code.

mod args;

pub use args::Args;

use crate::config;
use crate::error::Result;
use crate::exec::{
    AssumeYes, CommandRunner, Confirmer, KeychainStore, SystemRunner, TerminalConfirmer,
};
use crate::pipeline::Pipeline;
use std::sync::Arc;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    let config_path = args.config_path()?;
    let config = config::load(&config_path).await?;

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
    let credentials = Arc::new(KeychainStore::new(Arc::clone(&runner)));
    let confirmer: Box<dyn Confirmer> = if args.non_interactive {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirmer)
    };

    let pipeline = Pipeline::new(config, runner, credentials, confirmer)?;
    pipeline.execute().await?;

    Ok(0)
}
