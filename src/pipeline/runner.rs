//! Pipeline execution.

use crate::actions;
use crate::config::Config;
use crate::error::Result;
use crate::exec::{CommandRunner, Confirmer, CredentialStore};
use crate::pipeline::reporter::Reporter;
use crate::pipeline::step::{Action, Step, resolve_steps};
use std::sync::Arc;

/// Executes the configured steps strictly in order.
///
/// One external process runs at a time; the runner blocks until it
/// exits. The first failing step aborts the whole run: later steps do
/// not execute and earlier steps are not rolled back. Ordering between
/// steps (package before notarize before staple before feed) is the
/// operator's responsibility via the configured step list.
///
/// Two simultaneous runs against the same output directory are not
/// coordinated; behavior in that case is undefined.
pub struct Pipeline {
    config: Config,
    steps: Vec<Step>,
    runner: Arc<dyn CommandRunner>,
    credentials: Arc<dyn CredentialStore>,
    confirmer: Box<dyn Confirmer>,
    reporter: Reporter,
}

impl Pipeline {
    /// Resolves the configured step list and builds the pipeline.
    ///
    /// Resolution is eager: an unknown step name anywhere in the list
    /// fails here, before any step has run.
    pub fn new(
        config: Config,
        runner: Arc<dyn CommandRunner>,
        credentials: Arc<dyn CredentialStore>,
        confirmer: Box<dyn Confirmer>,
    ) -> Result<Self> {
        let steps = resolve_steps(&config.steps)?;
        let reporter = Reporter::new(steps.iter().map(|s| s.name.clone()).collect());

        Ok(Self {
            config,
            steps,
            runner,
            credentials,
            confirmer,
            reporter,
        })
    }

    /// Runs every step in order, halting on the first failure.
    pub async fn execute(&self) -> Result<()> {
        self.reporter.header(&self.config.project_name);

        for (index, step) in self.steps.iter().enumerate() {
            self.reporter.step_started(index);
            if let Err(e) = self.dispatch(step).await {
                self.reporter.step_failed(index);
                return Err(e);
            }
        }

        self.reporter.finished();
        Ok(())
    }

    async fn dispatch(&self, step: &Step) -> Result<()> {
        match step.action {
            Action::Cleanup => {
                actions::cleanup::run(&self.config, self.confirmer.as_ref()).await
            }
            Action::Package => actions::package::run(&self.config, &*self.runner).await,
            Action::Notarize => {
                actions::notarize::run(&self.config, &*self.runner, &*self.credentials).await
            }
            Action::Staple => actions::staple::run(&self.config, &*self.runner).await,
            Action::Appcast => actions::appcast::run(&self.config, &*self.runner).await,
        }
    }
}
