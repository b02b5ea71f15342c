//! Ticket stapling and validation.
//!
//! Staples the notarization ticket to the image so Gatekeeper can
//! verify it offline, then validates the result. Either tool failing is
//! fatal.

use crate::config::Config;
use crate::error::Result;
use crate::exec::{CommandRunner, args, run_checked};

pub async fn run(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    let image = config.image_path().display().to_string();

    log::info!("Stapling ticket to {}", config.dmg_name);
    run_checked(runner, "xcrun", &args(["stapler", "staple", &image])).await?;

    run_checked(runner, "xcrun", &args(["stapler", "validate", &image])).await?;
    log::info!("✓ Stapled and validated {}", config.dmg_name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShipError;
    use crate::exec::ExecOutput;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedRunner {
        // exit code per successive invocation
        codes: Mutex<Vec<i32>>,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl ScriptedRunner {
        fn new(codes: Vec<i32>) -> Self {
            Self {
                codes: Mutex::new(codes),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CommandRunner for ScriptedRunner {
        async fn run(&self, program: &str, args: &[String]) -> Result<ExecOutput> {
            assert_eq!(program, "xcrun");
            self.calls.lock().unwrap().push(args.to_vec());
            let code = self.codes.lock().unwrap().remove(0);
            Ok(ExecOutput {
                code: Some(code),
                stdout: String::new(),
                stderr: "stapler: failed".into(),
            })
        }
    }

    fn test_config() -> Config {
        crate::config::parse(
            "project_name = App\nsource_dir = /src\noutput_dir = /out\nsteps = staple\n",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn staples_then_validates_same_file() {
        let runner = ScriptedRunner::new(vec![0, 0]);
        run(&test_config(), &runner).await.unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0], vec!["stapler", "staple", "/out/App.dmg"]);
        assert_eq!(calls[1], vec!["stapler", "validate", "/out/App.dmg"]);
    }

    #[tokio::test]
    async fn staple_failure_skips_validation() {
        let runner = ScriptedRunner::new(vec![1, 0]);
        let err = run(&test_config(), &runner).await.unwrap_err();

        assert!(matches!(err, ShipError::ExternalTool { code: Some(1), .. }));
        assert_eq!(runner.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn validation_failure_is_fatal() {
        let runner = ScriptedRunner::new(vec![0, 3]);
        let err = run(&test_config(), &runner).await.unwrap_err();
        assert!(matches!(err, ShipError::ExternalTool { code: Some(3), .. }));
    }
}
