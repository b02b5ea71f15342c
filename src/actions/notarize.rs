//! Code signing and notarization.
//!
//! Signs the built image with the configured identity, resolves the
//! Apple ID and app-specific password from the keychain, then submits
//! the image to the notarization service and waits for the verdict.
//! A rejection comes back as notarytool's own non-zero exit.

use crate::config::Config;
use crate::error::{Result, ShipError};
use crate::exec::{CommandRunner, CredentialStore, args, run_checked};

/// Signs and submits the image.
///
/// Credential checks happen before the submission tool is ever invoked:
/// Apple ID, password, and team id must all be non-empty, and any
/// missing one is reported by name.
pub async fn run(
    config: &Config,
    runner: &dyn CommandRunner,
    credentials: &dyn CredentialStore,
) -> Result<()> {
    let identity = config
        .signing_identity
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ShipError::ConfigInvalid {
            message: "signing_identity is required for notarization".into(),
        })?;

    let image = config.image_path().display().to_string();

    log::info!("Signing {} with identity '{}'", config.dmg_name, identity);
    run_checked(
        runner,
        "codesign",
        &args(["--timestamp", "-s", identity, &image]),
    )
    .await?;
    log::info!("✓ Signed {}", config.dmg_name);

    // Absent keychain items resolve to empty here; the combined check
    // below names whichever inputs are actually missing.
    let apple_id = credentials
        .lookup(&config.apple_id_service)
        .await?
        .unwrap_or_default();
    let password = credentials
        .lookup(&config.app_password_service)
        .await?
        .unwrap_or_default();
    let team_id = config.team_id.clone().unwrap_or_default();

    let mut missing = Vec::new();
    if apple_id.is_empty() {
        missing.push(format!("apple id (keychain service '{}')", config.apple_id_service));
    }
    if password.is_empty() {
        missing.push(format!(
            "app-specific password (keychain service '{}')",
            config.app_password_service
        ));
    }
    if team_id.is_empty() {
        missing.push("team_id (configuration key)".to_string());
    }
    if !missing.is_empty() {
        return Err(ShipError::CredentialMissing {
            what: missing.join(", "),
        });
    }

    log::info!("Submitting {} for notarization (waits for Apple)", config.dmg_name);
    run_checked(
        runner,
        "xcrun",
        &args([
            "notarytool",
            "submit",
            &image,
            "--apple-id",
            &apple_id,
            "--team-id",
            &team_id,
            "--password",
            &password,
            "--wait",
        ]),
    )
    .await?;
    log::info!("✓ Notarization accepted for {}", config.dmg_name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::ExecOutput;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct RecordingRunner {
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl RecordingRunner {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn programs(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(p, _)| p.clone())
                .collect()
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, program: &str, args: &[String]) -> Result<ExecOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            Ok(ExecOutput {
                code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    struct MapStore(HashMap<String, String>);

    #[async_trait]
    impl CredentialStore for MapStore {
        async fn lookup(&self, service: &str) -> Result<Option<String>> {
            Ok(self.0.get(service).cloned())
        }
    }

    fn full_store() -> MapStore {
        MapStore(HashMap::from([
            ("dmgship-apple-id".to_string(), "jane@example.com".to_string()),
            ("dmgship-app-password".to_string(), "abcd-efgh-ijkl-mnop".to_string()),
        ]))
    }

    fn test_config(extra: &str) -> Config {
        crate::config::parse(&format!(
            "project_name = App\nsource_dir = /src\noutput_dir = /out\nsteps = notarize\n{extra}"
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn missing_identity_fails_before_any_invocation() {
        let runner = RecordingRunner::new();
        let err = run(&test_config("team_id = TEAM42\n"), &runner, &full_store())
            .await
            .unwrap_err();

        assert!(matches!(err, ShipError::ConfigInvalid { .. }));
        assert!(runner.programs().is_empty());
    }

    #[tokio::test]
    async fn missing_apple_id_never_reaches_notarytool() {
        let runner = RecordingRunner::new();
        let store = MapStore(HashMap::from([(
            "dmgship-app-password".to_string(),
            "pw".to_string(),
        )]));
        let config = test_config("signing_identity = Dev ID\nteam_id = TEAM42\n");

        let err = run(&config, &runner, &store).await.unwrap_err();

        match err {
            ShipError::CredentialMissing { what } => {
                assert!(what.contains("apple id"));
                assert!(!what.contains("password (")); // only the missing one is named
            }
            other => panic!("unexpected error: {other}"),
        }
        // codesign ran, notarytool did not
        assert_eq!(runner.programs(), vec!["codesign"]);
    }

    #[tokio::test]
    async fn missing_team_id_is_named() {
        let runner = RecordingRunner::new();
        let config = test_config("signing_identity = Dev ID\n");

        let err = run(&config, &runner, &full_store()).await.unwrap_err();
        match err {
            ShipError::CredentialMissing { what } => assert!(what.contains("team_id")),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(runner.programs(), vec!["codesign"]);
    }

    #[tokio::test]
    async fn happy_path_signs_then_submits_with_wait() {
        let runner = RecordingRunner::new();
        let config = test_config("signing_identity = Dev ID\nteam_id = TEAM42\n");

        run(&config, &runner, &full_store()).await.unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);

        let (program, args) = &calls[0];
        assert_eq!(program, "codesign");
        assert_eq!(
            args,
            &vec!["--timestamp", "-s", "Dev ID", "/out/App.dmg"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );

        let (program, args) = &calls[1];
        assert_eq!(program, "xcrun");
        assert_eq!(args[0], "notarytool");
        assert_eq!(args[1], "submit");
        assert_eq!(args[2], "/out/App.dmg");
        assert!(args.contains(&"--apple-id".to_string()));
        assert!(args.contains(&"jane@example.com".to_string()));
        assert!(args.contains(&"--team-id".to_string()));
        assert!(args.contains(&"TEAM42".to_string()));
        assert_eq!(args.last().unwrap(), "--wait");
    }
}
