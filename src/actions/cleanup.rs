//! Output directory cleanup.
//!
//! Deletes leftovers from prior runs. The packaged application itself
//! (any entry ending in `.app`) is never a deletion candidate.

use crate::config::Config;
use crate::error::{Result, ShipError};
use crate::exec::Confirmer;
use crate::util::fs;

/// Entries with this suffix are the packaged application and never
/// deletion candidates.
const APP_SUFFIX: &str = ".app";

/// Prepares the output directory.
///
/// A missing directory is created and that is the whole step. An
/// existing directory has its non-`.app` children listed and, after
/// confirmation, recursively deleted. Declining the prompt aborts the
/// entire run, not just this step.
pub async fn run(config: &Config, confirmer: &dyn Confirmer) -> Result<()> {
    let dir = &config.output_dir;

    if !dir.exists() {
        log::info!("Creating output directory {}", dir.display());
        fs::create_dir_all(dir).await?;
        log::info!("✓ Output directory ready");
        return Ok(());
    }

    let candidates = deletion_candidates(config).await?;
    if candidates.is_empty() {
        log::info!("Nothing to delete in {}", dir.display());
        return Ok(());
    }

    println!("Will delete from {}:", dir.display());
    for path in &candidates {
        println!("  {}", path.display());
    }

    let prompt = format!("Delete {} item(s)?", candidates.len());
    if !confirmer.confirm(&prompt)? {
        return Err(ShipError::ConfirmationDeclined {
            step: "cleanup".into(),
        });
    }

    for path in &candidates {
        fs::remove_path(path).await?;
    }
    log::info!("✓ Deleted {} item(s)", candidates.len());

    Ok(())
}

/// Immediate children of the output directory, minus packaged
/// applications. Sorted so listings and deletions are deterministic.
async fn deletion_candidates(config: &Config) -> Result<Vec<std::path::PathBuf>> {
    let mut candidates = Vec::new();
    let mut entries = tokio::fs::read_dir(&config.output_dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(APP_SUFFIX) {
            continue;
        }
        candidates.push(entry.path());
    }

    candidates.sort();
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use std::io;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingConfirmer {
        answer: bool,
        asked: AtomicUsize,
    }

    impl CountingConfirmer {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: AtomicUsize::new(0),
            }
        }
    }

    impl Confirmer for CountingConfirmer {
        fn confirm(&self, _prompt: &str) -> io::Result<bool> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    struct PanicConfirmer;

    impl Confirmer for PanicConfirmer {
        fn confirm(&self, _prompt: &str) -> io::Result<bool> {
            panic!("cleanup prompted when it should not have");
        }
    }

    fn test_config(output_dir: &Path) -> Config {
        config::parse(&format!(
            "project_name = App\nsource_dir = /src\noutput_dir = {}\nsteps = cleanup\n",
            output_dir.display()
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn missing_directory_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("release");
        run(&test_config(&out), &PanicConfirmer).await.unwrap();
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn only_app_entries_means_no_prompt_and_no_deletion() {
        let tmp = tempfile::tempdir().unwrap();
        let app = tmp.path().join("App.app");
        std::fs::create_dir_all(app.join("Contents")).unwrap();

        run(&test_config(tmp.path()), &PanicConfirmer).await.unwrap();
        assert!(app.join("Contents").is_dir());
    }

    #[tokio::test]
    async fn empty_directory_does_not_prompt() {
        let tmp = tempfile::tempdir().unwrap();
        run(&test_config(tmp.path()), &PanicConfirmer).await.unwrap();
    }

    #[tokio::test]
    async fn confirmed_deletion_removes_leftovers_but_keeps_app() {
        let tmp = tempfile::tempdir().unwrap();
        let app = tmp.path().join("App.app");
        std::fs::create_dir_all(&app).unwrap();
        let stale_dmg = tmp.path().join("App.dmg");
        std::fs::write(&stale_dmg, b"old").unwrap();
        let stale_dir = tmp.path().join("leftover");
        std::fs::create_dir_all(stale_dir.join("deep")).unwrap();

        let confirmer = CountingConfirmer::new(true);
        run(&test_config(tmp.path()), &confirmer).await.unwrap();

        assert_eq!(confirmer.asked.load(Ordering::SeqCst), 1);
        assert!(app.exists());
        assert!(!stale_dmg.exists());
        assert!(!stale_dir.exists());
    }

    #[tokio::test]
    async fn declined_prompt_aborts_and_leaves_files() {
        let tmp = tempfile::tempdir().unwrap();
        let stale = tmp.path().join("App.dmg");
        std::fs::write(&stale, b"old").unwrap();

        let confirmer = CountingConfirmer::new(false);
        let err = run(&test_config(tmp.path()), &confirmer)
            .await
            .unwrap_err();

        assert!(matches!(err, ShipError::ConfirmationDeclined { step } if step == "cleanup"));
        assert!(stale.exists());
    }

    #[tokio::test]
    async fn non_interactive_deletes_without_blocking() {
        let tmp = tempfile::tempdir().unwrap();
        let stale = tmp.path().join("App.dmg");
        std::fs::write(&stale, b"old").unwrap();

        // AssumeYes is what --non-interactive injects
        run(&test_config(tmp.path()), &crate::exec::AssumeYes)
            .await
            .unwrap();
        assert!(!stale.exists());
    }

    #[tokio::test]
    async fn confirm_io_error_propagates() {
        struct BrokenConfirmer;
        impl Confirmer for BrokenConfirmer {
            fn confirm(&self, _prompt: &str) -> io::Result<bool> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
            }
        }

        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("junk"), b"x").unwrap();

        let err = run(&test_config(tmp.path()), &BrokenConfirmer)
            .await
            .unwrap_err();
        assert!(matches!(err, ShipError::Io(_)));
    }
}
