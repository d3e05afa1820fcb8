//! Scaffold run orchestration
//!
//! Sequences one run: back up `src/`, create the directory skeleton, write
//! the layout and every page, then drop the backup. Any fault while backing
//! up or scaffolding skips clean-up and restores the backup instead.
//!
//! ```text
//! Start -> BackingUp -> Scaffolding -> CleaningUp -> Done
//!   \__________\____________\
//!                            -> Restoring -> Restored
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::backup::{BackupManager, RestoreOutcome};
use crate::config::{ScaffoldPaths, ScaffoldSettings};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::storage::init::initialize_directories;
use crate::templates::{AtomicFileSink, FileSink, TemplateWriter};

/// Where a run is, or where it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Start,
    BackingUp,
    Scaffolding,
    CleaningUp,
    Done,
    Restoring,
    Restored,
}

impl RunState {
    /// Terminal states end a run
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Restored)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::BackingUp => "backing_up",
            Self::Scaffolding => "scaffolding",
            Self::CleaningUp => "cleaning_up",
            Self::Done => "done",
            Self::Restoring => "restoring",
            Self::Restored => "restored",
        };
        f.write_str(name)
    }
}

/// What happened during a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Final state, `Done` or `Restored`
    pub state: RunState,
    /// Page set the run was asked to write
    pub settings: ScaffoldSettings,
    /// Whether `src/` existed and was backed up
    pub backup_taken: bool,
    /// Files written, in order (kept even if a later step failed)
    pub files_written: Vec<PathBuf>,
    /// Progress lines, in the order they were emitted
    pub messages: Vec<String>,
    /// The fault that sent the run down the restore path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore: Option<RestoreOutcome>,
}

impl RunReport {
    fn new(settings: ScaffoldSettings) -> Self {
        Self {
            state: RunState::Start,
            settings,
            backup_taken: false,
            files_written: Vec::new(),
            messages: Vec::new(),
            error: None,
            restore: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.state == RunState::Done
    }
}

type ProgressFn = Box<dyn Fn(&str)>;

/// Runs the scaffold with backup/restore around it
pub struct Orchestrator<S: FileSink = AtomicFileSink> {
    settings: ScaffoldSettings,
    paths: ScaffoldPaths,
    backups: BackupManager,
    writer: TemplateWriter<S>,
    progress: Option<ProgressFn>,
}

impl Orchestrator<AtomicFileSink> {
    pub fn new(paths: ScaffoldPaths, settings: ScaffoldSettings) -> Self {
        Self::with_sink(paths, settings, AtomicFileSink)
    }
}

impl<S: FileSink> Orchestrator<S> {
    /// Create an orchestrator whose template output goes through `sink`
    pub fn with_sink(paths: ScaffoldPaths, settings: ScaffoldSettings, sink: S) -> Self {
        Self {
            settings,
            backups: BackupManager::new(paths.clone()),
            writer: TemplateWriter::with_sink(paths.clone(), sink),
            paths,
            progress: None,
        }
    }

    /// Receive each progress line as it is emitted
    pub fn with_progress(mut self, progress: impl Fn(&str) + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn paths(&self) -> &ScaffoldPaths {
        &self.paths
    }

    /// Run the scaffold
    ///
    /// Returns `Ok` for both terminal states; check [`RunReport::state`].
    ///
    /// # Errors
    ///
    /// - `Validation` if the settings are invalid (nothing is touched)
    /// - `RestoreFailed` if the run failed and restoring the backup failed too
    pub fn run(&self) -> ScaffoldResult<RunReport> {
        self.settings.validate()?;

        let mut report = RunReport::new(self.settings.clone());
        log::info!(
            "scaffolding {} page(s) under {}",
            self.settings.pages.len(),
            self.paths.root().display()
        );

        if let Err(err) = self.backup_and_scaffold(&mut report) {
            return self.recover(report, err);
        }

        self.transition(&mut report, RunState::CleaningUp);
        match self.backups.discard_backup() {
            Ok(true) => self.emit(&mut report, "Removed backup as changes were successful"),
            Ok(false) => {}
            // Every file is already written; a stray backup is not worth undoing that.
            Err(e) => {
                log::warn!("could not remove backup: {}", e);
                self.emit(&mut report, &format!("Warning: could not remove backup: {}", e));
            }
        }

        self.transition(&mut report, RunState::Done);
        Ok(report)
    }

    fn backup_and_scaffold(&self, report: &mut RunReport) -> ScaffoldResult<()> {
        self.transition(report, RunState::BackingUp);
        self.emit(report, "Creating backup...");
        report.backup_taken = self.backups.create_backup()?;
        if !report.backup_taken {
            self.emit(report, "No src directory found. Creating new structure...");
        }

        self.transition(report, RunState::Scaffolding);
        initialize_directories(&self.paths)?;

        let layout = self.writer.write_layout()?;
        self.record(report, layout.path, &layout.message);

        for page in &self.settings.pages {
            let written = self.writer.write_page(page)?;
            self.record(report, written.path, &written.message);
        }

        self.emit(report, "\nSuccessfully updated all files!");
        Ok(())
    }

    fn recover(&self, mut report: RunReport, err: ScaffoldError) -> ScaffoldResult<RunReport> {
        log::error!("run failed during {}: {}", report.state, err);
        self.emit(&mut report, &format!("Error occurred: {}", err));
        report.error = Some(err.to_string());

        self.transition(&mut report, RunState::Restoring);
        self.emit(&mut report, "Attempting to restore from backup...");

        let outcome = self
            .backups
            .restore_backup()
            .map_err(|restore_err| ScaffoldError::RestoreFailed {
                original: err.to_string(),
                restore: restore_err.to_string(),
            })?;

        self.emit(&mut report, outcome.message());
        report.restore = Some(outcome);
        self.transition(&mut report, RunState::Restored);
        Ok(report)
    }

    fn transition(&self, report: &mut RunReport, next: RunState) {
        log::debug!("state {} -> {}", report.state, next);
        report.state = next;
    }

    fn record(&self, report: &mut RunReport, path: PathBuf, message: &str) {
        report.files_written.push(path);
        self.emit(report, message);
    }

    fn emit(&self, report: &mut RunReport, message: &str) {
        if let Some(progress) = &self.progress {
            progress(message);
        }
        report.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{render_layout, render_page};
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::TempDir;

    /// Fails every write whose file name matches `target`
    struct FaultySink {
        target: &'static str,
    }

    impl FileSink for FaultySink {
        fn write_file(&self, path: &Path, contents: &str) -> ScaffoldResult<()> {
            if path.file_name().map_or(false, |n| n == self.target) {
                return Err(ScaffoldError::Io(format!("injected fault on {}", self.target)));
            }
            AtomicFileSink.write_file(path, contents)
        }
    }

    /// Runs `hook` before writing any file named `target`; an error from the
    /// hook fails that write
    struct HookSink {
        target: &'static str,
        hook: Box<dyn Fn() -> ScaffoldResult<()>>,
    }

    impl FileSink for HookSink {
        fn write_file(&self, path: &Path, contents: &str) -> ScaffoldResult<()> {
            if path.file_name().map_or(false, |n| n == self.target) {
                (self.hook)()?;
            }
            AtomicFileSink.write_file(path, contents)
        }
    }

    /// Relative path of every entry under `root`, sorted
    fn entries(root: &Path) -> Vec<std::path::PathBuf> {
        let mut entries: Vec<_> = walkdir::WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .map(|e| e.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
            .collect();
        entries.sort();
        entries
    }

    fn seed_old_page(root: &Path) {
        let pages = root.join("src").join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("Old.tsx"), "keep me").unwrap();
    }

    #[test]
    fn test_fresh_run_creates_everything() {
        let temp = TempDir::new().unwrap();
        let paths = ScaffoldPaths::with_root(temp.path());

        let report = Orchestrator::new(paths.clone(), ScaffoldSettings::default())
            .run()
            .unwrap();

        assert_eq!(report.state, RunState::Done);
        assert!(!report.backup_taken);
        assert_eq!(report.files_written.len(), 3);
        assert_eq!(
            fs::read_to_string(paths.layout_file()).unwrap(),
            render_layout()
        );
        assert_eq!(
            fs::read_to_string(paths.page_file("Search")).unwrap(),
            render_page("Search")
        );
        assert_eq!(
            fs::read_to_string(paths.page_file("Experiments")).unwrap(),
            render_page("Experiments")
        );
        assert!(!paths.has_backup());
    }

    #[test]
    fn test_fresh_run_messages() {
        let temp = TempDir::new().unwrap();

        let report = Orchestrator::new(
            ScaffoldPaths::with_root(temp.path()),
            ScaffoldSettings::default(),
        )
        .run()
        .unwrap();

        assert_eq!(
            report.messages,
            vec![
                "Creating backup...",
                "No src directory found. Creating new structure...",
                "Created SharedLayout.tsx",
                "Updated Search.tsx",
                "Updated Experiments.tsx",
                "\nSuccessfully updated all files!",
            ]
        );
    }

    #[test]
    fn test_existing_tree_is_backed_up_then_discarded() {
        let temp = TempDir::new().unwrap();
        seed_old_page(temp.path());
        let paths = ScaffoldPaths::with_root(temp.path());

        let report = Orchestrator::new(paths.clone(), ScaffoldSettings::default())
            .run()
            .unwrap();

        assert!(report.succeeded());
        assert!(report.backup_taken);
        assert!(!paths.has_backup());
        assert_eq!(
            report.messages.last().unwrap(),
            "Removed backup as changes were successful"
        );
        assert_eq!(
            fs::read_to_string(paths.pages_dir().join("Old.tsx")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_fault_restores_original_tree() {
        let temp = TempDir::new().unwrap();
        seed_old_page(temp.path());
        let paths = ScaffoldPaths::with_root(temp.path());

        let report = Orchestrator::with_sink(
            paths.clone(),
            ScaffoldSettings::default(),
            FaultySink {
                target: "Experiments.tsx",
            },
        )
        .run()
        .unwrap();

        assert_eq!(report.state, RunState::Restored);
        assert_eq!(report.restore, Some(RestoreOutcome::Restored));
        assert!(report.error.as_deref().unwrap().contains("Experiments.tsx"));

        assert_eq!(
            fs::read_to_string(paths.pages_dir().join("Old.tsx")).unwrap(),
            "keep me"
        );
        assert!(!paths.page_file("Search").exists());
        assert!(!paths.page_file("Experiments").exists());
        assert!(!paths.layout_file().exists());
    }

    #[test]
    fn test_fault_without_backup_leaves_partial_tree() {
        let temp = TempDir::new().unwrap();
        let paths = ScaffoldPaths::with_root(temp.path());

        let report = Orchestrator::with_sink(
            paths.clone(),
            ScaffoldSettings::default(),
            FaultySink {
                target: "Experiments.tsx",
            },
        )
        .run()
        .unwrap();

        assert_eq!(report.state, RunState::Restored);
        assert_eq!(report.restore, Some(RestoreOutcome::NoBackup));
        assert!(paths.page_file("Search").exists());
        assert!(!paths.page_file("Experiments").exists());
        assert_eq!(
            report.messages.last().unwrap(),
            "No backup found to restore"
        );
    }

    #[test]
    fn test_invalid_settings_touch_nothing() {
        let temp = TempDir::new().unwrap();
        seed_old_page(temp.path());
        let paths = ScaffoldPaths::with_root(temp.path());

        let err = Orchestrator::new(paths.clone(), ScaffoldSettings::with_pages(["bad name"]))
            .run()
            .unwrap_err();

        assert!(err.is_validation());
        assert!(!paths.has_backup());
        assert!(!paths.components_dir().exists());
    }

    #[test]
    fn test_custom_page_set() {
        let temp = TempDir::new().unwrap();
        let paths = ScaffoldPaths::with_root(temp.path());

        let report = Orchestrator::new(paths.clone(), ScaffoldSettings::with_pages(["Results"]))
            .run()
            .unwrap();

        assert!(report.succeeded());
        assert!(paths.page_file("Results").exists());
        assert!(!paths.page_file("Search").exists());
    }

    #[test]
    fn test_progress_receives_lines_live() {
        let temp = TempDir::new().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let report = Orchestrator::new(
            ScaffoldPaths::with_root(temp.path()),
            ScaffoldSettings::default(),
        )
        .with_progress(move |line| sink.borrow_mut().push(line.to_string()))
        .run()
        .unwrap();

        assert_eq!(*seen.borrow(), report.messages);
    }

    #[test]
    fn test_report_serializes() {
        let temp = TempDir::new().unwrap();

        let report = Orchestrator::new(
            ScaffoldPaths::with_root(temp.path()),
            ScaffoldSettings::default(),
        )
        .run()
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["state"], "done");
        assert_eq!(json["backup_taken"], false);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_terminal_states() {
        assert!(RunState::Done.is_terminal());
        assert!(RunState::Restored.is_terminal());
        assert!(!RunState::Restoring.is_terminal());
        assert_eq!(RunState::CleaningUp.to_string(), "cleaning_up");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_backup_copy_leaves_source_intact() {
        use std::os::unix::net::UnixListener;

        let temp = TempDir::new().unwrap();
        let paths = ScaffoldPaths::with_root(temp.path());
        let pages = paths.pages_dir();
        fs::create_dir_all(&pages).unwrap();
        for i in 0..20 {
            fs::write(pages.join(format!("Page{}.tsx", i)), format!("page {}", i)).unwrap();
        }
        // Sockets cannot be copied, so the snapshot fails part-way
        let _listener = UnixListener::bind(paths.source_dir().join("m_sock")).unwrap();
        let before = entries(&paths.source_dir());

        let report = Orchestrator::new(paths.clone(), ScaffoldSettings::default())
            .run()
            .unwrap();

        assert_eq!(report.state, RunState::Restored);
        assert_eq!(report.restore, Some(RestoreOutcome::NoBackup));
        assert!(report.error.as_deref().unwrap().contains("Backup error"));
        assert!(!paths.has_backup());
        assert_eq!(entries(&paths.source_dir()), before);
        assert_eq!(
            fs::read_to_string(pages.join("Page19.tsx")).unwrap(),
            "page 19"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unrestorable_backup_is_a_restore_failure() {
        use std::os::unix::net::UnixListener;

        let temp = TempDir::new().unwrap();
        seed_old_page(temp.path());
        let paths = ScaffoldPaths::with_root(temp.path());
        let backup_dir = paths.backup_dir();

        let sink = HookSink {
            target: "Experiments.tsx",
            hook: Box::new(move || {
                UnixListener::bind(backup_dir.join("m_sock"))?;
                Err(ScaffoldError::Io("injected fault".into()))
            }),
        };

        let err = Orchestrator::with_sink(paths.clone(), ScaffoldSettings::default(), sink)
            .run()
            .unwrap_err();

        assert!(err.is_restore_failure());
        assert!(err.to_string().contains("injected fault"));
        assert!(paths.has_backup());
    }

    #[test]
    fn test_cleanup_failure_still_done() {
        let temp = TempDir::new().unwrap();
        seed_old_page(temp.path());
        let paths = ScaffoldPaths::with_root(temp.path());
        let backup_dir = paths.backup_dir();

        // Swap the backup for a plain file so removing it as a tree fails
        let sink = HookSink {
            target: "Experiments.tsx",
            hook: Box::new(move || {
                fs::remove_dir_all(&backup_dir)?;
                fs::write(&backup_dir, "not a directory")?;
                Ok(())
            }),
        };

        let report = Orchestrator::with_sink(paths.clone(), ScaffoldSettings::default(), sink)
            .run()
            .unwrap();

        assert_eq!(report.state, RunState::Done);
        assert!(report.error.is_none());
        assert!(report
            .messages
            .last()
            .unwrap()
            .starts_with("Warning: could not remove backup"));
        assert!(paths.page_file("Experiments").exists());
    }
}
