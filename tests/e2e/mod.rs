//! End-to-end test utilities.
//!
//! Builds a full application over a file store in a scratch directory and
//! drives it through prompt lines, the same way the binary does.

use personal_assistant::commands::{handle_line, Outcome};
use personal_assistant::storage::{FileStore, Storage};
use personal_assistant::{AppContext, Config};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub mod fixtures;

/// An application instance backed by a temporary data file.
#[allow(dead_code)]
pub struct TestApp {
    pub ctx: AppContext,
    pub data_file: PathBuf,
    _dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    /// Start with an empty data file location.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let data_file = dir.path().join("assistant.json");
        let ctx = build_context(&data_file);
        Self {
            ctx,
            data_file,
            _dir: dir,
        }
    }

    /// Run one prompt line and return the reply text.
    ///
    /// # Panics
    /// Panics if the line produced no reply or ended the session.
    pub fn run(&mut self, line: &str) -> String {
        match handle_line(&mut self.ctx, line) {
            Some(Outcome::Reply(reply)) => reply,
            other => panic!("expected a reply to '{}', got {:?}", line, other),
        }
    }

    /// Simulate a restart: a fresh context over the same data file.
    pub fn restart(&mut self) {
        self.ctx = build_context(&self.data_file);
    }

    /// Store view of the data file, for inspecting what was persisted.
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.data_file)
    }
}

#[allow(dead_code)]
fn build_context(data_file: &Path) -> AppContext {
    let config = Config {
        data_file: data_file.to_path_buf(),
        ..Config::default()
    };
    let store = Arc::new(FileStore::new(data_file)) as Arc<dyn Storage>;
    AppContext::new(config, store)
}

/// Pull the id out of an "... (ID: <id>)" confirmation.
#[allow(dead_code)]
pub fn extract_id(reply: &str) -> String {
    let start = reply.find("(ID: ").expect("reply has no id") + "(ID: ".len();
    let end = reply[start..].find(')').expect("unterminated id") + start;
    reply[start..end].to_string()
}
