// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed marketplace and a fluent builder so
// each integration test can set up an isolated environment without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use swap_profile::marketplace::{MARKETPLACE_MARKER, PROFILES_DIR};
use swap_profile::profiles::{CONFIG_DIR, DOC_FILE, ProfileStore, SETTINGS_FILE};

/// Create `profiles/` and the marketplace marker under `root`.
pub fn setup_marketplace(root: &Path) {
    std::fs::create_dir_all(root.join(PROFILES_DIR)).expect("create profiles dir");
    std::fs::create_dir_all(root.join(MARKETPLACE_MARKER)).expect("create marker dir");
}

/// An isolated marketplace plus a project directory, backed by a
/// [`tempfile::TempDir`] that is deleted on drop.
#[derive(Debug)]
pub struct IntegrationTestContext {
    /// Temporary directory holding `marketplace/` and `project/`.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new context with an empty marketplace.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_marketplace(&root.path().join("marketplace"));
        Self { root }
    }

    /// The marketplace directory.
    pub fn marketplace(&self) -> PathBuf {
        self.root.path().join("marketplace")
    }

    /// The profiles root inside the marketplace.
    pub fn profiles_root(&self) -> PathBuf {
        self.marketplace().join(PROFILES_DIR)
    }

    /// A project directory to swap into (not created).
    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    /// The `.claude` directory inside the project.
    pub fn project_config_dir(&self) -> PathBuf {
        self.project().join(CONFIG_DIR)
    }

    /// A store over the profiles root.
    pub fn store(&self) -> ProfileStore {
        ProfileStore::new(self.profiles_root())
    }

    /// Read a file under the project's `.claude` directory.
    pub fn read_config_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.project_config_dir().join(name)).expect("read config file")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
#[derive(Debug)]
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context backed by an empty marketplace.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Add a profile with the given `settings.json` content.
    pub fn with_profile(self, name: &str, settings: &str) -> Self {
        let dir = self.ctx.profiles_root().join(name);
        std::fs::create_dir_all(&dir).expect("create profile dir");
        std::fs::write(dir.join(SETTINGS_FILE), settings).expect("write settings.json");
        self
    }

    /// Add a `CLAUDE.md` to an existing profile.
    pub fn with_doc(self, name: &str, content: &str) -> Self {
        let path = self.ctx.profiles_root().join(name).join(DOC_FILE);
        std::fs::write(path, content).expect("write CLAUDE.md");
        self
    }

    /// Add a directory under the profiles root that is not a profile.
    pub fn with_plain_dir(self, relative: &str) -> Self {
        std::fs::create_dir_all(self.ctx.profiles_root().join(relative))
            .expect("create plain dir");
        self
    }

    /// Write a file into the project's `.claude` directory before the test.
    pub fn with_project_file(self, name: &str, content: &str) -> Self {
        let dir = self.ctx.project_config_dir();
        std::fs::create_dir_all(&dir).expect("create project .claude dir");
        std::fs::write(dir.join(name), content).expect("write project file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
