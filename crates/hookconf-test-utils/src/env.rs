//! In-memory [`EnvironmentProvider`] with call accounting.
//!
//! Files are registered as INI text and parsed with the real reader, so tests
//! exercise the same parsing path as production while never touching disk.

use hookconf_core::{
    ConfigurationMapping, ConfigurationRegistry, EnvironmentProvider, Error, NormalizedPath,
    Result, ini,
};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Fake environment for registry and configuration tests.
///
/// # Example
///
/// ```rust
/// use hookconf_test_utils::FakeEnvironment;
/// use hookconf_test_utils::env::registry_with_root;
/// use std::sync::Arc;
///
/// let env = Arc::new(
///     FakeEnvironment::new().with_file("/conf/deploy.conf", "[deploy]\nhosts = a, b"),
/// );
/// let registry = registry_with_root(&env, "/conf");
///
/// assert!(registry.resolve_and_load("deploy").is_ok());
/// assert_eq!(env.parse_calls(), 1);
/// ```
#[derive(Debug)]
pub struct FakeEnvironment {
    username: String,
    files: Mutex<HashMap<PathBuf, String>>,
    secrets: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    parses: Mutex<Vec<PathBuf>>,
    username_calls: Mutex<usize>,
    prompt_delay: Option<Duration>,
}

impl Default for FakeEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeEnvironment {
    /// Empty environment whose effective user is `tester`.
    pub fn new() -> Self {
        Self {
            username: "tester".to_string(),
            files: Mutex::new(HashMap::new()),
            secrets: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            parses: Mutex::new(Vec::new()),
            username_calls: Mutex::new(0),
            prompt_delay: None,
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    /// Register INI `content` at `path`.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.add_file(path, content);
        self
    }

    /// Queue a secret answer for the next prompt.
    pub fn with_secret(self, secret: &str) -> Self {
        self.push_secret(secret);
        self
    }

    /// Make every prompt block for `delay` before answering.
    pub fn with_prompt_delay(mut self, delay: Duration) -> Self {
        self.prompt_delay = Some(delay);
        self
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.files
            .lock()
            .insert(native(path.as_ref()), content.to_string());
    }

    pub fn push_secret(&self, secret: &str) {
        self.secrets.lock().push_back(secret.to_string());
    }

    /// Wrap into an `Arc` and build a registry configured at `root`.
    pub fn registry(self, root: &str) -> Arc<ConfigurationRegistry> {
        registry_with_root(&Arc::new(self), root)
    }

    /// Number of `parse_config_file` calls so far.
    pub fn parse_calls(&self) -> usize {
        self.parses.lock().len()
    }

    /// Number of parses of one particular path.
    pub fn parse_calls_for(&self, path: impl AsRef<Path>) -> usize {
        let wanted = native(path.as_ref());
        self.parses.lock().iter().filter(|p| **p == wanted).count()
    }

    pub fn username_calls(&self) -> usize {
        *self.username_calls.lock()
    }

    /// Prompt texts shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

/// Build a registry configured at `root` that shares `env` with the caller,
/// so counters stay observable.
pub fn registry_with_root(env: &Arc<FakeEnvironment>, root: &str) -> Arc<ConfigurationRegistry> {
    let provider: Arc<dyn EnvironmentProvider> = env.clone();
    Arc::new(ConfigurationRegistry::with_root(provider, root))
}

impl EnvironmentProvider for FakeEnvironment {
    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().contains_key(&native(path))
    }

    fn parse_config_file(&self, path: &Path, with_sections: bool) -> Result<ConfigurationMapping> {
        let key = native(path);
        self.parses.lock().push(key.clone());

        let files = self.files.lock();
        let content = files.get(&key).ok_or_else(|| {
            Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such fake file"),
            )
        })?;
        ini::parse(content, path, with_sections)
    }

    fn effective_username(&self) -> Result<String> {
        *self.username_calls.lock() += 1;
        Ok(self.username.clone())
    }

    fn prompt_for_secret(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        if let Some(delay) = self.prompt_delay {
            thread::sleep(delay);
        }
        self.secrets
            .lock()
            .pop_front()
            .ok_or_else(|| Error::environment(format!("no scripted answer for prompt {prompt:?}")))
    }
}

fn native(path: &Path) -> PathBuf {
    NormalizedPath::new(path).to_native()
}
