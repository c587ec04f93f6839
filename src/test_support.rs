//! Test doubles and fixtures shared by the unit tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use git2::{Repository, Signature};

use crate::config::{Config, Flags};
use crate::error::{Result, command};
use crate::git::Vcs;
use crate::registry::{Registry, RemotePackage};
use crate::tools::{Archive, Builder, Editor};
use crate::ui::Decide;

/// Configuration rooted at `cache_dir` with every flag off
pub fn test_config(cache_dir: &Path) -> Config {
    Config {
        cache_dir: cache_dir.to_path_buf(),
        db_name: "aur".to_string(),
        rpc_url: "http://127.0.0.1:9/rpc/v5".to_string(),
        git_url: "http://127.0.0.1:9".to_string(),
        editor: "true".to_string(),
        build_dir: std::env::temp_dir(),
        flags: Flags::default(),
    }
}

/// A maintained, unflagged package record
pub fn remote(name: &str, base: &str, version: &str) -> RemotePackage {
    RemotePackage {
        name: name.to_string(),
        description: None,
        maintainer: Some("maintainer".to_string()),
        num_votes: 0,
        popularity: 0.0,
        out_of_date: None,
        package_base: base.to_string(),
        version: version.to_string(),
    }
}

/// Accept one HTTP request on a loopback port and answer it with `status` and `body`
///
/// Returns the base URL to send the request to and a handle yielding the
/// request line the server saw.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (format!("http://{addr}"), handle)
}

/// Write `name` into the work tree and commit it on HEAD
pub fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) {
    let workdir = repo.workdir().unwrap();
    std::fs::write(workdir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let signature = Signature::now("aur test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap();
}

/// Registry answering from a fixed record list
pub struct StubRegistry {
    records: Vec<RemotePackage>,
    info_calls: Cell<usize>,
}

impl StubRegistry {
    pub fn new(records: Vec<RemotePackage>) -> Self {
        Self {
            records,
            info_calls: Cell::new(0),
        }
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.get()
    }
}

impl Registry for StubRegistry {
    fn info(&self, names: &[String]) -> Result<Vec<RemotePackage>> {
        self.info_calls.set(self.info_calls.get() + 1);
        Ok(self
            .records
            .iter()
            .filter(|record| names.contains(&record.name))
            .cloned()
            .collect())
    }

    fn search(&self, _term: &str) -> Result<Vec<RemotePackage>> {
        Ok(self.records.clone())
    }
}

/// Mirror, build, archive and editor double recording every call
///
/// Calls are logged as `<operation> <base>`, where the base is the name of
/// the mirror directory.
#[derive(Default)]
pub struct StubTools {
    log: RefCell<Vec<String>>,
    versions: HashMap<String, HashMap<String, String>>,
    upstream_changes: bool,
    failing_base: Option<String>,
}

fn base_of(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl StubTools {
    /// Versions `vcs_versions` reports for the recipe of `base`
    #[must_use]
    pub fn with_versions(mut self, base: &str, versions: &[(&str, &str)]) -> Self {
        self.versions.insert(
            base.to_string(),
            versions
                .iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
        );
        self
    }

    /// Report every fetched mirror as differing from upstream
    #[must_use]
    pub fn with_upstream_changes(mut self) -> Self {
        self.upstream_changes = true;
        self
    }

    /// Make the build of `base` fail like a non-zero makepkg exit
    #[must_use]
    pub fn failing_build(mut self, base: &str) -> Self {
        self.failing_base = Some(base.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Number of calls starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn vcs_calls(&self) -> usize {
        self.count("vcs_versions")
    }

    fn record(&self, call: String) {
        self.log.borrow_mut().push(call);
    }
}

impl Vcs for StubTools {
    fn clone_mirror(&self, _url: &str, dest: &Path) -> Result<()> {
        std::fs::create_dir_all(dest)?;
        std::fs::write(dest.join("PKGBUILD"), "pkgname=stub\n")?;
        self.record(format!("clone {}", base_of(dest)));
        Ok(())
    }

    fn fetch(&self, dir: &Path) -> Result<()> {
        self.record(format!("fetch {}", base_of(dir)));
        Ok(())
    }

    fn differs(&self, dir: &Path) -> Result<bool> {
        self.record(format!("differs {}", base_of(dir)));
        Ok(self.upstream_changes)
    }

    fn show_diff(&self, dir: &Path) -> Result<()> {
        self.record(format!("show_diff {}", base_of(dir)));
        Ok(())
    }

    fn merge(&self, dir: &Path) -> Result<()> {
        self.record(format!("merge {}", base_of(dir)));
        Ok(())
    }

    fn clean(&self, dir: &Path) -> Result<()> {
        self.record(format!("clean {}", base_of(dir)));
        Ok(())
    }
}

impl Builder for StubTools {
    fn build(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let base = base_of(dir);
        self.record(format!("build {base}"));
        if self.failing_base.as_deref() == Some(base.as_str()) {
            return Err(command::failed("makepkg", "exit status: 4"));
        }
        let cache = dir.parent().unwrap_or(dir);
        Ok(vec![cache.join(format!("{base}-1-1-x86_64.pkg.tar.zst"))])
    }

    fn vcs_versions(&self, dir: &Path) -> Result<HashMap<String, String>> {
        let base = base_of(dir);
        self.record(format!("vcs_versions {base}"));
        Ok(self.versions.get(&base).cloned().unwrap_or_default())
    }
}

impl Archive for StubTools {
    fn add(&self, packages: &[PathBuf]) -> Result<()> {
        let files: Vec<String> = packages.iter().map(|path| base_of(path)).collect();
        self.record(format!("add {}", files.join(" ")));
        Ok(())
    }

    fn remove(&self, names: &[String]) -> Result<()> {
        self.record(format!("remove {}", names.join(" ")));
        Ok(())
    }
}

impl Editor for StubTools {
    fn edit(&self, file: &Path) -> Result<()> {
        let dir = file.parent().map(base_of).unwrap_or_default();
        self.record(format!("edit {dir}/{}", base_of(file)));
        Ok(())
    }
}

/// Decision provider replaying queued answers, then answering yes
#[derive(Default)]
pub struct ScriptedAnswers {
    answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedAnswers {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Every prompt asked so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Decide for ScriptedAnswers {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or(true))
    }
}
