//! Filesystem lookups behind a trait so the validator can run against a fake.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// What a path names at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
    Missing,
}

/// Classifies argument paths. Implementations must not cache: the answer
/// reflects the state at the time of the call.
pub trait PathProbe: Send + Sync {
    fn classify(&self, path: &Path) -> PathKind;
}

/// Probe backed by the real filesystem.
///
/// Relative paths are resolved against `root`. Symlinks are followed, so a
/// link to a directory classifies as a directory.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve relative paths against the process working directory.
    pub fn current_dir() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(root)
    }
}

impl PathProbe for FsProbe {
    fn classify(&self, path: &Path) -> PathKind {
        if path.as_os_str().is_empty() {
            return PathKind::Missing;
        }
        match std::fs::metadata(self.root.join(path)) {
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            Ok(_) => PathKind::File,
            Err(_) => PathKind::Missing,
        }
    }
}

/// In-memory probe over a fixed set of known paths.
///
/// `./` prefixes and trailing slashes are ignored, and paths made only of
/// `.`/`..` components are always directories.
#[derive(Debug, Clone, Default)]
pub struct KnownPaths {
    dirs: HashSet<PathBuf>,
    files: HashSet<PathBuf>,
}

impl KnownPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.dirs
            .extend(dirs.into_iter().map(|d| normalize(d.as_ref())));
        self
    }

    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files
            .extend(files.into_iter().map(|f| normalize(f.as_ref())));
        self
    }
}

/// Drop `.` components; `Path` comparison already ignores trailing slashes.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl PathProbe for KnownPaths {
    fn classify(&self, path: &Path) -> PathKind {
        if path.as_os_str().is_empty() {
            return PathKind::Missing;
        }
        if path
            .components()
            .all(|c| matches!(c, Component::CurDir | Component::ParentDir))
        {
            return PathKind::Directory;
        }
        let path = normalize(path);
        if self.dirs.contains(&path) {
            PathKind::Directory
        } else if self.files.contains(&path) {
            PathKind::File
        } else {
            PathKind::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/nested")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
        dir
    }

    #[test]
    fn fs_directory() {
        let dir = fixture();
        let probe = FsProbe::new(dir.path());
        assert_eq!(probe.classify(Path::new("src")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("src/")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("src/nested")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new(".")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("..")), PathKind::Directory);
    }

    #[test]
    fn fs_file_and_missing() {
        let dir = fixture();
        let probe = FsProbe::new(dir.path());
        assert_eq!(probe.classify(Path::new("src/main.rs")), PathKind::File);
        assert_eq!(probe.classify(Path::new("src/gone.rs")), PathKind::Missing);
        assert_eq!(probe.classify(Path::new("")), PathKind::Missing);
    }

    #[test]
    fn fs_absolute_path_ignores_root() {
        let dir = fixture();
        let probe = FsProbe::new("/nonexistent-root");
        assert_eq!(probe.classify(&dir.path().join("src")), PathKind::Directory);
    }

    #[test]
    fn fs_reflects_current_state() {
        let dir = fixture();
        let probe = FsProbe::new(dir.path());
        assert_eq!(probe.classify(Path::new("later")), PathKind::Missing);
        fs::create_dir(dir.path().join("later")).unwrap();
        assert_eq!(probe.classify(Path::new("later")), PathKind::Directory);
    }

    #[test]
    fn known_paths_normalizes() {
        let probe = KnownPaths::new()
            .with_dirs(["src", "tests/unit"])
            .with_files(["src/main.rs"]);
        assert_eq!(probe.classify(Path::new("./src/")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("tests/unit/")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("./src/main.rs")), PathKind::File);
        assert_eq!(probe.classify(Path::new("docs")), PathKind::Missing);
    }

    #[test]
    fn known_paths_dot_components() {
        let probe = KnownPaths::new();
        assert_eq!(probe.classify(Path::new(".")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("..")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("../..")), PathKind::Directory);
        assert_eq!(probe.classify(Path::new("./")), PathKind::Directory);
    }
}
