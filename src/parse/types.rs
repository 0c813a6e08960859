//! Types produced by the argument parser and consumed by the eval layer.

use std::path::{Path, PathBuf};

/// One `git add` argument.
///
/// `raw` is the text exactly as it appeared in the command, double quotes
/// included. Flag and glob checks compare against it, and it is what block
/// messages quote back to the caller.
///
/// `path` is the same argument as the shell would hand it to git: quotes
/// removed and a leading `~` expanded. It is only used for filesystem lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub raw: String,
    pub path: PathBuf,
}

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let unquoted = unquote(&raw);
        let expanded = if raw.starts_with('~') {
            shellexpand::tilde(&unquoted).into_owned()
        } else {
            unquoted
        };
        Self {
            raw,
            path: PathBuf::from(expanded),
        }
    }

    /// Whether the raw token looks like an option (`-p`, `--dry-run`, `--`).
    pub fn is_flag(&self) -> bool {
        self.raw.starts_with('-')
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Strip shell quoting from a single argument using shlex (POSIX rules).
///
/// Falls back to dropping double quotes when shlex rejects the word (e.g. a
/// stray apostrophe in `it's.txt`).
fn unquote(raw: &str) -> String {
    match shlex::split(raw) {
        Some(mut words) if words.len() == 1 => words.remove(0),
        _ => raw.replace('"', ""),
    }
}
