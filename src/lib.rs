//! git-add-guard: a PreToolUse hook for Claude Code that gates `git add`.
//!
//! Staging must name files explicitly. A `git add` command is blocked when
//! any argument is a bulk-add flag (`-A`, `--all`, `-u`, `--update`), contains
//! a glob marker (`*`, `?`), or names a directory (including `.` and `..`).
//! Every other command passes through untouched.
//!
//! # Architecture
//!
//! - **[`parse`]** — `git add` recognition and quote-aware argument splitting.
//! - **[`eval`]** — [`Validator`](eval::Validator), verdict types, injectable path probe.
//! - **[`rules`]** — Per-argument rules (bulk flag, flag, glob, directory).
//! - **[`config`]** — Embedded default policy + user overlay merge.
//! - **[`hook`]** — stdin JSON → verdict → exit code and stderr text.
//! - **[`logging`]** — Decision logging to `~/.local/share/git-add-guard/decisions.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Hook input errors.
pub mod error;
/// Evaluation engine: validator, verdicts, path probes.
pub mod eval;
/// Hook I/O wrapper.
pub mod hook;
/// File-based decision logging.
pub mod logging;
/// Command recognition and argument tokenizer.
pub mod parse;
/// Argument rule trait and implementations.
pub mod rules;

use eval::{FsProbe, Validator, Verdict};

/// Validate a command with the default policy against the current directory.
///
/// This is the main entry point for tests and simple usage.
/// For hook usage with the user config, build the [`Validator`] directly.
pub fn validate(command: &str) -> Verdict {
    let config = config::Config::default_config();
    let validator = Validator::from_config(&config, Box::new(FsProbe::current_dir()));
    validator.validate(command)
}
