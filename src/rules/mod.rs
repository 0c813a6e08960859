//! Per-argument classification rules.
//!
//! The validator runs every argument through its rules in order. A rule can
//! let the argument through to the next rule, accept it outright (skipping
//! the remaining rules), or reject it, which ends validation of the whole
//! command.

/// Exact-match "stage everything" flags (`-A`, `--all`, `-u`, `--update`).
pub mod bulk_flag;
/// Directory arguments, either by filesystem lookup or by literal `.`/`..`.
pub mod directory;
/// Any other flag is accepted as-is.
pub mod flag;
/// Glob markers (`*`, `?`) anywhere in the argument.
pub mod glob;

use crate::eval::{ArgContext, ViolationKind};

/// What a rule decided about one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Not this rule's business; try the next one.
    Continue,
    /// The argument is fine; skip the remaining rules.
    Accept,
    /// The argument breaks this rule.
    Reject(ViolationKind),
}

/// Trait for argument classification rules.
pub trait TokenRule: Send + Sync {
    /// Short name used in debug logging.
    fn name(&self) -> &'static str;

    /// Classify the argument in the given context.
    fn check(&self, ctx: &ArgContext) -> RuleOutcome;
}
