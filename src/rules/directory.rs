use crate::config::DirectoryCheck;
use crate::eval::{ArgContext, PathKind, ViolationKind};
use crate::rules::{RuleOutcome, TokenRule};

/// Rejects arguments that name a directory.
///
/// In `Filesystem` mode the path probe decides, which covers `.`, `..`,
/// `src`, `src/` and any other existing directory. Missing paths pass so
/// deletions can still be staged. In `Literal` mode only the exact tokens
/// `.` and `..` are rejected and the filesystem is never touched.
pub struct DirectoryRule {
    mode: DirectoryCheck,
}

impl DirectoryRule {
    pub fn new(mode: DirectoryCheck) -> Self {
        Self { mode }
    }
}

impl TokenRule for DirectoryRule {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn check(&self, ctx: &ArgContext) -> RuleOutcome {
        let is_dir = match self.mode {
            DirectoryCheck::Filesystem => ctx.path_kind() == PathKind::Directory,
            DirectoryCheck::Literal => matches!(ctx.raw(), "." | ".."),
        };
        if is_dir {
            RuleOutcome::Reject(ViolationKind::Directory)
        } else {
            RuleOutcome::Continue
        }
    }
}
