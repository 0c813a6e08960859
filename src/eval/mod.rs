pub mod context;
pub mod decision;
pub mod probe;

pub use context::ArgContext;
pub use decision::{Decision, Verdict, Violation, ViolationKind};
pub use probe::{FsProbe, KnownPaths, PathKind, PathProbe};

use crate::config::Config;
use crate::parse;
use crate::rules::{RuleOutcome, TokenRule};

/// Validates `git add` commands against an ordered list of argument rules.
pub struct Validator {
    rules: Vec<Box<dyn TokenRule>>,
    probe: Box<dyn PathProbe>,
}

impl Validator {
    /// Build the rule list from configuration.
    ///
    /// Order matters: bulk flags are rejected before the flag rule accepts
    /// every other `-` argument, and directory lookups only happen for
    /// arguments that are not globs.
    pub fn from_config(config: &Config, probe: Box<dyn PathProbe>) -> Self {
        use crate::rules::{
            bulk_flag::BulkFlagRule, directory::DirectoryRule, flag::FlagRule, glob::GlobRule,
        };

        let policy = &config.policy;
        let rules: Vec<Box<dyn TokenRule>> = vec![
            Box::new(BulkFlagRule::new(&policy.bulk_flags)),
            Box::new(FlagRule),
            Box::new(GlobRule::new(&policy.glob_markers)),
            Box::new(DirectoryRule::new(policy.directory_check)),
        ];

        Self { rules, probe }
    }

    /// Run one argument through the rules; `Some` if it is rejected.
    fn check_token(&self, token: &parse::Token) -> Option<ViolationKind> {
        let ctx = ArgContext::new(token, self.probe.as_ref());
        for rule in &self.rules {
            match rule.check(&ctx) {
                RuleOutcome::Continue => continue,
                RuleOutcome::Accept => {
                    log::debug!("{}: accepted by {}", token.as_str(), rule.name());
                    return None;
                }
                RuleOutcome::Reject(kind) => {
                    log::debug!("{}: rejected by {}", token.as_str(), rule.name());
                    return Some(kind);
                }
            }
        }
        None
    }

    /// Validate a full command string.
    ///
    /// Anything that is not `git add <args>` is allowed. Otherwise the first
    /// rejected argument decides the verdict and later arguments are never
    /// looked at.
    pub fn validate(&self, command: &str) -> Verdict {
        let Some(args) = parse::add_arguments(command) else {
            return Verdict::allow();
        };
        let args = args.trim();
        if args.is_empty() {
            return Verdict::allow();
        }

        for token in parse::tokenize(args) {
            if let Some(kind) = self.check_token(&token) {
                return Verdict::block(Violation {
                    token: token.raw,
                    kind,
                });
            }
        }

        Verdict::allow()
    }
}
