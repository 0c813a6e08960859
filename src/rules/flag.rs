use crate::eval::ArgContext;
use crate::rules::{RuleOutcome, TokenRule};

/// Lets `-p`, `--dry-run`, `--force`, `--` and friends through untouched.
/// Runs after the bulk-flag rule, so anything reaching it is a harmless flag.
pub struct FlagRule;

impl TokenRule for FlagRule {
    fn name(&self) -> &'static str {
        "flag"
    }

    fn check(&self, ctx: &ArgContext) -> RuleOutcome {
        if ctx.token.is_flag() {
            RuleOutcome::Accept
        } else {
            RuleOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::KnownPaths;
    use crate::parse::Token;

    fn check(raw: &str) -> RuleOutcome {
        let token = Token::new(raw);
        let probe = KnownPaths::new();
        FlagRule.check(&ArgContext::new(&token, &probe))
    }

    #[test]
    fn accepts_flags() {
        assert_eq!(check("-p"), RuleOutcome::Accept);
        assert_eq!(check("--dry-run"), RuleOutcome::Accept);
        assert_eq!(check("--"), RuleOutcome::Accept);
        // Flag values are not inspected
        assert_eq!(check("--pathspec-from-file=*.txt"), RuleOutcome::Accept);
    }

    #[test]
    fn passes_on_paths() {
        assert_eq!(check("src/main.rs"), RuleOutcome::Continue);
        assert_eq!(check("*.py"), RuleOutcome::Continue);
    }
}
