use crate::eval::{ArgContext, ViolationKind};
use crate::rules::{RuleOutcome, TokenRule};

pub struct GlobRule {
    markers: Vec<String>,
}

impl GlobRule {
    pub fn new(markers: &[String]) -> Self {
        Self {
            // An empty marker would match every argument
            markers: markers.iter().filter(|m| !m.is_empty()).cloned().collect(),
        }
    }
}

impl TokenRule for GlobRule {
    fn name(&self) -> &'static str {
        "glob"
    }

    fn check(&self, ctx: &ArgContext) -> RuleOutcome {
        let raw = ctx.raw();
        if self.markers.iter().any(|m| raw.contains(m.as_str())) {
            RuleOutcome::Reject(ViolationKind::Glob)
        } else {
            RuleOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::eval::KnownPaths;
    use crate::parse::Token;

    fn check_with(markers: &[String], raw: &str) -> RuleOutcome {
        let rule = GlobRule::new(markers);
        let token = Token::new(raw);
        let probe = KnownPaths::new();
        rule.check(&ArgContext::new(&token, &probe))
    }

    fn check(raw: &str) -> RuleOutcome {
        check_with(&Config::default_config().policy.glob_markers, raw)
    }

    #[test]
    fn star() {
        assert_eq!(check("*.py"), RuleOutcome::Reject(ViolationKind::Glob));
        assert_eq!(check("src/**/mod.rs"), RuleOutcome::Reject(ViolationKind::Glob));
        assert_eq!(check("*"), RuleOutcome::Reject(ViolationKind::Glob));
    }

    #[test]
    fn question_mark() {
        assert_eq!(check("file?.txt"), RuleOutcome::Reject(ViolationKind::Glob));
    }

    #[test]
    fn quoted_glob_still_rejected() {
        assert_eq!(check("\"*.py\""), RuleOutcome::Reject(ViolationKind::Glob));
    }

    #[test]
    fn plain_path() {
        assert_eq!(check("src/main.rs"), RuleOutcome::Continue);
    }

    #[test]
    fn star_only_policy() {
        let markers = vec!["*".to_string()];
        assert_eq!(check_with(&markers, "file?.txt"), RuleOutcome::Continue);
        assert_eq!(check_with(&markers, "*.txt"), RuleOutcome::Reject(ViolationKind::Glob));
    }

    #[test]
    fn empty_marker_ignored() {
        let markers = vec![String::new()];
        assert_eq!(check_with(&markers, "a.txt"), RuleOutcome::Continue);
    }
}
