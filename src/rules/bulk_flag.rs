use crate::eval::{ArgContext, ViolationKind};
use crate::rules::{RuleOutcome, TokenRule};

pub struct BulkFlagRule {
    flags: Vec<String>,
}

impl BulkFlagRule {
    pub fn new(flags: &[String]) -> Self {
        Self {
            flags: flags.to_vec(),
        }
    }
}

impl TokenRule for BulkFlagRule {
    fn name(&self) -> &'static str {
        "bulk-flag"
    }

    fn check(&self, ctx: &ArgContext) -> RuleOutcome {
        if self.flags.iter().any(|f| f == ctx.raw()) {
            RuleOutcome::Reject(ViolationKind::BulkFlag)
        } else {
            RuleOutcome::Continue
        }
    }
}
