use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Block,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Block => "block",
        }
    }
}

/// Which rule an argument broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A flag that stages everything (`-A`, `--all`, ...).
    BulkFlag,
    /// The argument contains a glob marker.
    Glob,
    /// The argument names a directory.
    Directory,
}

/// A rejected argument: the literal token and the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub token: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = &self.token;
        match self.kind {
            ViolationKind::BulkFlag => write!(f, "'{token}' stages too broadly (all files flag)."),
            ViolationKind::Glob => write!(f, "'{token}' contains a glob."),
            ViolationKind::Directory => write!(f, "'{token}' is a directory."),
        }?;
        f.write_str(" List files explicitly.")
    }
}

/// Outcome of validating one command. `reason` is empty when allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    pub reason: String,
    pub violation: Option<Violation>,
}

impl Verdict {
    pub fn allow() -> Self {
        Self {
            decision: Decision::Allow,
            reason: String::new(),
            violation: None,
        }
    }

    pub fn block(violation: Violation) -> Self {
        Self {
            decision: Decision::Block,
            reason: violation.to_string(),
            violation: Some(violation),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision == Decision::Allow
    }
}
