use crate::eval::probe::{PathKind, PathProbe};
use crate::parse::Token;

/// Context for classifying a single `git add` argument.
pub struct ArgContext<'a> {
    /// The argument under inspection.
    pub token: &'a Token,
    /// Filesystem lookup capability.
    pub probe: &'a dyn PathProbe,
}

impl<'a> ArgContext<'a> {
    pub fn new(token: &'a Token, probe: &'a dyn PathProbe) -> Self {
        Self { token, probe }
    }

    /// The argument exactly as written.
    pub fn raw(&self) -> &str {
        self.token.as_str()
    }

    /// Ask the probe what the argument's path names right now.
    pub fn path_kind(&self) -> PathKind {
        self.probe.classify(self.token.path())
    }
}
