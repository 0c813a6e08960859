//! Hook entry point: JSON on stdin in, exit code and stderr text out.

use serde::Deserialize;
use std::io::{Read, Write};

use crate::error::Result;
use crate::eval::Validator;
use crate::logging;

#[derive(Deserialize)]
struct HookInput {
    tool_input: Option<ToolInput>,
}

#[derive(Deserialize)]
struct ToolInput {
    command: Option<String>,
}

/// How the hook finished; maps one-to-one onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command may run.
    Allowed,
    /// Input could not be read or decoded.
    InvalidInput,
    /// Command rejected by policy.
    Blocked,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Allowed => 0,
            Outcome::InvalidInput => 1,
            Outcome::Blocked => 2,
        }
    }
}

/// Read the hook payload and pull out `tool_input.command`.
/// Missing or null keys yield an empty command.
pub fn read_command<R: Read>(mut input: R) -> Result<String> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    let hook_input: HookInput = serde_json::from_str(&buf)?;
    Ok(hook_input
        .tool_input
        .and_then(|t| t.command)
        .unwrap_or_default())
}

/// Validate the command in `input`, writing any diagnostics to `diagnostics`.
///
/// Nothing is written when the command is allowed.
pub fn run<R: Read, W: Write>(
    input: R,
    diagnostics: &mut W,
    validator: &Validator,
    hint: &str,
) -> Outcome {
    let command = match read_command(input) {
        Ok(command) => command,
        Err(e) => {
            log::warn!("rejecting hook input: {e}");
            let _ = writeln!(diagnostics, "{e}");
            return Outcome::InvalidInput;
        }
    };

    let verdict = validator.validate(&command);
    logging::log_decision(&command, &verdict);

    if verdict.is_allowed() {
        return Outcome::Allowed;
    }

    let _ = writeln!(diagnostics, "Git Add Blocked: {}", verdict.reason);
    if !hint.is_empty() {
        let _ = writeln!(diagnostics, "{hint}");
    }
    Outcome::Blocked
}
