//! git-add-guard: PreToolUse hook for Claude Code.
//!
//! Reads the hook JSON from stdin and checks `tool_input.command`.
//! Exit codes:
//!   - 0: allowed (no output)
//!   - 1: input could not be decoded
//!   - 2: blocked by policy (reason and hint on stderr)
//!
//! `--dump-config` prints the effective configuration and exits.

use git_add_guard::config::Config;
use git_add_guard::eval::{FsProbe, Validator};
use git_add_guard::{hook, logging};

fn main() {
    let config = Config::load();

    if std::env::args().skip(1).any(|a| a == "--dump-config") {
        match config.to_toml() {
            Ok(toml) => print!("{toml}"),
            Err(e) => {
                eprintln!("git-add-guard: failed to render config: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    logging::init(&config.settings);

    let validator = Validator::from_config(&config, Box::new(FsProbe::current_dir()));
    let outcome = hook::run(
        std::io::stdin().lock(),
        &mut std::io::stderr().lock(),
        &validator,
        &config.settings.hint,
    );
    std::process::exit(outcome.exit_code());
}
