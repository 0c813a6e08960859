use crate::config::Settings;
use crate::eval::Verdict;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Install a file logger writing to ~/.local/share/git-add-guard/decisions.log.
/// Best-effort: failures are silently ignored (logging must never block the hook).
pub fn init(settings: &Settings) {
    if !settings.log_decisions {
        return;
    }
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/git-add-guard");
    let _ = std::fs::create_dir_all(&log_dir);

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("decisions.log"))
    else {
        return;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = WriteLogger::init(LevelFilter::Info, config, file);
}

/// Record one decision as a single tab-separated line.
pub fn log_decision(command: &str, verdict: &Verdict) {
    let cmd_truncated = one_line(&command.chars().take(200).collect::<String>());
    log::info!(
        "{decision}\t{cmd}\t{reason}",
        decision = verdict.decision.as_str(),
        cmd = cmd_truncated,
        reason = one_line(&verdict.reason),
    );
}

/// Compact multi-line text for the log (replace newlines with "; ").
fn one_line(text: &str) -> String {
    text.replace('\n', "; ")
}
