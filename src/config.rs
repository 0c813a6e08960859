use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    /// Remediation line printed after the block reason.
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub log_decisions: bool,
}

/// How directory arguments are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryCheck {
    /// Ask the filesystem whether the argument names an existing directory.
    #[default]
    Filesystem,
    /// Only block the literal `.` and `..` arguments.
    Literal,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PolicyConfig {
    /// Flags that stage everything (`-A`, `--all`, ...).
    #[serde(default)]
    pub bulk_flags: Vec<String>,
    /// Substrings that mark an argument as a glob.
    #[serde(default)]
    pub glob_markers: Vec<String>,
    #[serde(default)]
    pub directory_check: DirectoryCheck,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    policy: PolicyOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    hint: Option<String>,
    log_decisions: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct PolicyOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    bulk_flags: Vec<String>,
    #[serde(default)]
    glob_markers: Vec<String>,
    directory_check: Option<DirectoryCheck>,
    #[serde(default)]
    remove_bulk_flags: Vec<String>,
    #[serde(default)]
    remove_glob_markers: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/git-add-guard/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/git-add-guard/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/git-add-guard/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("git-add-guard: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        if let Some(v) = s.hint {
            self.settings.hint = v;
        }
        if let Some(v) = s.log_decisions {
            self.settings.log_decisions = v;
        }

        let p = overlay.policy;
        merge_list(
            &mut self.policy.bulk_flags,
            p.bulk_flags,
            &p.remove_bulk_flags,
            p.replace,
        );
        merge_list(
            &mut self.policy.glob_markers,
            p.glob_markers,
            &p.remove_glob_markers,
            p.replace,
        );
        if let Some(v) = p.directory_check {
            self.policy.directory_check = v;
        }
    }

    /// Render the effective configuration as TOML (`--dump-config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
