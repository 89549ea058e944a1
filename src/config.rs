use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Flags that can be saved as defaults and merged with the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub perf: bool,
    pub render_debug_log: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            perf: self.perf || other.perf,
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
            output: other.output.clone().or_else(|| self.output.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("richedit").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("richedit")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("richedit").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("richedit")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".richeditrc")
}

/// Read saved flags from `path`; a missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    let flags = parse_flag_tokens(&tokens);
    tracing::debug!(path = %path.display(), ?flags, "loaded config");
    Ok(flags)
}

/// Write `flags` to `path` in command-line syntax, creating parent dirs.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# richedit defaults (saved with --save)".to_string()];
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(log) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", log.display()));
    }
    if let Some(output) = &flags.output {
        lines.push(format!("--output {}", output.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove the config file at `path` if present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the persistable flags out of raw arguments, ignoring everything else.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--perf" => flags.perf = true,
            "--render-debug-log" | "--output" | "-o" => {
                if let Some(next) = tokens.get(i + 1) {
                    let value = Some(PathBuf::from(next));
                    if token == "--render-debug-log" {
                        flags.render_debug_log = value;
                    } else {
                        flags.output = value;
                    }
                    i += 1;
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--render-debug-log=") {
                    flags.render_debug_log = Some(PathBuf::from(value));
                } else if let Some(value) = token.strip_prefix("--output=") {
                    flags.output = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    flags
}
