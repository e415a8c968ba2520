//! Doctor command - verify system requirements and configuration.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::process::Command;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Finn Doctor");
    println!();
    println!("Checking system requirements and configuration...\n");

    let mut checks = Vec::new();

    // Check external tools
    println!("{}", style("External Tools").bold());
    let tool_check = check_tool("yt-dlp", install_hint_ytdlp());
    tool_check.print();
    checks.push(tool_check);

    println!();

    // Check API keys
    println!("{}", style("API Configuration").bold());
    let api_check = check_groq_api_key(settings);
    api_check.print();
    checks.push(api_check);

    println!();

    // Check configuration
    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    println!();

    // Summary
    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before using Finn.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Finn is ready to use.");
    }

    Ok(())
}

/// Check if an external tool is available.
fn check_tool(name: &str, hint: &str) -> CheckResult {
    match Command::new(name).arg("--version").output() {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .unwrap_or("installed")
                .trim()
                .to_string();

            // Truncate long version strings
            let version_display = if version.len() > 50 {
                format!("{}...", &version[..50])
            } else {
                version
            };

            CheckResult::ok(name, &version_display)
        }
        Ok(_) => CheckResult::error(name, "installed but not working", hint),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            CheckResult::warning(
                name,
                "not found (only needed for video URLs)",
                hint,
            )
        }
        Err(e) => CheckResult::error(name, &format!("error: {}", e), hint),
    }
}

/// Check if a Groq API key is configured.
fn check_groq_api_key(settings: &Settings) -> CheckResult {
    let from_config = settings.groq.api_key.clone().unwrap_or_default();
    let key = std::env::var("GROQ_API_KEY").unwrap_or(from_config);

    if key.is_empty() {
        return CheckResult::error(
            "GROQ_API_KEY",
            "not set",
            "Set with: export GROQ_API_KEY='gsk_...'",
        );
    }

    if key.starts_with("gsk_") && key.len() > 20 {
        let masked = format!("{}...{}", &key[..7], &key[key.len() - 4..]);
        CheckResult::ok("GROQ_API_KEY", &format!("configured ({})", masked))
    } else {
        CheckResult::warning(
            "GROQ_API_KEY",
            "set but format looks unusual",
            "Expected format: gsk_... (Groq API key)",
        )
    }
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: finn config edit",
        )
    }
}

/// Platform-specific install hint for yt-dlp.
fn install_hint_ytdlp() -> &'static str {
    if cfg!(target_os = "macos") {
        "Install with: brew install yt-dlp"
    } else if cfg!(target_os = "linux") {
        "Install with: pip install yt-dlp (or your package manager)"
    } else {
        "Install from: https://github.com/yt-dlp/yt-dlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_ok() {
        let result = CheckResult::ok("test", "passed");
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.hint.is_none());
    }

    #[test]
    fn test_check_result_error() {
        let result = CheckResult::error("test", "failed", "fix it");
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.hint, Some("fix it".to_string()));
    }
}
