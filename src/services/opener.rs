//! Outbound links - hand tel:, mailto: and web URIs to the desktop
//!
//! `$BROWSER` wins when set (first entry of a colon-separated list, `%s`
//! replaced by the URI). Otherwise the platform opener is used.

use anyhow::{bail, Context, Result};
use std::env;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

pub trait LinkOpener {
    fn open(&mut self, uri: &str) -> Result<()>;
}

/// Build the program and arguments used to open `uri`
pub fn build_open_command(browser: Option<&str>, uri: &str) -> (String, Vec<String>) {
    if let Some(entry) = browser
        .and_then(|b| b.split(':').map(str::trim).find(|e| !e.is_empty()))
    {
        let mut parts = entry.split_whitespace();
        if let Some(program) = parts.next() {
            let mut args: Vec<String> = parts.map(|arg| arg.replace("%s", uri)).collect();
            if !entry.contains("%s") {
                args.push(uri.to_string());
            }
            return (program.to_string(), args);
        }
    }

    let program = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    };
    (program.to_string(), vec![uri.to_string()])
}

/// Start `program` detached from the terminal. A background thread waits on
/// the child so it is reaped when it exits.
pub fn spawn_detached(program: &str, args: &[String]) -> Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to run {}", program))?;
    Ok(thread::spawn(move || child.wait()))
}

/// Spawns the system opener without blocking the UI
pub struct SystemOpener {
    browser: Option<String>,
}

impl SystemOpener {
    pub fn from_env() -> Self {
        Self {
            browser: env::var("BROWSER").ok().filter(|b| !b.trim().is_empty()),
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&mut self, uri: &str) -> Result<()> {
        if uri.trim().is_empty() {
            bail!("Nothing to open");
        }
        let (program, args) = build_open_command(self.browser.as_deref(), uri);
        tracing::info!(%program, %uri, "opening link");

        spawn_detached(&program, &args)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_variable_appends_uri() {
        let (program, args) = build_open_command(Some("firefox --new-tab"), "https://t.me/x");
        assert_eq!(program, "firefox");
        assert_eq!(args, vec!["--new-tab", "https://t.me/x"]);
    }

    #[test]
    fn test_browser_placeholder_and_list() {
        let (program, args) = build_open_command(Some(":lynx %s:w3m"), "mailto:a@b.c");
        assert_eq!(program, "lynx");
        assert_eq!(args, vec!["mailto:a@b.c"]);
    }

    #[test]
    fn test_platform_fallback() {
        let (program, args) = build_open_command(None, "tel:+79119163364");
        assert!(["open", "explorer", "xdg-open"].contains(&program.as_str()));
        assert_eq!(args, vec!["tel:+79119163364"]);

        let (fallback, _) = build_open_command(Some("  "), "tel:1");
        assert_eq!(fallback, program);
    }

    #[cfg(unix)]
    #[test]
    fn test_detached_child_is_reaped() {
        let status = spawn_detached("true", &[]).unwrap().join().unwrap().unwrap();
        assert!(status.success());

        let status = spawn_detached("sh", &["-c".to_string(), "exit 3".to_string()])
            .unwrap()
            .join()
            .unwrap()
            .unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let err = spawn_detached("portfolio-tui-no-such-opener", &[]).unwrap_err();
        assert!(err.to_string().contains("portfolio-tui-no-such-opener"));
    }
}
