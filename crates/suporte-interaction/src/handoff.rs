//! Messaging handoff channels.
//!
//! Both implementations are fire-and-forget: a failure to open the
//! messaging application is logged and never returned.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use suporte_core::ports::HandoffChannel;
use tracing::{debug, info, warn};

/// Opens the deep link with the platform URL handler
/// (`open` on macOS, `start` on Windows, `xdg-open` elsewhere).
#[derive(Debug, Clone, Default)]
pub struct SystemHandoff;

impl SystemHandoff {
    pub fn new() -> Self {
        Self
    }

    /// Spawns the opener detached from stdio and reaps it on a background thread.
    fn launch(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        Ok(std::thread::spawn(move || {
            let status = child.wait();
            if let Err(err) = &status {
                warn!(error = %err, "Messaging handoff opener did not exit cleanly");
            }
            status
        }))
    }

    fn opener_command(uri: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut c = Command::new("open");
            c.arg(uri);
            c
        }

        #[cfg(target_os = "windows")]
        {
            let mut c = Command::new("cmd");
            // empty title argument, otherwise `start` treats a quoted URI as the title
            c.args(["/C", "start", "", uri]);
            c
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut c = Command::new("xdg-open");
            c.arg(uri);
            c
        }
    }
}

impl HandoffChannel for SystemHandoff {
    fn open(&self, uri: &str) {
        match Self::launch(Self::opener_command(uri)) {
            Ok(_) => info!(uri_len = uri.len(), "Opened messaging handoff"),
            Err(err) => warn!(error = %err, "Failed to open messaging handoff"),
        }
    }
}

/// Logs the deep link instead of opening it, for headless hosts.
#[derive(Debug, Clone, Default)]
pub struct LoggingHandoff;

impl LoggingHandoff {
    pub fn new() -> Self {
        Self
    }
}

impl HandoffChannel for LoggingHandoff {
    fn open(&self, uri: &str) {
        info!(uri_len = uri.len(), "Messaging handoff ready");
        debug!(%uri, "Messaging handoff link");
    }
}
