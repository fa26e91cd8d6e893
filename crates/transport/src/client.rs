use crate::commands::{DisplayTarget, Invocation};
use ledbar_core::{Frame, LedError, Power, Result, Transport};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

/// Drives a display by running its control utility once per command.
///
/// A child that outlives its timeout is killed and reported as
/// [`LedError::WriteTimeout`].
#[derive(Debug, Clone)]
pub struct CliTransport {
    program: String,
    target: DisplayTarget,
    /// Bound on reset / power / brightness calls.
    control_timeout: Duration,
}

impl CliTransport {
    pub fn new(program: impl Into<String>, target: DisplayTarget) -> Self {
        Self {
            program: program.into(),
            target,
            control_timeout: Duration::from_secs(90),
        }
    }

    pub fn with_control_timeout(mut self, timeout: Duration) -> Self {
        self.control_timeout = timeout;
        self
    }

    pub fn target(&self) -> &DisplayTarget {
        &self.target
    }

    async fn invoke(&self, args: &[String], timeout: Duration) -> Result<()> {
        debug!("{} {}", self.program, args.join(" "));

        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LedError::Transport(format!("cannot run '{}': {e}", self.program)))?;

        // Dropping the timed-out future drops the child, which kills it.
        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| LedError::WriteTimeout(timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LedError::Transport(format!(
                "'{} {}' failed ({}): {}",
                self.program,
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    async fn invoke_all(&self, calls: &[Invocation], timeout: Duration) -> Result<()> {
        for args in calls {
            self.invoke(args, timeout).await?;
        }
        Ok(())
    }
}

impl Transport for CliTransport {
    async fn write_frame(&mut self, frame: &Frame, timeout: Duration) -> Result<()> {
        let calls = self.target.frame(frame)?;
        self.invoke_all(&calls, timeout).await
    }

    async fn set_power(&mut self, power: Power) -> Result<()> {
        info!("Display {} power {power:?}", self.target.kind);
        self.invoke(&self.target.power(power), self.control_timeout).await
    }

    async fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.invoke(&self.target.brightness(level), self.control_timeout).await
    }

    async fn reset(&mut self) -> Result<()> {
        self.invoke(&self.target.reset(), self.control_timeout).await
    }
}
