//! Simulator device backed by `xcrun simctl` and the Simulator app
//!
//! Touch ID enrollment has no simctl subcommand; the Simulator app only
//! exposes it as a menu item, so enrollment goes through UI scripting via
//! `osascript`. Pasteboard access uses `simctl pbcopy` / `simctl pbpaste`.

use crate::device::Device;
use crate::error::{DriverError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// AppleScript that clicks Hardware > Touch ID > Toggle Enrolled State in
/// the Simulator app menu
const TOGGLE_ENROLLMENT_SCRIPT: &str = r#"tell application "System Events"
  tell process "Simulator"
    set dstMenuItem to menu item "Toggle Enrolled State" of menu 1 of menu item "Touch ID" of menu 1 of menu bar item "Hardware" of menu bar 1
    click dstMenuItem
  end tell
end tell"#;

/// An iOS simulator addressed by UDID (or the "booted" alias)
pub struct SimulatorDevice {
    udid: String,
}

impl SimulatorDevice {
    pub fn new(udid: impl Into<String>) -> Self {
        Self { udid: udid.into() }
    }

    /// Simulator for whichever device is currently booted
    pub fn booted() -> Self {
        Self::new("booted")
    }

    async fn run_simctl(&self, args: &[&str], stdin: Option<&str>) -> Result<String> {
        let xcrun = which::which("xcrun")
            .map_err(|_| DriverError::Device("xcrun not found. Is Xcode installed?".to_string()))?;

        let mut command = Command::new(xcrun);
        command
            .arg("simctl")
            .args(args)
            .arg(&self.udid)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn()?;
        if let Some(content) = stdin {
            let mut pipe = child
                .stdin
                .take()
                .ok_or_else(|| DriverError::Device("failed to open simctl stdin".to_string()))?;
            pipe.write_all(content.as_bytes()).await?;
            drop(pipe);
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DriverError::Device(format!(
                "simctl {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl Device for SimulatorDevice {
    fn udid(&self) -> &str {
        &self.udid
    }

    async fn enroll_touch_id(&self) -> Result<()> {
        let output = Command::new("osascript")
            .arg("-e")
            .arg(TOGGLE_ENROLLMENT_SCRIPT)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DriverError::Device(format!(
                "toggling Touch ID enrollment failed: {}",
                stderr.trim()
            )));
        }
        log::debug!("toggled Touch ID enrollment on {}", self.udid);
        Ok(())
    }

    async fn set_pasteboard(&self, content: &str) -> Result<()> {
        self.run_simctl(&["pbcopy"], Some(content)).await?;
        Ok(())
    }

    async fn get_pasteboard(&self) -> Result<String> {
        self.run_simctl(&["pbpaste"], None).await
    }
}
