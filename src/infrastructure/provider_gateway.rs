use std::sync::Mutex;

use color_eyre::eyre::Result;

/// Performs the external navigation a provider button triggers. In the
/// hosted UI this is a full-page browser navigation; here the real
/// implementation hands the URL to the platform opener.
pub trait ProviderGateway: Send + Sync {
    fn open(&self, path: &str) -> Result<()>;
}

/// Opens provider URLs with the platform opener (`xdg-open`, or `open` on
/// macOS). The configured base URL is prepended to the provider path.
#[derive(Debug, Clone, Default)]
pub struct SystemGateway {
    base_url: String,
}

impl SystemGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn resolve(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }

    #[cfg(target_os = "macos")]
    const OPENER: &'static str = "open";
    #[cfg(not(target_os = "macos"))]
    const OPENER: &'static str = "xdg-open";
}

impl ProviderGateway for SystemGateway {
    fn open(&self, path: &str) -> Result<()> {
        let url = self.resolve(path);
        log::info!("Opening {url} with {}", Self::OPENER);
        let mut command = std::process::Command::new(Self::OPENER);
        command.arg(&url);
        let _reaper = spawn_detached(command)?;
        Ok(())
    }
}

/// Spawns the command and waits for it on a background thread, so the
/// exited opener never lingers as a zombie child.
fn spawn_detached(mut command: std::process::Command) -> Result<std::thread::JoinHandle<()>> {
    let mut child = command
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()?;
    Ok(std::thread::spawn(move || {
        let _ = child.wait();
    }))
}

/// Test-oriented implementation: records every opened path and never
/// touches the system.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    opened: Mutex<Vec<String>>,
}

impl RecordingGateway {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("opened lock").clone()
    }
}

impl ProviderGateway for RecordingGateway {
    fn open(&self, path: &str) -> Result<()> {
        self.opened.lock().expect("opened lock").push(path.to_string());
        Ok(())
    }
}
