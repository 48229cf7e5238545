//! Linux adapter: `/etc/hostname`, `/etc/os-release`, and `$DISPLAY`.

use std::path::{Path, PathBuf};

use super::{env_username, system_hostname, PlatformInfo};

const HOSTNAME_FILE: &str = "/etc/hostname";
const OS_RELEASE_FILE: &str = "/etc/os-release";

#[derive(Debug, Clone)]
pub struct LinuxPlatform {
    hostname_file: PathBuf,
    os_release_file: PathBuf,
}

impl LinuxPlatform {
    pub fn new() -> Self {
        Self {
            hostname_file: PathBuf::from(HOSTNAME_FILE),
            os_release_file: PathBuf::from(OS_RELEASE_FILE),
        }
    }

    /// Adapter reading host files from custom locations.
    pub fn with_files(hostname_file: &Path, os_release_file: &Path) -> Self {
        Self {
            hostname_file: hostname_file.to_path_buf(),
            os_release_file: os_release_file.to_path_buf(),
        }
    }
}

impl Default for LinuxPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInfo for LinuxPlatform {
    fn hostname(&self) -> Option<String> {
        std::fs::read_to_string(&self.hostname_file)
            .ok()
            .and_then(|text| first_line(&text))
            .or_else(system_hostname)
    }

    fn os_id(&self) -> Option<String> {
        let text = std::fs::read_to_string(&self.os_release_file).ok()?;
        os_release_id(&text)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn username(&self) -> Option<String> {
        env_username()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn has_graphical_session(&self) -> bool {
        std::env::var_os("DISPLAY").is_some()
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// Value of the first `ID=` line, without surrounding quotes.
fn os_release_id(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.strip_prefix("ID="))
        .map(|id| id.trim().trim_matches('"').to_string())
        .filter(|id| !id.is_empty())
}
