//! macOS adapter: hostname from the system, fixed Apple id.

use std::path::PathBuf;

use super::{env_username, system_hostname, PlatformInfo};

#[derive(Debug, Clone, Copy, Default)]
pub struct MacPlatform;

impl PlatformInfo for MacPlatform {
    fn hostname(&self) -> Option<String> {
        system_hostname()
    }

    fn os_id(&self) -> Option<String> {
        Some("macos".to_string())
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
        true
    }
}
