//! Host facts shown in the subtitle line.
//!
//! Layout and dispatch never branch on the OS. Everything host-specific goes
//! through `PlatformInfo`, and `detect()` is the one place that picks an
//! adapter at compile time.

use std::path::{Path, PathBuf};

#[cfg(not(target_os = "macos"))]
mod linux;
#[cfg(target_os = "macos")]
mod macos;

#[cfg(not(target_os = "macos"))]
pub use linux::LinuxPlatform;
#[cfg(target_os = "macos")]
pub use macos::MacPlatform;

/// Fallback text when a host fact is unavailable.
pub const UNKNOWN: &str = "unknown";

/// Generic penguin glyph for unrecognized distributions.
pub const FALLBACK_OS_ICON: &str = "\u{f31a} ";

/// Host capability interface consumed by the screen composer.
///
/// Every lookup is optional; absence degrades to fallback text.
pub trait PlatformInfo {
    /// Short machine name.
    fn hostname(&self) -> Option<String>;
    /// Distribution identifier, such as `arch` or `macos`.
    fn os_id(&self) -> Option<String>;
    fn home_dir(&self) -> Option<PathBuf>;
    fn username(&self) -> Option<String>;
    fn current_dir(&self) -> Option<PathBuf>;
    /// Whether a graphical session is present. The greeter stays silent
    /// otherwise.
    fn has_graphical_session(&self) -> bool;
}

/// Adapter for the platform this binary was compiled for.
#[cfg(not(target_os = "macos"))]
pub fn detect() -> LinuxPlatform {
    LinuxPlatform::new()
}

/// Adapter for the platform this binary was compiled for.
#[cfg(target_os = "macos")]
pub fn detect() -> MacPlatform {
    MacPlatform
}

/// Map a distribution identifier to its Nerd Font glyph.
pub fn os_icon(id: Option<&str>) -> &'static str {
    let Some(id) = id else {
        return FALLBACK_OS_ICON;
    };
    match id.trim_matches('"') {
        "arch" => "\u{f303} ",
        "debian" => "\u{ebc5} ",
        "ubuntu" => "\u{f0548} ",
        "fedora" => "\u{f30a} ",
        "nixos" => "\u{f313} ",
        "linuxmint" => "\u{f08ed} ",
        "gentoo" => "\u{e7e6} ",
        "endeavouros" => "\u{f322} ",
        "macos" => "\u{f302} ",
        _ => FALLBACK_OS_ICON,
    }
}

/// Strings derived from the platform for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSummary {
    pub os_icon: &'static str,
    pub username: String,
    pub path: String,
    pub hostname: String,
}

impl HostSummary {
    pub fn collect<P: PlatformInfo + ?Sized>(platform: &P) -> Self {
        let path = match platform.current_dir() {
            Some(dir) => abbreviate_home(&dir, platform.home_dir().as_deref()),
            None => UNKNOWN.to_string(),
        };
        Self {
            os_icon: os_icon(platform.os_id().as_deref()),
            username: platform.username().unwrap_or_else(|| UNKNOWN.to_string()),
            path,
            hostname: platform.hostname().unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Replace a leading home directory with `~`.
pub fn abbreviate_home(path: &Path, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return path.display().to_string();
    };
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Read `$USER`, the login name the shell exported.
pub(crate) fn env_username() -> Option<String> {
    std::env::var("USER").ok().filter(|name| !name.is_empty())
}

/// Hostname from the OS, via the `hostname` crate.
pub(crate) fn system_hostname() -> Option<String> {
    hostname::get()
        .ok()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPlatform {
        os_id: Option<&'static str>,
        home: Option<&'static str>,
        cwd: Option<&'static str>,
    }

    impl PlatformInfo for FixedPlatform {
        fn hostname(&self) -> Option<String> {
            None
        }
        fn os_id(&self) -> Option<String> {
            self.os_id.map(str::to_string)
        }
        fn home_dir(&self) -> Option<PathBuf> {
            self.home.map(PathBuf::from)
        }
        fn username(&self) -> Option<String> {
            Some("ana".to_string())
        }
        fn current_dir(&self) -> Option<PathBuf> {
            self.cwd.map(PathBuf::from)
        }
        fn has_graphical_session(&self) -> bool {
            true
        }
    }

    #[test]
    fn os_icon_matches_known_ids_and_quoted_endeavour() {
        assert_eq!(os_icon(Some("arch")), "\u{f303} ");
        assert_eq!(os_icon(Some("endeavouros")), "\u{f322} ");
        assert_eq!(os_icon(Some("\"endeavouros\"")), "\u{f322} ");
        assert_eq!(os_icon(Some("ubuntu")), "\u{f0548} ");
    }

    #[test]
    fn os_icon_falls_back_for_unknown_or_absent_ids() {
        assert_eq!(os_icon(Some("plan9")), FALLBACK_OS_ICON);
        assert_eq!(os_icon(None), FALLBACK_OS_ICON);
    }

    #[test]
    fn abbreviate_home_only_replaces_a_real_prefix() {
        let home = Some(Path::new("/home/ana"));
        assert_eq!(abbreviate_home(Path::new("/home/ana"), home), "~");
        assert_eq!(abbreviate_home(Path::new("/home/ana/src"), home), "~/src");
        assert_eq!(abbreviate_home(Path::new("/home/anabel"), home), "/home/anabel");
        assert_eq!(abbreviate_home(Path::new("/etc"), None), "/etc");
    }

    #[test]
    fn host_summary_degrades_to_fallback_text() {
        let summary = HostSummary::collect(&FixedPlatform {
            os_id: None,
            home: None,
            cwd: None,
        });
        assert_eq!(summary.hostname, UNKNOWN);
        assert_eq!(summary.path, UNKNOWN);
        assert_eq!(summary.os_icon, FALLBACK_OS_ICON);
        assert_eq!(summary.username, "ana");
    }

    #[test]
    fn host_summary_abbreviates_working_directory() {
        let summary = HostSummary::collect(&FixedPlatform {
            os_id: Some("nixos"),
            home: Some("/home/ana"),
            cwd: Some("/home/ana/dotfiles"),
        });
        assert_eq!(summary.path, "~/dotfiles");
        assert_eq!(summary.os_icon, "\u{f313} ");
    }
}
