//! Profile persistence (load/save).

use std::path::PathBuf;

use crate::profile::{self, TuningProfile};

const PROFILE_FILENAME: &str = "decmath_tuning.json";
const CONFIG_DIR_NAME: &str = "decmath";

/// Load the tuning profile from the standard location.
/// Tries the XDG config dir first, then the working directory.
#[must_use]
pub fn load_profile() -> Option<TuningProfile> {
    if let Some(path) = xdg_profile_path() {
        if path.exists() {
            if let Some(p) = load_from_path(&path) {
                return Some(p);
            }
        }
    }

    let path = cwd_profile_path();
    if path.exists() {
        return load_from_path(&path);
    }

    None
}

/// Load a profile and validate it against the current environment.
/// Returns `None` if the profile is incompatible, invalid, or for a different CPU.
pub fn load_validated_profile() -> Option<TuningProfile> {
    let p = load_profile()?;

    if !p.is_compatible() {
        tracing::info!("Profile version mismatch, ignoring cached profile");
        return None;
    }
    if !p.is_valid() {
        tracing::info!("Profile has invalid thresholds, ignoring cached profile");
        return None;
    }

    let current_fp = profile::cpu_fingerprint();
    if !p.matches_cpu(&current_fp) {
        tracing::info!("Profile CPU mismatch, ignoring cached profile");
        return None;
    }

    Some(p)
}

/// Save the tuning profile to the XDG config directory.
/// Falls back to the working directory if the config dir can't be created.
pub fn save_profile(p: &TuningProfile) -> std::io::Result<()> {
    let path = if let Some(xdg_path) = xdg_profile_path() {
        if let Some(parent) = xdg_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        xdg_path
    } else {
        cwd_profile_path()
    };

    save_to_path(p, &path)
}

/// Save the profile to a specific path.
pub fn save_to_path(p: &TuningProfile, path: &std::path::Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(p).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}

/// Delete the saved profile if it exists.
pub fn delete_profile() -> std::io::Result<bool> {
    if let Some(path) = xdg_profile_path() {
        if path.exists() {
            std::fs::remove_file(&path)?;
            return Ok(true);
        }
    }
    let path = cwd_profile_path();
    if path.exists() {
        std::fs::remove_file(&path)?;
        return Ok(true);
    }
    Ok(false)
}

fn load_from_path(path: &std::path::Path) -> Option<TuningProfile> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn xdg_profile_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PROFILE_FILENAME))
}

fn cwd_profile_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{PROFILE_FILENAME}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent() {
        // Should not panic when no profile exists
        let _ = load_profile();
    }

    #[test]
    fn save_and_load_to_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let p = TuningProfile::default();
        save_to_path(&p, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.karatsuba_threshold, p.karatsuba_threshold);
        assert_eq!(loaded.version, profile::PROFILE_VERSION);
    }

    #[test]
    fn load_invalid_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"not json").unwrap();
        assert!(load_from_path(&path).is_none());
    }

    #[test]
    fn stale_version_detected_after_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROFILE_FILENAME);
        let mut p = TuningProfile::default();
        p.version = 999;
        save_to_path(&p, &path).unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert!(!loaded.is_compatible());
    }

    #[test]
    fn delete_profile_does_not_fail_without_a_profile() {
        // The standard locations can't be redirected without touching the
        // environment, so this checks the call is well-behaved either way:
        // Ok(true) when a profile existed, Ok(false) when none did.
        let result = delete_profile();
        assert!(result.is_ok());
    }

    #[test]
    fn xdg_profile_path_contains_config_dir() {
        if let Some(path) = xdg_profile_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains(CONFIG_DIR_NAME));
            assert!(path_str.contains(PROFILE_FILENAME));
        }
        // If HOME is not set the XDG path is unavailable, which is fine
    }

    #[test]
    fn cwd_profile_path_ends_with_filename() {
        let path = cwd_profile_path();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.contains(PROFILE_FILENAME));
    }
}
