//! File System Utilities
//!
//! Configuration and data directory management.

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, LEGACY_CONFIG_DIR};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the configuration directory holding `preferences.toml`
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/artisan-locale/` or `$XDG_CONFIG_HOME/artisan-locale/`
/// - **macOS**: `~/Library/Application Support/ma.artisans.artisan-locale/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\artisans\artisan-locale\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    if let Some(home) = home_dir() {
        migrate_legacy(&home.join(LEGACY_CONFIG_DIR), config_dir);
    }

    Ok(config_dir.to_path_buf())
}

/// Move files from the legacy dotfile directory into `config_dir`
///
/// Files already present in `config_dir` win. The legacy directory is only
/// removed once every file has been copied.
fn migrate_legacy(old_config_path: &Path, config_dir: &Path) {
    if !old_config_path.is_dir() {
        return;
    }

    match copy_dir_files(old_config_path, config_dir) {
        Ok(()) => {
            if let Err(e) = fs::remove_dir_all(old_config_path) {
                warn!(error = %e, path = ?old_config_path, "Failed to remove legacy config dir");
            } else {
                info!(from = ?old_config_path, to = ?config_dir, "Migrated legacy config dir");
            }
        }
        Err(e) => {
            warn!(error = %e, path = ?old_config_path, "Legacy config migration failed, keeping old dir")
        }
    }
}

/// Get or create the data directory holding log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/artisan-locale/`
/// - **macOS**: `~/Library/Application Support/ma.artisans.artisan-locale/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\artisans\artisan-locale\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Copy files (not directories) from source to destination, skipping files
/// the destination already has
fn copy_dir_files(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;

        if entry.file_type()?.is_dir() {
            continue;
        }

        let target = dst.join(entry.file_name());
        if target.exists() {
            continue;
        }

        fs::copy(entry.path(), target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("artisan-locale-{name}-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn copy_dir_files_skips_subdirectories() {
        let src = scratch_dir("src");
        let dst = scratch_dir("dst");
        fs::write(src.join("preferences.toml"), "language = \"ar\"\n").expect("write file");
        fs::create_dir_all(src.join("nested")).expect("create nested");

        copy_dir_files(&src, &dst).expect("copy files");

        assert_eq!(
            fs::read_to_string(dst.join("preferences.toml")).expect("read copy"),
            "language = \"ar\"\n"
        );
        assert!(!dst.join("nested").exists());

        let _ = fs::remove_dir_all(&src);
        let _ = fs::remove_dir_all(&dst);
    }

    #[test]
    fn copy_dir_files_keeps_existing_destination_files() {
        let src = scratch_dir("src");
        let dst = scratch_dir("dst");
        fs::write(src.join("preferences.toml"), "language = \"fr\"\n").expect("write old");
        fs::write(dst.join("preferences.toml"), "language = \"ar\"\n").expect("write new");

        copy_dir_files(&src, &dst).expect("copy files");

        assert_eq!(
            fs::read_to_string(dst.join("preferences.toml")).expect("read"),
            "language = \"ar\"\n"
        );

        let _ = fs::remove_dir_all(&src);
        let _ = fs::remove_dir_all(&dst);
    }

    #[test]
    fn migrate_legacy_moves_files_and_removes_old_dir() {
        let home = scratch_dir("home");
        let old = home.join(".artisan-locale");
        let config = home.join("config");
        fs::create_dir_all(&old).expect("create old");
        fs::create_dir_all(&config).expect("create config");
        fs::write(old.join("preferences.toml"), "language = \"ar\"\n").expect("write old");

        migrate_legacy(&old, &config);

        assert!(!old.exists());
        assert_eq!(
            fs::read_to_string(config.join("preferences.toml")).expect("read"),
            "language = \"ar\"\n"
        );

        let _ = fs::remove_dir_all(&home);
    }

    #[test]
    fn migrate_legacy_keeps_old_dir_when_copy_fails() {
        let home = scratch_dir("home");
        let old = home.join(".artisan-locale");
        fs::create_dir_all(&old).expect("create old");
        fs::write(old.join("preferences.toml"), "language = \"ar\"\n").expect("write old");

        // Destination is missing, so every copy fails
        migrate_legacy(&old, &home.join("missing").join("config"));

        assert!(old.join("preferences.toml").exists());

        let _ = fs::remove_dir_all(&home);
    }

    #[test]
    fn migrate_legacy_without_old_dir_is_a_no_op() {
        let home = scratch_dir("home");
        let config = home.join("config");
        fs::create_dir_all(&config).expect("create config");

        migrate_legacy(&home.join(".artisan-locale"), &config);

        assert_eq!(fs::read_dir(&config).expect("read dir").count(), 0);

        let _ = fs::remove_dir_all(&home);
    }
}
