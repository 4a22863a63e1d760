use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn log_path() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("fiftysound")
                .join("fiftysound.log")
        } else if let Some(proj_dirs) = ProjectDirs::from("", "", "fiftysound") {
            proj_dirs.data_local_dir().join("fiftysound.log")
        } else {
            PathBuf::from("fiftysound.log")
        }
    }
}
