//! Data/config directories and version string

use std::path::PathBuf;

use directories::ProjectDirs;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        std::env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        std::env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref GIT_COMMIT_HASH: String =
        option_env!("_GIT_INFO").unwrap_or("unknown").to_string();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "postfeed", env!("CARGO_PKG_NAME"))
}

/// `$POSTFEED_DATA`, the platform data dir, or `./.data`
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = DATA_FOLDER.clone() {
        dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// `$POSTFEED_CONFIG`, the platform config dir, or `./.config`
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = CONFIG_FOLDER.clone() {
        dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();

    let config_dir_path = get_config_dir().display().to_string();
    let data_dir_path = get_data_dir().display().to_string();

    format!(
        "\
{}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}",
        GIT_COMMIT_HASH.clone()
    )
}
