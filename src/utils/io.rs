// src/utils/io.rs
use std::io;
use std::path::PathBuf;

/// Get the application data directory, creating it if needed
pub fn get_app_data_dir() -> io::Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "passkeeper", "passkeeper")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "could not determine data directory"))?;

    let data_dir = proj_dirs.data_local_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
