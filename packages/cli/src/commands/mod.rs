pub mod check;
pub mod generate;
pub mod init;

pub use check::{check, CheckArgs};
pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use trigger_codegen::DESCRIPTOR_SUFFIX;
use walkdir::WalkDir;

/// A single descriptor file, or every `*.trigger.json` below a directory
pub fn collect_descriptors(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        Ok(vec![input.to_path_buf()])
    } else if input.is_dir() {
        find_descriptor_files(input)
    } else {
        Err(anyhow!("Input path does not exist: {}", input.display()))
    }
}

fn find_descriptor_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_descriptor = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(DESCRIPTOR_SUFFIX))
            .unwrap_or(false);

        if path.is_file() && is_descriptor {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
