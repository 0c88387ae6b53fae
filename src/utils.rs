use glob::{glob, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::constants::IMAGE_EXTENSION;
use crate::error::{DatasetError, Result};

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let template = format!(
        "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
        label
    );
    let style = match ProgressStyle::default_bar().template(&template) {
        Ok(style) => style.progress_chars("#>-"),
        Err(_) => ProgressStyle::default_bar(),
    };
    pb.set_style(style);
    pb
}

/// Recursively list every `*.jpg` file under `dir`, the directory itself included.
///
/// Paths come back in glob traversal order and always start with `dir` as
/// given, so they can be stripped of it again.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let root = Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/**/*.{}", root.trim_end_matches('/'), IMAGE_EXTENSION);
    // glob drops `./` components from the paths it yields
    let glob_root: PathBuf = dir
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let mut images = Vec::new();
    for entry in glob(&pattern)? {
        match entry {
            Ok(path) if path.is_file() => {
                let relative = path.strip_prefix(&glob_root).unwrap_or(&path);
                images.push(dir.join(relative));
            }
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable entry under {}: {}", dir.display(), e),
        }
    }
    Ok(images)
}

/// Create `path` and its missing ancestors, tolerating existing directories
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| DatasetError::io(path, e))
}

/// Create the parent directory of `path` if there is one
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Copy `from` to `to`, overwriting any existing file
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| DatasetError::io(from, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_list_images_is_recursive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        File::create(root.join("top.jpg")).unwrap();
        File::create(root.join("a/b/deep.jpg")).unwrap();
        File::create(root.join("a/notes.txt")).unwrap();
        fs::create_dir_all(root.join("a/dir.jpg")).unwrap();

        let mut images = list_images(root).unwrap();
        images.sort();

        assert_eq!(images, vec![root.join("a/b/deep.jpg"), root.join("top.jpg")]);
    }

    #[test]
    fn test_list_images_escapes_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("run[1]");
        fs::create_dir_all(&root).unwrap();
        File::create(root.join("frame.jpg")).unwrap();

        assert_eq!(list_images(&root).unwrap(), vec![root.join("frame.jpg")]);
    }

    #[test]
    fn test_list_images_keeps_relative_root() {
        let temp_dir = tempfile::tempdir_in(".").unwrap();
        let name = temp_dir.path().file_name().unwrap().to_string_lossy();
        fs::create_dir_all(temp_dir.path().join("ds/images")).unwrap();
        File::create(temp_dir.path().join("ds/images/frame.jpg")).unwrap();

        let root = PathBuf::from(format!("./{}/ds/", name));
        let images = list_images(&root).unwrap();

        assert_eq!(images, vec![root.join("images/frame.jpg")]);
        assert!(images[0].strip_prefix(&root).is_ok());
    }

    #[test]
    fn test_ensure_parent_dir_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("x/y/z.txt");
        ensure_parent_dir(&target).unwrap();
        ensure_parent_dir(&target).unwrap();
        assert!(temp_dir.path().join("x/y").is_dir());
    }
}
