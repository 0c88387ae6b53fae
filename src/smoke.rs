//! Smoke filter pipeline.
//!
//! Keeps the images of a YOLO dataset whose label file is non-empty and whose
//! filename prefix is allowed, then mirrors them with their labels into a new
//! directory tree.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FilterArgs;
use crate::constants::{IMAGES_DIR, IMAGE_EXTENSION, LABELS_DIR, LABEL_EXTENSION};
use crate::error::{DatasetError, Result};
use crate::types::FilterStats;
use crate::utils::{copy_file, create_progress_bar, ensure_dir, ensure_parent_dir, list_images};

/// List all images from `dir_dataset`
pub fn list_dataset_images(dir_dataset: &Path) -> Result<Vec<PathBuf>> {
    list_images(dir_dataset)
}

/// Map an image filepath to its label filepath.
///
/// Every `images` occurrence becomes `labels` and every `.jpg` becomes `.txt`.
/// Paths that do not follow the `images/` convention are returned unchanged on
/// that part, the resulting label then usually does not exist.
pub fn filepath_image_to_filepath_label(filepath_image: &Path) -> PathBuf {
    let image_ext = format!(".{}", IMAGE_EXTENSION);
    let label_ext = format!(".{}", LABEL_EXTENSION);
    let label = filepath_image
        .to_string_lossy()
        .replace(IMAGES_DIR, LABELS_DIR)
        .replace(&image_ext, &label_ext);
    PathBuf::from(label)
}

/// Does the label file contain at least one annotated smoke?
pub fn has_smoke(filepath_label: &Path) -> bool {
    fs::metadata(filepath_label)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

/// Does the image filename start with one of the allowed prefixes?
///
/// Only the filename side is lower-cased.
pub fn has_dataset_prefix(filepath_image: &Path, allowed_prefixes: &[String]) -> bool {
    let Some(name) = filepath_image.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    let prefix = name.split('_').next().unwrap_or_default().to_lowercase();
    allowed_prefixes.iter().any(|allowed| *allowed == prefix)
}

/// Keep the images that contain smoke and carry an allowed prefix, in input order
pub fn filter_dataset(filepaths_images: &[PathBuf], allowed_prefixes: &[String]) -> Vec<PathBuf> {
    let pb = create_progress_bar(filepaths_images.len() as u64, "Filter");
    let mut stats = FilterStats {
        total_images: filepaths_images.len(),
        ..FilterStats::default()
    };

    let mut kept = Vec::new();
    for filepath_image in filepaths_images {
        let filepath_label = filepath_image_to_filepath_label(filepath_image);
        if !has_smoke(&filepath_label) {
            if filepath_label.is_file() {
                stats.empty_label += 1;
            } else {
                debug!("No label file for {}", filepath_image.display());
                stats.missing_label += 1;
            }
        } else if !has_dataset_prefix(filepath_image, allowed_prefixes) {
            stats.disallowed_prefix += 1;
        } else {
            kept.push(filepath_image.clone());
        }
        pb.inc(1);
    }
    pb.finish_with_message("Filtering complete");

    stats.kept = kept.len();
    stats.print_summary();
    kept
}

fn relative_to<'a>(path: &'a Path, dir_dataset: &Path) -> Result<&'a Path> {
    path.strip_prefix(dir_dataset)
        .map_err(|_| DatasetError::OutsideDatasetRoot {
            path: path.to_path_buf(),
            root: dir_dataset.to_path_buf(),
        })
}

/// Copy the images over to `save_dir` along with their labels, keeping their
/// path relative to `dir_dataset`.
///
/// Stops at the first failure, files copied so far are left in place.
pub fn copy_over(
    filepaths_images: &[PathBuf],
    save_dir: &Path,
    dir_dataset: &Path,
) -> Result<usize> {
    let pb = create_progress_bar(filepaths_images.len() as u64, "Copy");

    for filepath_image in filepaths_images {
        let filepath_label = filepath_image_to_filepath_label(filepath_image);
        let image_destination = save_dir.join(relative_to(filepath_image, dir_dataset)?);
        let label_destination = save_dir.join(relative_to(&filepath_label, dir_dataset)?);

        ensure_parent_dir(&image_destination)?;
        ensure_parent_dir(&label_destination)?;
        copy_file(filepath_image, &image_destination)?;
        copy_file(&filepath_label, &label_destination)?;
        pb.inc(1);
    }
    pb.finish_with_message("Copy complete");

    Ok(filepaths_images.len())
}

/// Run the whole smoke filter pipeline
pub fn run(args: &FilterArgs) -> Result<()> {
    if !args.dir_dataset.exists() {
        return Err(DatasetError::MissingDatasetDir(args.dir_dataset.clone()));
    }

    info!(
        "filtering smokes and saving results in {}",
        args.save_dir.display()
    );
    ensure_dir(&args.save_dir)?;

    let filepaths_images = list_dataset_images(&args.dir_dataset)?;
    info!(
        "found {} images in {}",
        filepaths_images.len(),
        args.dir_dataset.display()
    );

    let filepaths_images_with_smoke =
        filter_dataset(&filepaths_images, &args.allowed_dataset_prefixes);
    info!(
        "found {} images with smoke in {}",
        filepaths_images_with_smoke.len(),
        args.dir_dataset.display()
    );

    info!("copy over images and labels.");
    let copied = copy_over(
        &filepaths_images_with_smoke,
        &args.save_dir,
        &args.dir_dataset,
    )?;
    info!("copied {} images to {}", copied, args.save_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn prefixes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_filepath_image_to_filepath_label() {
        assert_eq!(
            filepath_image_to_filepath_label(Path::new("ds/images/a/b.jpg")),
            PathBuf::from("ds/labels/a/b.txt")
        );
        assert_eq!(
            filepath_image_to_filepath_label(Path::new("ds/frames/b.jpg")),
            PathBuf::from("ds/frames/b.txt")
        );
    }

    #[test]
    fn test_has_dataset_prefix() {
        let allowed = prefixes(&["pyronear", "awf"]);
        assert!(has_dataset_prefix(Path::new("images/pyronear_001.jpg"), &allowed));
        assert!(has_dataset_prefix(Path::new("images/AWF_cam_2.jpg"), &allowed));
        assert!(!has_dataset_prefix(Path::new("images/other_002.jpg"), &allowed));

        // the allowlist is not lower-cased
        let upper = prefixes(&["Pyronear"]);
        assert!(!has_dataset_prefix(Path::new("images/Pyronear_001.jpg"), &upper));
    }

    #[test]
    fn test_has_smoke() {
        let temp_dir = tempfile::tempdir().unwrap();
        let empty = temp_dir.path().join("empty.txt");
        let full = temp_dir.path().join("full.txt");
        fs::File::create(&empty).unwrap();
        let mut file = fs::File::create(&full).unwrap();
        writeln!(file, "0 0.5 0.5 0.1 0.1").unwrap();

        assert!(has_smoke(&full));
        assert!(!has_smoke(&empty));
        assert!(!has_smoke(&temp_dir.path().join("missing.txt")));
        assert!(!has_smoke(temp_dir.path()));
    }

    #[test]
    fn test_copy_over_rejects_paths_outside_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = copy_over(
            &[PathBuf::from("/elsewhere/images/x.jpg")],
            &temp_dir.path().join("out"),
            temp_dir.path(),
        );
        assert!(matches!(
            result,
            Err(DatasetError::OutsideDatasetRoot { .. })
        ));
    }
}
