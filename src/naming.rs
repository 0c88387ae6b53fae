//! Canonical naming of false positive observations.
//!
//! Session folders are named `<a>_<b>_<camera>-<azimuth>[_...]` and frames
//! `<timestamp>.jpg`. Outputs become
//! `pyronear_<camera>-<azimuth>_<timestamp>.{jpg,txt}`.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use crate::constants::{
    CANONICAL_PREFIX, DATE_FORMAT_INPUT, DATE_FORMAT_OUTPUT, IMAGES_DIR, IMAGE_EXTENSION,
    LABELS_DIR, LABEL_EXTENSION,
};
use crate::error::{DatasetError, Result};
use crate::types::{ObservationMetadata, Split};

/// Extract the camera reference, azimuth and capture time of an image
pub fn parse_filepath_image(filepath_image: &Path) -> Result<ObservationMetadata> {
    let folder_name = filepath_image
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .ok_or_else(|| DatasetError::malformed(filepath_image, "no parent folder name"))?;

    let camera_group_reference = folder_name.split('_').nth(2).ok_or_else(|| {
        DatasetError::malformed(
            filepath_image,
            format!("folder {} has no camera group token", folder_name),
        )
    })?;

    let mut parts: Vec<&str> = camera_group_reference.split('-').collect();
    let azimuth_str = parts.pop().unwrap_or_default();
    let camera_reference = parts.join("-");
    let azimuth = azimuth_str.parse::<i32>().map_err(|e| {
        DatasetError::malformed(
            filepath_image,
            format!("invalid azimuth {:?}: {}", azimuth_str, e),
        )
    })?;

    let datetime_str = filepath_image
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| DatasetError::malformed(filepath_image, "no file stem"))?;
    let datetime = NaiveDateTime::parse_from_str(datetime_str, DATE_FORMAT_INPUT).map_err(|e| {
        DatasetError::malformed(
            filepath_image,
            format!("invalid timestamp {:?}: {}", datetime_str, e),
        )
    })?;

    Ok(ObservationMetadata {
        camera_reference,
        datetime,
        azimuth,
    })
}

/// Canonical file stem of an observation, e.g. `pyronear_cam1-45_2024-01-02T03-04-05`
pub fn canonical_stem(metadata: &ObservationMetadata) -> String {
    let prefix = format!(
        "{}_{}-{}",
        CANONICAL_PREFIX, metadata.camera_reference, metadata.azimuth
    )
    .to_lowercase();
    format!("{}_{}", prefix, metadata.datetime.format(DATE_FORMAT_OUTPUT))
}

fn to_destination(
    save_dir: &Path,
    filepath_image: &Path,
    split: Split,
    kind_dir: &str,
    extension: &str,
) -> Result<PathBuf> {
    let metadata = parse_filepath_image(filepath_image)?;
    let filename = format!("{}.{}", canonical_stem(&metadata), extension);
    Ok(save_dir.join(kind_dir).join(split.as_str()).join(filename))
}

/// Destination of an image in the split dataset
pub fn to_filepath_image_destination(
    save_dir: &Path,
    filepath_image: &Path,
    split: Split,
) -> Result<PathBuf> {
    to_destination(save_dir, filepath_image, split, IMAGES_DIR, IMAGE_EXTENSION)
}

/// Destination of the label paired with an image in the split dataset
pub fn to_filepath_label_destination(
    save_dir: &Path,
    filepath_image: &Path,
    split: Split,
) -> Result<PathBuf> {
    to_destination(save_dir, filepath_image, split, LABELS_DIR, LABEL_EXTENSION)
}
