//! Folder level train/val/test split of the false positives dataset.
//!
//! Every folder holds a single capture session, assigning whole folders to a
//! split keeps near-identical frames from leaking between train and val.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DatasetError, Result};
use crate::types::{DataSplit, Split};
use crate::utils::list_images;

/// List the immediate child directories of `dir_dataset`, in filesystem order
pub fn list_directories(dir_dataset: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_dataset).map_err(|e| DatasetError::io(dir_dataset, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DatasetError::io(dir_dataset, e))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

/// Both ratios must lie in `[0, 1]`
pub fn check_ratios(ratio_train_val: f64, ratio_val_test: f64) -> Result<()> {
    for (name, value) in [
        ("ratio_train_val", ratio_train_val),
        ("ratio_val_test", ratio_val_test),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(DatasetError::InvalidRatio { name, value });
        }
    }
    Ok(())
}

/// Which split the folder at shuffled position `idx` out of `number_folders` falls into.
///
/// The thresholds are compared unfloored against the integer index.
pub fn assign_split(
    idx: usize,
    number_folders: usize,
    ratio_train_val: f64,
    ratio_val_test: f64,
) -> Split {
    let idx = idx as f64;
    let n = number_folders as f64;
    if idx < n * ratio_train_val {
        Split::Train
    } else if idx < n * (ratio_train_val + (1.0 - ratio_train_val) * ratio_val_test) {
        Split::Val
    } else {
        Split::Test
    }
}

/// Shuffle `folders` with `random_seed` and group them by split.
///
/// Returns the train, val and test folders, each in shuffled order. Ratios are
/// expected to have passed [`check_ratios`].
pub fn split_folders<T>(
    mut folders: Vec<T>,
    random_seed: u64,
    ratio_train_val: f64,
    ratio_val_test: f64,
) -> (Vec<T>, Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(random_seed);
    folders.shuffle(&mut rng);
    let number_folders = folders.len();

    let mut train = Vec::new();
    let mut val = Vec::new();
    let mut test = Vec::new();
    for (idx, folder) in folders.into_iter().enumerate() {
        match assign_split(idx, number_folders, ratio_train_val, ratio_val_test) {
            Split::Train => train.push(folder),
            Split::Val => val.push(folder),
            Split::Test => test.push(folder),
        }
    }
    (train, val, test)
}

/// Perform the folder level data split of `dir_dataset`.
///
/// All images of a folder end up in the same split. Fails with
/// [`DatasetError::InvalidRatio`] when a ratio lies outside `[0, 1]`.
pub fn make_data_split(
    dir_dataset: &Path,
    random_seed: u64,
    ratio_train_val: f64,
    ratio_val_test: f64,
) -> Result<DataSplit> {
    check_ratios(ratio_train_val, ratio_val_test)?;

    let folders = list_directories(dir_dataset)?;
    let (train, val, test) = split_folders(folders, random_seed, ratio_train_val, ratio_val_test);

    let collect = |folders: Vec<PathBuf>, split: Split| -> Result<Vec<PathBuf>> {
        let mut images = Vec::new();
        for folder in folders {
            let folder_images = list_images(&folder)?;
            debug!(
                "{} -> {} ({} images)",
                folder.display(),
                split,
                folder_images.len()
            );
            images.extend(folder_images);
        }
        Ok(images)
    };

    Ok(DataSplit {
        train: collect(train, Split::Train)?,
        val: collect(val, Split::Val)?,
        test: collect(test, Split::Test)?,
    })
}
