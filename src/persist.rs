use log::info;
use std::fs::OpenOptions;
use std::path::Path;

use crate::config::SplitArgs;
use crate::error::{DatasetError, Result};
use crate::naming::{to_filepath_image_destination, to_filepath_label_destination};
use crate::split::{list_directories, make_data_split};
use crate::types::{DataSplit, Split};
use crate::utils::{copy_file, create_progress_bar, ensure_dir, ensure_parent_dir};

// Create the file if needed, leaving existing content untouched
fn touch(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| DatasetError::io(path, e))
}

fn persist_split(images: &[std::path::PathBuf], split: Split, save_dir: &Path) -> Result<()> {
    let pb = create_progress_bar(images.len() as u64, split.label());
    for filepath_image in images {
        let image_destination = to_filepath_image_destination(save_dir, filepath_image, split)?;
        let label_destination = to_filepath_label_destination(save_dir, filepath_image, split)?;
        ensure_parent_dir(&image_destination)?;
        ensure_parent_dir(&label_destination)?;
        copy_file(filepath_image, &image_destination)?;
        touch(&label_destination)?;
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} processing complete", split.label()));
    Ok(())
}

/// Persist `data_split` in `save_dir` using the YOLO `images/<split>` and
/// `labels/<split>` layout.
///
/// Images are renamed canonically and every label is an empty file. The first
/// malformed name or I/O error aborts the run.
pub fn persist_data_split(data_split: &DataSplit, save_dir: &Path) -> Result<usize> {
    for split in Split::ALL {
        persist_split(data_split.get(split), split, save_dir)?;
    }
    Ok(data_split.len())
}

/// Run the whole false positives split pipeline
pub fn run(args: &SplitArgs) -> Result<()> {
    if !args.dir_dataset.exists() {
        return Err(DatasetError::MissingDatasetDir(args.dir_dataset.clone()));
    }

    info!("save results in {}", args.save_dir.display());
    ensure_dir(&args.save_dir)?;

    let folders = list_directories(&args.dir_dataset)?;
    info!(
        "found {} directories in {}",
        folders.len(),
        args.dir_dataset.display()
    );

    info!("split the data in train, val, test");
    let data_split = make_data_split(
        &args.dir_dataset,
        args.seed(),
        args.ratio_train_val,
        args.ratio_val_test,
    )?;
    info!(
        "datasplit: {} images in train - {} images in val - {} images in test.",
        data_split.train.len(),
        data_split.val.len(),
        data_split.test.len()
    );

    info!("persist the data split in {}.", args.save_dir.display());
    let persisted = persist_data_split(&data_split, &args.save_dir)?;
    info!("persisted {} images.", persisted);
    Ok(())
}
