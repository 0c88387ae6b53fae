//! Dataset curation tools for the pyronear wildfire smoke detector
//!
//! This library backs two command-line tools working on YOLO formatted data:
//! a smoke filter keeping only positive, allowed-provenance images, and a
//! folder level train/val/test splitter for the false positives dataset.

pub mod config;
pub mod constants;
pub mod error;
pub mod naming;
pub mod persist;
pub mod smoke;
pub mod split;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{FilterArgs, SplitArgs};
pub use error::{DatasetError, Result};
pub use naming::{
    parse_filepath_image, to_filepath_image_destination, to_filepath_label_destination,
};
pub use persist::persist_data_split;
pub use smoke::{
    copy_over, filepath_image_to_filepath_label, filter_dataset, list_dataset_images,
};
pub use split::{list_directories, make_data_split};
pub use types::{DataSplit, ObservationMetadata, Split};
