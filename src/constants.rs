//! Naming conventions shared by both pipelines.

/// Timestamp layout of the file stems in the false positives dataset.
pub const DATE_FORMAT_INPUT: &str = "%Y-%m-%dT%H-%M-%S";

/// Timestamp layout used in canonical output file names.
pub const DATE_FORMAT_OUTPUT: &str = "%Y-%m-%dT%H-%M-%S";

/// Provenance prefix given to every renamed observation.
pub const CANONICAL_PREFIX: &str = "pyronear";

pub const IMAGES_DIR: &str = "images";
pub const LABELS_DIR: &str = "labels";
pub const IMAGE_EXTENSION: &str = "jpg";
pub const LABEL_EXTENSION: &str = "txt";

/// Dataset prefixes kept by the smoke filter when none are given.
pub const DEFAULT_ALLOWED_PREFIXES: &[&str] = &["pyronear", "awf", "random", "adf"];
