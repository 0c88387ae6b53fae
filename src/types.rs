use chrono::NaiveDateTime;
use std::fmt;
use std::path::PathBuf;

/// One of the three dataset splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    /// Directory name of the split in the YOLO scaffolding
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Split::Train => "Train",
            Split::Val => "Val",
            Split::Test => "Test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Image filepaths assigned to the train, val and test splits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSplit {
    pub train: Vec<PathBuf>,
    pub val: Vec<PathBuf>,
    pub test: Vec<PathBuf>,
}

impl DataSplit {
    pub fn get(&self, split: Split) -> &[PathBuf] {
        match split {
            Split::Train => &self.train,
            Split::Val => &self.val,
            Split::Test => &self.test,
        }
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every image along with its split, train first
    pub fn iter(&self) -> impl Iterator<Item = (Split, &PathBuf)> {
        Split::ALL
            .into_iter()
            .flat_map(move |split| self.get(split).iter().map(move |path| (split, path)))
    }
}

/// Where and when an observation was taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationMetadata {
    pub camera_reference: String,
    pub datetime: NaiveDateTime,
    pub azimuth: i32,
}

// Counters collected while filtering the smoke dataset
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterStats {
    pub total_images: usize,
    pub missing_label: usize,
    pub empty_label: usize,
    pub disallowed_prefix: usize,
    pub kept: usize,
}

impl FilterStats {
    pub fn print_summary(&self) {
        log::info!("=== Filtering Summary ===");
        log::info!("Total images inspected: {}", self.total_images);
        log::info!("Kept (smoke and allowed prefix): {}", self.kept);
        log::debug!("Rejected (missing label file): {}", self.missing_label);
        log::debug!("Rejected (empty label file): {}", self.empty_label);
        log::debug!("Rejected (prefix not allowed): {}", self.disallowed_prefix);
    }
}
