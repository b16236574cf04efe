//! Class-labeled dataset loading.
//!
//! A dataset root contains one subdirectory per gesture class; the set of
//! class labels is exactly the set of those directory names. Label
//! assignment is positional: the label index equals the index of the
//! class name in the lexicographically sorted directory listing, so it is
//! stable across runs and platforms.
//!
//! Note that this reads the original class tree, not the flat pools that
//! [`crate::processing::split_dataset`] writes; the split outputs carry
//! no class structure of their own.

use crate::discovery::find_image_files;
use crate::error::{CoreError, CoreResult};
use crate::external::ImageCodec;

use image::DynamicImage;

use std::path::{Path, PathBuf};

/// One labeled image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub path: PathBuf,
    pub label: usize,
}

/// An in-memory index of a class-labeled image tree.
#[derive(Debug, Clone)]
pub struct GestureDataset {
    root: PathBuf,
    classes: Vec<String>,
    samples: Vec<Sample>,
}

impl GestureDataset {
    /// Indexes the class tree rooted at `root`.
    ///
    /// Immediate subdirectories become classes (sorted); whitelisted
    /// images inside each become samples labeled with the class index.
    /// Non-directory entries at the root and non-image files inside class
    /// folders are ignored.
    pub fn open(root: &Path) -> CoreResult<Self> {
        let mut classes: Vec<String> = std::fs::read_dir(root)?
            .filter_map(|entry| {
                let entry = entry.ok()?;
                entry
                    .path()
                    .is_dir()
                    .then(|| entry.file_name().to_string_lossy().into_owned())
            })
            .collect();
        classes.sort();

        let mut samples = Vec::new();
        for (label, class) in classes.iter().enumerate() {
            for path in find_image_files(&root.join(class))? {
                samples.push(Sample { path, label });
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            classes,
            samples,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Class names in label order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample count per class, indexed by label.
    #[must_use]
    pub fn class_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.classes.len()];
        for sample in &self.samples {
            counts[sample.label] += 1;
        }
        counts
    }

    /// Decodes the sample at `index` into an `(image, label)` pair for a
    /// downstream training framework.
    pub fn load<C: ImageCodec>(&self, codec: &C, index: usize) -> CoreResult<(DynamicImage, usize)> {
        let sample = self.samples.get(index).ok_or_else(|| {
            CoreError::Other(format!(
                "Sample index {index} out of range for dataset of {}",
                self.samples.len()
            ))
        })?;
        Ok((codec.load(&sample.path)?, sample.label))
    }
}

impl<'a> IntoIterator for &'a GestureDataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
