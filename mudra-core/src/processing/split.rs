//! Train/val/test dataset splitting.
//!
//! Collects every whitelisted image under the class subdirectories of a
//! dataset root into one flat pool, shuffles it, and partitions it in two
//! stages: the train fraction is carved off first, then the remainder is
//! divided between val and test. The pool discards class labels, so the
//! three output directories are unlabeled; consumers that need labels
//! re-derive them from the original class tree (see [`crate::dataset`]).

use crate::discovery::find_image_files;
use crate::error::{CoreError, CoreResult};

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Tolerance for the ratio-sums-to-one check.
const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// Train/val/test fractions. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatio {
    pub train: f64,
    pub val: f64,
    pub test: f64,
}

impl SplitRatio {
    #[must_use]
    pub const fn new(train: f64, val: f64, test: f64) -> Self {
        Self { train, val, test }
    }

    /// Validates the ratio before any split side effect.
    ///
    /// Each fraction must lie strictly inside (0, 1) and the three must
    /// sum to 1.0 within floating tolerance, so every input file lands in
    /// exactly one subset.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [("train", self.train), ("val", self.val), ("test", self.test)] {
            if !value.is_finite() || value <= 0.0 || value >= 1.0 {
                return Err(CoreError::InvalidSplitRatio(format!(
                    "{name} fraction {value} must lie within (0, 1)"
                )));
            }
        }

        let sum = self.train + self.val + self.test;
        if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(CoreError::InvalidSplitRatio(format!(
                "fractions {self} sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::new(0.8, 0.1, 0.1)
    }
}

impl fmt::Display for SplitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.train, self.val, self.test)
    }
}

impl FromStr for SplitRatio {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(CoreError::InvalidSplitRatio(format!(
                "expected three comma-separated fractions, got '{s}'"
            )));
        }
        let parse = |part: &str| {
            part.trim().parse::<f64>().map_err(|_| {
                CoreError::InvalidSplitRatio(format!("'{}' is not a number", part.trim()))
            })
        };
        Ok(Self::new(parse(parts[0])?, parse(parts[1])?, parse(parts[2])?))
    }
}

/// The three directories a split materializes into.
#[derive(Debug, Clone)]
pub struct SplitOutputDirs {
    pub train: PathBuf,
    pub val: PathBuf,
    pub test: PathBuf,
}

impl SplitOutputDirs {
    /// Standard `train/`, `val/`, `test/` subdirectories under one base.
    #[must_use]
    pub fn under(base: &Path) -> Self {
        Self {
            train: base.join("train"),
            val: base.join("val"),
            test: base.join("test"),
        }
    }
}

/// Subset sizes produced by one split run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSummary {
    pub classes: usize,
    pub total: usize,
    pub train: usize,
    pub val: usize,
    pub test: usize,
}

/// Splits the class-labeled image tree at `dataset_dir` into three flat
/// pools under `outputs`.
///
/// Files are copied, never moved; the originals stay in place. Only the
/// base filename is preserved, so same-named files from different class
/// folders overwrite one another in the output pools.
///
/// Passing a `seed` makes the partition reproducible; without one the
/// shuffle draws from thread-local entropy and differs between runs.
///
/// # Errors
///
/// * `CoreError::InvalidSplitRatio` - rejected before any directory is
///   created or file copied
/// * `CoreError::Io` - the dataset tree cannot be read or an output
///   cannot be written
pub fn split_dataset(
    dataset_dir: &Path,
    outputs: &SplitOutputDirs,
    ratio: SplitRatio,
    seed: Option<u64>,
) -> CoreResult<SplitSummary> {
    ratio.validate()?;

    let (class_count, pool) = collect_image_pool(dataset_dir)?;
    let pool_size = pool.len();

    let (train, val, test) = match seed {
        Some(seed) => partition_pool(pool, ratio, &mut ChaCha8Rng::seed_from_u64(seed)),
        None => partition_pool(pool, ratio, &mut rand::thread_rng()),
    };

    for (subset, dir) in [(&train, &outputs.train), (&val, &outputs.val), (&test, &outputs.test)] {
        std::fs::create_dir_all(dir)?;
        for source in subset.iter() {
            let name = source.file_name().ok_or_else(|| {
                CoreError::PathError(format!("Failed to get filename for {}", source.display()))
            })?;
            std::fs::copy(source, dir.join(name))?;
        }
    }

    let summary = SplitSummary {
        classes: class_count,
        total: pool_size,
        train: train.len(),
        val: val.len(),
        test: test.len(),
    };
    log::info!(
        "Split {} images from {} classes into {}/{}/{} (train/val/test)",
        summary.total,
        summary.classes,
        summary.train,
        summary.val,
        summary.test
    );
    Ok(summary)
}

/// Pools every whitelisted image across the class subdirectories of
/// `dataset_dir`, discarding class membership. Non-directory entries at
/// the top level are excluded, not errors.
fn collect_image_pool(dataset_dir: &Path) -> CoreResult<(usize, Vec<PathBuf>)> {
    let mut class_dirs: Vec<PathBuf> = std::fs::read_dir(dataset_dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            path.is_dir().then_some(path)
        })
        .collect();
    class_dirs.sort();

    let mut pool = Vec::new();
    for class_dir in &class_dirs {
        pool.extend(find_image_files(class_dir)?);
    }
    Ok((class_dirs.len(), pool))
}

/// Shuffles the pool and partitions it in two stages.
///
/// Stage one holds out `1 - ratio.train` of the pool (count rounded up)
/// and keeps the rest as train. Stage two carves the test subset out of
/// the holdout using `test / (val + test)` as the test fraction, again
/// rounding up; what remains is val. Every element lands in exactly one
/// subset.
fn partition_pool<R: Rng>(
    mut pool: Vec<PathBuf>,
    ratio: SplitRatio,
    rng: &mut R,
) -> (Vec<PathBuf>, Vec<PathBuf>, Vec<PathBuf>) {
    pool.shuffle(rng);

    let total = pool.len();
    let holdout = (((total as f64) * (1.0 - ratio.train)).ceil() as usize).min(total);
    let mut rest = pool.split_off(total - holdout);
    let train = pool;

    let test_fraction = ratio.test / (ratio.val + ratio.test);
    let test_count = (((rest.len() as f64) * test_fraction).ceil() as usize).min(rest.len());
    let test = rest.split_off(rest.len() - test_count);
    let val = rest;

    (train, val, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_pool(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("img_{i}.jpg"))).collect()
    }

    #[test]
    fn test_ratio_validation() {
        assert!(SplitRatio::default().validate().is_ok());
        assert!(SplitRatio::new(0.7, 0.2, 0.1).validate().is_ok());

        // Does not sum to 1.0
        assert!(SplitRatio::new(0.5, 0.2, 0.2).validate().is_err());
        assert!(SplitRatio::new(0.8, 0.2, 0.2).validate().is_err());

        // Degenerate fractions
        assert!(SplitRatio::new(1.0, 0.0, 0.0).validate().is_err());
        assert!(SplitRatio::new(-0.2, 0.6, 0.6).validate().is_err());
        assert!(SplitRatio::new(f64::NAN, 0.5, 0.5).validate().is_err());
    }

    #[test]
    fn test_ratio_from_str() {
        let ratio: SplitRatio = "0.8,0.1,0.1".parse().unwrap();
        assert_eq!(ratio, SplitRatio::default());

        let ratio: SplitRatio = " 0.7, 0.2 ,0.1 ".parse().unwrap();
        assert_eq!(ratio, SplitRatio::new(0.7, 0.2, 0.1));

        assert!("0.8,0.2".parse::<SplitRatio>().is_err());
        assert!("0.8,0.1,0.1,0.0".parse::<SplitRatio>().is_err());
        assert!("a,b,c".parse::<SplitRatio>().is_err());
    }

    #[test]
    fn test_ratio_display_round_trips() {
        let ratio = SplitRatio::new(0.75, 0.15, 0.1);
        let parsed: SplitRatio = ratio.to_string().parse().unwrap();
        assert_eq!(parsed, ratio);
    }

    #[test]
    fn test_partition_counts_100() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (train, val, test) = partition_pool(fake_pool(100), SplitRatio::default(), &mut rng);
        assert_eq!((train.len(), val.len(), test.len()), (80, 10, 10));
    }

    #[test]
    fn test_partition_counts_small_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (train, val, test) = partition_pool(fake_pool(10), SplitRatio::default(), &mut rng);
        // Holdout rounds up: 2 files held out, split 1/1.
        assert_eq!((train.len(), val.len(), test.len()), (8, 1, 1));
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pool = fake_pool(37);
        let (train, val, test) = partition_pool(pool.clone(), SplitRatio::new(0.6, 0.3, 0.1), &mut rng);

        let mut combined: Vec<PathBuf> =
            train.iter().chain(&val).chain(&test).cloned().collect();
        assert_eq!(combined.len(), pool.len());
        combined.sort();
        let mut expected = pool;
        expected.sort();
        assert_eq!(combined, expected);
    }

    #[test]
    fn test_partition_empty_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (train, val, test) = partition_pool(Vec::new(), SplitRatio::default(), &mut rng);
        assert!(train.is_empty() && val.is_empty() && test.is_empty());
    }

    #[test]
    fn test_same_seed_same_partition() {
        let make = || {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            partition_pool(fake_pool(50), SplitRatio::default(), &mut rng)
        };
        assert_eq!(make(), make());
    }
}
