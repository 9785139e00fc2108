use crate::averager;
use crate::error::BenchError;
use crate::search::{self, Algorithm};
use crate::target;

/// Knobs controlling one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Timed trials averaged per measurement point.
    pub repetitions: usize,
    /// First input size measured.
    pub size_min: usize,
    /// Distance between consecutive input sizes.
    pub size_step: usize,
    /// Maximum call depth of the recursive search.
    pub recursion_limit: usize,
    /// Target used when the requested one is not in the price list.
    pub default_target: i64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repetitions: averager::DEFAULT_REPETITIONS,
            size_min: 10,
            size_step: 500,
            recursion_limit: search::DEFAULT_RECURSION_LIMIT,
            default_target: target::DEFAULT_TARGET,
        }
    }
}

impl BenchConfig {
    /// Rejects settings that would make a measurement meaningless.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        if self.size_step == 0 {
            return Err(BenchError::ZeroSizeStep);
        }
        if self.recursion_limit == 0 {
            return Err(BenchError::ZeroRecursionLimit);
        }
        Ok(())
    }
}

/// Builds the input sizes to measure for a list of `len` prices.
///
/// Sizes start at `min` and grow by `step` while they fit in the list. A list
/// shorter than `min` is measured once at its full length, and an empty list
/// yields no sizes at all.
pub fn size_series(len: usize, min: usize, step: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    if len < min {
        return vec![len];
    }
    (min..=len).step_by(step.max(1)).collect()
}

/// Output of a run: three parallel series plus the index found per size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    pub target: i64,
    pub sizes: Vec<usize>,
    pub iterative_secs: Vec<f64>,
    pub recursive_secs: Vec<f64>,
    pub found: Vec<Option<usize>>,
}

impl BenchmarkReport {
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Measures both search variants over growing prefixes of a price list.
#[derive(Debug, Clone)]
pub struct BenchmarkDriver {
    prices: Vec<i64>,
    target: i64,
    config: BenchConfig,
    sizes: Option<Vec<usize>>,
}

impl BenchmarkDriver {
    /// Creates a driver, swapping in `config.default_target` when `target`
    /// does not occur anywhere in `prices`.
    pub fn new(prices: Vec<i64>, target: i64, config: BenchConfig) -> Self {
        let target = target::select_target(target, &prices, config.default_target);
        Self {
            prices,
            target,
            config,
            sizes: None,
        }
    }

    /// Measures exactly these sizes instead of the configured series.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = Some(sizes);
        self
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn prices(&self) -> &[i64] {
        &self.prices
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The sizes that `run` will measure.
    ///
    /// # Errors
    /// * [`BenchError::InvalidSizes`] when explicit sizes are not strictly
    ///   increasing or exceed the price list.
    pub fn sizes(&self) -> Result<Vec<usize>, BenchError> {
        let Some(sizes) = &self.sizes else {
            return Ok(size_series(
                self.prices.len(),
                self.config.size_min,
                self.config.size_step,
            ));
        };
        if let Some(&too_big) = sizes.iter().find(|&&s| s > self.prices.len()) {
            return Err(BenchError::InvalidSizes(format!(
                "size {} exceeds the {} available prices",
                too_big,
                self.prices.len()
            )));
        }
        if sizes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BenchError::InvalidSizes(
                "sizes must be strictly increasing".to_string(),
            ));
        }
        Ok(sizes.clone())
    }

    /// Runs the benchmark without progress output.
    pub fn run(&self) -> Result<BenchmarkReport, BenchError> {
        self.run_with_progress(&indicatif::ProgressBar::hidden())
    }

    /// Runs the benchmark, ticking `progress` once per measured size.
    ///
    /// The configuration is validated before anything is timed. The first
    /// failing search stops the run.
    pub fn run_with_progress(
        &self,
        progress: &indicatif::ProgressBar,
    ) -> Result<BenchmarkReport, BenchError> {
        self.config.validate()?;
        let sizes = self.sizes()?;
        progress.set_length(sizes.len() as u64);

        let mut report = BenchmarkReport {
            target: self.target,
            sizes: Vec::with_capacity(sizes.len()),
            iterative_secs: Vec::with_capacity(sizes.len()),
            recursive_secs: Vec::with_capacity(sizes.len()),
            found: Vec::with_capacity(sizes.len()),
        };

        for size in sizes {
            progress.set_message(format!("n = {size}"));
            let prefix = &self.prices[..size];

            let iterative = self.measure(Algorithm::Iterative, prefix)?;
            let recursive = self.measure(Algorithm::Recursive, prefix)?;
            if iterative.found != recursive.found {
                return Err(BenchError::ResultMismatch {
                    size,
                    iterative: iterative.found,
                    recursive: recursive.found,
                });
            }

            report.sizes.push(size);
            report.iterative_secs.push(iterative.mean_secs);
            report.recursive_secs.push(recursive.mean_secs);
            report.found.push(iterative.found);
            progress.inc(1);
        }

        progress.finish_and_clear();
        Ok(report)
    }

    fn measure(
        &self,
        algorithm: Algorithm,
        prefix: &[i64],
    ) -> Result<averager::Measurement, BenchError> {
        let limit = self.config.recursion_limit;
        averager::average(
            |items: &[i64], target: &i64| algorithm.search(items, target, limit),
            prefix,
            &self.target,
            self.config.repetitions,
        )
        .map_err(|e| match e {
            BenchError::Search(source) => BenchError::SearchFailed {
                algorithm,
                size: prefix.len(),
                source,
            },
            other => other,
        })
    }
}
