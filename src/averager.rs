use crate::error::BenchError;
use crate::search::SearchError;
use crate::timer;

/// Timed trials averaged per measurement point unless configured otherwise.
pub const DEFAULT_REPETITIONS: usize = 10;

/// Mean duration of repeated identical search calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Arithmetic mean of all samples, in seconds.
    pub mean_secs: f64,
    /// Number of timer samples taken.
    pub samples: usize,
    /// Index returned by the search (identical on every repetition).
    pub found: Option<usize>,
}

/// Times `search(items, target)` `repetitions` times and averages the samples.
///
/// # Errors
/// * [`BenchError::ZeroRepetitions`] before any call is made.
/// * [`BenchError::Search`] on the first failing call; no mean is produced.
pub fn average<T, F>(
    search: F,
    items: &[T],
    target: &T,
    repetitions: usize,
) -> Result<Measurement, BenchError>
where
    F: Fn(&[T], &T) -> Result<Option<usize>, SearchError>,
{
    if repetitions == 0 {
        return Err(BenchError::ZeroRepetitions);
    }

    let mut total_secs = 0.0;
    let mut found = None;
    for _ in 0..repetitions {
        let (result, secs) = timer::time(|| search(items, target));
        found = result?;
        total_secs += secs;
    }

    Ok(Measurement {
        mean_secs: total_secs / repetitions as f64,
        samples: repetitions,
        found,
    })
}
