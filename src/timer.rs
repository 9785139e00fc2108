/// Runs `f` once between two monotonic clock readings.
///
/// Returns whatever `f` returned together with the elapsed time in seconds.
/// A `Result` coming back from `f` is handed to the caller untouched.
pub fn time<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = std::time::Instant::now();
    let value = std::hint::black_box(f());
    let elapsed = start.elapsed();
    (value, elapsed.as_secs_f64())
}
