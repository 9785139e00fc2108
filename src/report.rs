use crate::driver::BenchmarkReport;

/// One row of the exported timing table.
#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct TimingRecord {
    pub size: usize,
    pub iterative_secs: f64,
    pub recursive_secs: f64,
    /// `-1` when the target is not in the prefix.
    pub index: i64,
}

/// Renders a search result the way it is reported to users.
pub fn index_or_sentinel(found: Option<usize>) -> i64 {
    found.map_or(-1, |i| i as i64)
}

/// Flattens the parallel series of a report into rows.
pub fn records(report: &BenchmarkReport) -> Vec<TimingRecord> {
    report
        .sizes
        .iter()
        .zip(&report.iterative_secs)
        .zip(&report.recursive_secs)
        .zip(&report.found)
        .map(|(((&size, &iterative_secs), &recursive_secs), &found)| TimingRecord {
            size,
            iterative_secs,
            recursive_secs,
            index: index_or_sentinel(found),
        })
        .collect()
}

/// Writes the report as CSV to any writer.
pub fn write_csv<W: std::io::Write>(report: &BenchmarkReport, writer: W) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records(report) {
        writer.serialize(record)?;
    }
    writer.flush()?;
    anyhow::Ok(())
}

/// Saves the report as `timings-<YYYYmmdd-HHMMSS>.csv` inside `out_dir`.
///
/// # Returns
/// * The path of the written file.
pub fn save_csv<P: AsRef<std::path::Path>>(
    report: &BenchmarkReport,
    out_dir: P,
) -> anyhow::Result<std::path::PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let path = out_dir.as_ref().join(format!("timings-{}.csv", stamp));
    let file = std::fs::File::create(&path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
    write_csv(report, file)?;
    Ok(path)
}

/// Prints a table of the measured means to stdout.
pub fn print_summary(report: &BenchmarkReport) {
    println!(
        "Run at {} | target {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        report.target
    );
    println!("{:>10} {:>16} {:>16} {:>8}", "size", "iterative (s)", "recursive (s)", "index");
    for record in records(report) {
        println!(
            "{:>10} {:>16.9} {:>16.9} {:>8}",
            record.size, record.iterative_secs, record.recursive_secs, record.index
        );
    }
}
