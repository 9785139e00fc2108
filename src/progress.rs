/// Builds the bar shown while input sizes are being measured.
///
/// # Returns
/// * `anyhow::Result<ProgressBar>` - Bar with an unknown length; the driver sets it.
pub fn size_progress_bar() -> anyhow::Result<indicatif::ProgressBar> {
    let style = indicatif::ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sizes {msg}",
    )
    .map_err(|e| anyhow::anyhow!("Invalid progress template: {}", e))?
    .progress_chars("#>-");

    let bar = indicatif::ProgressBar::new(0);
    bar.set_style(style);
    Ok(bar)
}
