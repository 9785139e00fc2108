/// Prices used when the price file does not exist.
pub const DUMMY_PRICES: [i64; 3] = [1_000_000, 1_200_000, 1_500_000];

/// Reads a list of prices separated by commas and/or newlines.
///
/// Fields are trimmed and only those consisting solely of ASCII digits are
/// kept; everything else is skipped without complaint. Order is preserved.
///
/// # Fallbacks
/// * Missing file: returns [`DUMMY_PRICES`].
/// * A digit field that does not fit in `i64`, or content that is not
///   valid text: returns an empty list.
///
/// # Errors
/// * Any other I/O failure while opening the file.
pub fn load_prices<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Vec<i64>> {
    let path = path.as_ref();
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("⚠️ File {} not found. Using dummy data.", path.display());
            return Ok(DUMMY_PRICES.to_vec());
        }
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to open {}: {}", path.display(), e));
        }
    };

    match parse_prices(file) {
        Ok(prices) => Ok(prices),
        Err(e) => {
            println!("⚠️ Error reading {}: {}. Make sure the data format is correct.", path.display(), e);
            Ok(Vec::new())
        }
    }
}

/// Parses comma/newline separated prices from any reader.
pub fn parse_prices<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<i64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut prices = Vec::new();
    for result in reader.records() {
        let record = result?;
        for field in record.iter() {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            let price = field
                .parse::<i64>()
                .map_err(|e| anyhow::anyhow!("Invalid price {:?}: {}", field, e))?;
            prices.push(price);
        }
    }
    Ok(prices)
}
