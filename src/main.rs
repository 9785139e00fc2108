use linear_search_bench::{cli, plot, prices, progress, report, search, target};
use linear_search_bench::{BenchmarkDriver, target::TargetOrigin};

/// Main entry point of the application.
///
/// This function orchestrates the entire workflow:
/// 1. Parses command-line arguments and validates the benchmark settings.
/// 2. Loads the price list and resolves the target price.
/// 3. Reports where the target sits in the full list.
/// 4. Times both search variants over growing prefixes.
/// 5. Prints a summary and writes charts and an optional CSV export.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Success or an error if any step fails.
fn main() -> anyhow::Result<()> {
    let total_start = std::time::Instant::now();
    let args = cli::Args::parse();
    let config = args.bench_config();
    config.validate()?;

    let prices = prices::load_prices(&args.input)?;
    println!("📄 Loaded {} price(s) from {}", prices.len(), args.input.display());

    let raw_target = match &args.target {
        Some(raw) => raw.clone(),
        None => target::prompt_target("Enter the price to search for: ")?,
    };
    let resolved = target::resolve_target(&raw_target, &prices, config.default_target);
    match resolved.origin {
        TargetOrigin::Input => {}
        TargetOrigin::InvalidInput => println!("⚠️ Invalid input. Using default price."),
        TargetOrigin::NotInPrices => println!("⚠️ Price not found. Using default price."),
    }

    match search::search_iterative(&prices, &resolved.value) {
        Some(index) => println!("Price {} found at index {}.", resolved.value, index),
        None => println!("Price {} not found.", resolved.value),
    }

    let driver = BenchmarkDriver::new(prices, resolved.value, config);
    println!(
        "🚀 Benchmarking {} repetition(s) per size, recursion limit {}",
        config.repetitions, config.recursion_limit
    );

    let bar = progress::size_progress_bar()?;
    let bench_start = std::time::Instant::now();
    let report = driver.run_with_progress(&bar).inspect_err(|_| bar.abandon())?;
    println!(
        "✅ Benchmark completed in {:?} seconds",
        bench_start.elapsed().as_secs_f64()
    );

    if report.is_empty() {
        println!("⚠️ No prices to benchmark. Nothing to plot.");
        return Ok(());
    }
    report::print_summary(&report);

    if args.csv || !args.no_plot {
        std::fs::create_dir_all(&args.output)?;
    }
    if args.csv {
        let path = report::save_csv(&report, &args.output)?;
        println!("💾 Timings written to {}", path.display());
    }
    if !args.no_plot {
        for path in plot::render_charts(&report, &args.output)? {
            println!("📈 Saved chart to {}", path.display());
        }
    }

    println!(
        "✅ Done in {:?} seconds",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}
