use crate::driver::BenchConfig;

/// Structure representing command-line arguments.
#[derive(Debug)]
pub struct Args {
    pub input: std::path::PathBuf,
    pub output: std::path::PathBuf,
    pub target: Option<String>,
    pub default_target: i64,
    pub repetitions: usize,
    pub size_min: usize,
    pub size_step: usize,
    pub recursion_limit: usize,
    pub no_plot: bool,
    pub csv: bool,
}

/// Command-line arguments parser using Clap.
///
/// Every numeric knob of the benchmark is validated here so that a bad
/// value never reaches the measuring code.
impl Args {
    /// Parses the process arguments, exiting with usage on error.
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    /// Parses an explicit argument list.
    ///
    /// # Errors
    /// * If an argument is unknown or fails validation.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        let defaults = BenchConfig::default();
        Args {
            input: matches
                .get_one::<std::path::PathBuf>("input")
                .cloned()
                .unwrap_or_else(|| std::path::PathBuf::from("kost_prices.txt")),
            output: matches
                .get_one::<std::path::PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| std::path::PathBuf::from(".")),
            target: matches.get_one::<String>("target").cloned(),
            default_target: matches
                .get_one::<i64>("default-target")
                .copied()
                .unwrap_or(defaults.default_target),
            repetitions: matches
                .get_one::<usize>("repetitions")
                .copied()
                .unwrap_or(defaults.repetitions),
            size_min: matches
                .get_one::<usize>("size-min")
                .copied()
                .unwrap_or(defaults.size_min),
            size_step: matches
                .get_one::<usize>("size-step")
                .copied()
                .unwrap_or(defaults.size_step),
            recursion_limit: matches
                .get_one::<usize>("recursion-limit")
                .copied()
                .unwrap_or(defaults.recursion_limit),
            no_plot: matches.get_flag("no-plot"),
            csv: matches.get_flag("csv"),
        }
    }

    pub fn bench_config(&self) -> BenchConfig {
        BenchConfig {
            repetitions: self.repetitions,
            size_min: self.size_min,
            size_step: self.size_step,
            recursion_limit: self.recursion_limit,
            default_target: self.default_target,
        }
    }
}

fn command() -> clap::Command {
    clap::Command::new("linear-search-bench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Benchmark iterative vs recursive linear search over a price list")
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .help("Path to the price file (comma or newline separated)")
                .default_value("kost_prices.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory for charts and CSV export")
                .default_value(".")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("target")
                .short('t')
                .long("target")
                .help("Price to search for (prompted for when omitted)")
                .allow_hyphen_values(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("default-target")
                .long("default-target")
                .help("Price searched for when the requested one is invalid or absent")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(i64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("repetitions")
                .short('r')
                .long("repetitions")
                .help("Timed trials averaged per input size (default: 10)")
                .value_parser(clap::builder::ValueParser::new(parse_usize_positive))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("size-min")
                .long("size-min")
                .help("Smallest input size measured (default: 10)")
                .value_parser(clap::builder::ValueParser::new(parse_usize_positive))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("size-step")
                .short('s')
                .long("size-step")
                .help("Increment between measured input sizes (default: 500)")
                .value_parser(clap::builder::ValueParser::new(parse_usize_positive))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("recursion-limit")
                .short('l')
                .long("recursion-limit")
                .help("Maximum call depth of the recursive search (default: 1000)")
                .value_parser(clap::builder::ValueParser::new(parse_usize_positive))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-plot")
                .long("no-plot")
                .help("Skip writing the SVG charts")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("csv")
                .long("csv")
                .help("Also export the timings as CSV into the output directory")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Validates that a numeric option is a positive integer.
///
/// # Arguments
/// * `s` - String representation of the value.
///
/// # Returns
/// * `Result<usize>` - Validated value.
fn parse_usize_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("Must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("Not a valid number: {}", e)),
    }
}
