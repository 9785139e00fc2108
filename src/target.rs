use std::io::{BufRead, Write};

/// Price searched for when the requested one is unusable.
pub const DEFAULT_TARGET: i64 = 1_000_000;

/// Where the resolved target value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOrigin {
    /// The raw input parsed and occurs in the price list.
    Input,
    /// The raw input was not an integer.
    InvalidInput,
    /// The raw input parsed but does not occur in the price list.
    NotInPrices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub value: i64,
    pub origin: TargetOrigin,
}

/// Turns raw user input into the target price.
///
/// Unparsable input falls back to `default`. A parsed value missing from
/// `prices` also falls back to `default`, which itself may be missing.
pub fn resolve_target(raw_input: &str, prices: &[i64], default: i64) -> ResolvedTarget {
    match raw_input.trim().parse::<i64>() {
        Err(_) => ResolvedTarget {
            value: default,
            origin: TargetOrigin::InvalidInput,
        },
        Ok(value) if !prices.contains(&value) => ResolvedTarget {
            value: default,
            origin: TargetOrigin::NotInPrices,
        },
        Ok(value) => ResolvedTarget {
            value,
            origin: TargetOrigin::Input,
        },
    }
}

/// Keeps `target` if it occurs in `prices`, otherwise returns `default`.
pub fn select_target(target: i64, prices: &[i64], default: i64) -> i64 {
    if prices.contains(&target) { target } else { default }
}

/// Prints `prompt` and reads one line from stdin.
///
/// A closed stdin yields an empty string.
pub fn prompt_target(prompt: &str) -> anyhow::Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
