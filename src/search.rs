/// Call depth the recursive search may reach before it gives up.
///
/// Matches the default call-depth limit of common scripting runtimes and
/// stays well inside the 2 MiB stack of a spawned test thread.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

/// Failure of a single search invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The recursive search needed more stack frames than allowed.
    #[error("maximum recursion depth of {limit} exceeded at position {position}")]
    RecursionLimitExceeded { limit: usize, position: usize },
}

/// The two linear search variants under benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Iterative,
    Recursive,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Iterative => "iterative",
            Algorithm::Recursive => "recursive",
        }
    }

    /// Runs this variant from position 0.
    ///
    /// `recursion_limit` only affects [`Algorithm::Recursive`].
    pub fn search<T: PartialEq>(
        self,
        items: &[T],
        target: &T,
        recursion_limit: usize,
    ) -> Result<Option<usize>, SearchError> {
        match self {
            Algorithm::Iterative => Ok(search_iterative(items, target)),
            Algorithm::Recursive => search_recursive_with_limit(items, target, 0, recursion_limit),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Scans `items` from the front and returns the index of the first element
/// equal to `target`, or `None` once the whole slice has been visited.
pub fn search_iterative<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    for (index, item) in items.iter().enumerate() {
        if item == target {
            return Some(index);
        }
    }
    None
}

/// Recursive counterpart of [`search_iterative`] using the default
/// recursion limit. Start with `position = 0`.
///
/// # Errors
/// * [`SearchError::RecursionLimitExceeded`] when the scan would need more
///   than [`DEFAULT_RECURSION_LIMIT`] nested calls.
pub fn search_recursive<T: PartialEq>(
    items: &[T],
    target: &T,
    position: usize,
) -> Result<Option<usize>, SearchError> {
    search_recursive_with_limit(items, target, position, DEFAULT_RECURSION_LIMIT)
}

/// Recursive linear search with an explicit depth limit.
///
/// Every position costs one nested call, so the depth grows with the
/// distance scanned. The call that would exceed `limit` fails instead of
/// recursing further.
pub fn search_recursive_with_limit<T: PartialEq>(
    items: &[T],
    target: &T,
    position: usize,
    limit: usize,
) -> Result<Option<usize>, SearchError> {
    descend(items, target, position, 0, limit)
}

fn descend<T: PartialEq>(
    items: &[T],
    target: &T,
    position: usize,
    depth: usize,
    limit: usize,
) -> Result<Option<usize>, SearchError> {
    if depth >= limit {
        return Err(SearchError::RecursionLimitExceeded { limit, position });
    }
    if position >= items.len() {
        return Ok(None);
    }
    if items[position] == *target {
        return Ok(Some(position));
    }
    descend(items, target, position + 1, depth + 1, limit)
}
