//! Substring replacement helpers.

/// Replace every occurrence of `from` with `to`.
///
/// An empty `from` returns the input unchanged instead of interleaving the
/// replacement at every character boundary.
pub fn replace_all(input: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return input.to_owned();
    }
    input.replace(from, to)
}

/// Replace underscores with spaces for nicer enum-style labels
/// (e.g. `RESEARCH_USE` -> `RESEARCH USE`).
pub fn underscore_to_space(input: &str) -> String {
    input.replace('_', " ")
}
