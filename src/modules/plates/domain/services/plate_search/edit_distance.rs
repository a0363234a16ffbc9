/// Levenshtein distance between two strings, counted in Unicode scalar values.
///
/// Minimum number of single-character insertions, deletions or substitutions that
/// turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}
