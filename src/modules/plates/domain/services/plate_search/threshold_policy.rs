/// Maximum edit distance tolerated for a normalized query of `query_len` characters.
///
/// Short queries carry too little signal for fuzzy matching, so anything under three
/// characters disables it.
pub fn max_distance(query_len: usize) -> usize {
    match query_len {
        0..=2 => 0,
        3..=4 => 1,
        5..=8 => 2,
        _ => 3,
    }
}
