/// Live words-per-minute: characters typed divided by 5 (the standard
/// word-length proxy), normalized to a per-minute rate.
///
/// Returns 0 until the clock has actually started moving.
pub fn live_wpm(typed_len: usize, elapsed_secs: f64) -> u64 {
    if elapsed_secs <= 0.0 {
        return 0;
    }

    ((typed_len as f64 / (elapsed_secs / 60.0)) / 5.0).round() as u64
}

/// Final accuracy as a percentage of index-wise matches between what was
/// typed and the target, over the typed window.
///
/// A dropped character shifts every later position; that cascade is part of
/// the observable scoring and is kept as-is.
pub fn accuracy(typed: &[char], target: &str) -> f64 {
    if typed.is_empty() {
        return 0.0;
    }

    let matches = typed
        .iter()
        .zip(target.chars())
        .filter(|(t, c)| *t == c)
        .count();

    (matches as f64 / typed.len() as f64) * 100.0
}
