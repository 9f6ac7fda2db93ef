use rand::seq::SliceRandom;
use std::error::Error;

/// Build a target phrase by sampling `n` words independently and uniformly,
/// with replacement, from `words`, joined by single spaces.
///
/// Each call draws fresh; there is no shared generator state between targets.
pub fn generate(words: &[String], n: usize) -> Result<String, Box<dyn Error>> {
    if words.is_empty() {
        return Err("cannot generate a target from an empty word list".into());
    }

    let mut rng = rand::thread_rng();
    let sampled: Vec<&str> = (0..n)
        .map(|_| {
            words
                .choose(&mut rng)
                .map(String::as_str)
                .unwrap_or_default()
        })
        .collect();

    Ok(sampled.join(" "))
}
