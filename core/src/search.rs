//! Approximate name matching (Bitap).
//!
//! Scores a candidate by `errors / pattern_len + |location - expected| / distance` and
//! accepts it when the best score is within the threshold. Matches near the start of a
//! name are cheap, matches far into it are not, so a one-letter query still finds names
//! that contain the letter early on.

use hashbrown::HashMap;

/// Longest pattern handled by a single bitmask pass.
const MAX_BITS: usize = 32;

/// Matcher tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// 0.0 requires a perfect match, 1.0 matches anything.
    pub threshold: f64,
    /// Where in the text the pattern is expected to start.
    pub location: usize,
    /// How far from `location` a match may sit before it is rejected outright.
    pub distance: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            location: 0,
            distance: 30,
        }
    }
}

#[derive(Debug, Clone)]
struct Chunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, u64>,
    start_index: usize,
}

impl Chunk {
    fn new(pattern: &[char], start_index: usize) -> Self {
        let len = pattern.len();
        let mut alphabet = HashMap::new();
        for (i, &c) in pattern.iter().enumerate() {
            *alphabet.entry(c).or_insert(0u64) |= 1 << (len - i - 1);
        }
        Self {
            pattern: pattern.to_vec(),
            alphabet,
            start_index,
        }
    }
}

/// A compiled, case-insensitive query.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    pattern: Vec<char>,
    chunks: Vec<Chunk>,
    options: SearchOptions,
}

impl FuzzyMatcher {
    pub fn new(query: &str) -> Self {
        Self::with_options(query, SearchOptions::default())
    }

    pub fn with_options(query: &str, options: SearchOptions) -> Self {
        let pattern: Vec<char> = query.to_lowercase().chars().collect();
        let len = pattern.len();
        let mut chunks = Vec::new();

        if len > 0 && len <= MAX_BITS {
            chunks.push(Chunk::new(&pattern, 0));
        } else if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                chunks.push(Chunk::new(&pattern[i..i + MAX_BITS], i));
                i += MAX_BITS;
            }
            if remainder > 0 {
                let start = len - MAX_BITS;
                chunks.push(Chunk::new(&pattern[start..], start));
            }
        }

        Self {
            pattern,
            chunks,
            options,
        }
    }

    /// Best score for `text` (0.0 is perfect), or `None` when it does not match.
    pub fn score(&self, text: &str) -> Option<f64> {
        let text: Vec<char> = text.to_lowercase().chars().collect();

        if self.pattern == text {
            return Some(0.0);
        }
        if self.chunks.is_empty() {
            return None;
        }

        let mut matched = false;
        let mut total = 0.0;
        for chunk in &self.chunks {
            let (is_match, score) = search_chunk(&text, chunk, &self.options);
            matched |= is_match;
            total += score;
        }

        matched.then(|| total / self.chunks.len() as f64)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.score(text).is_some()
    }
}

fn compute_score(
    pattern_len: usize,
    errors: usize,
    current: usize,
    expected: usize,
    distance: usize,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = current.abs_diff(expected);
    if distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }
    accuracy + proximity as f64 / distance as f64
}

fn index_of(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.len() > text.len() || from > text.len() - pattern.len() {
        return None;
    }
    (from..=text.len() - pattern.len()).find(|&i| text[i..i + pattern.len()] == *pattern)
}

/// Run one bitmask pass. Returns `(is_match, score)`.
fn search_chunk(text: &[char], chunk: &Chunk, options: &SearchOptions) -> (bool, f64) {
    let pattern = &chunk.pattern;
    let pattern_len = pattern.len();
    let text_len = text.len();
    let distance = options.distance;
    let expected = (options.location + chunk.start_index).min(text_len);
    let score_at =
        |errors: usize, current: usize| compute_score(pattern_len, errors, current, expected, distance);

    let mut threshold = options.threshold;

    // Exact occurrences tighten the threshold before the fuzzy pass
    let mut from = expected;
    while let Some(index) = index_of(text, pattern, from) {
        threshold = threshold.min(score_at(0, index));
        from = index + pattern_len;
    }

    let mut best_location: Option<usize> = None;
    let mut final_score = 1.0;
    let mut last_bits: Vec<u64> = Vec::new();
    let mut bin_max = pattern_len + text_len;
    let mask: u64 = 1 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Widest window around `expected` that could still beat the threshold
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            if score_at(errors, expected + bin_mid) <= threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
        let finish = (expected + bin_mid).min(text_len) + pattern_len;

        let mut bits = vec![0u64; finish + 2];
        bits[finish + 1] = (1u64 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let location = j - 1;
            let char_match = text
                .get(location)
                .and_then(|c| chunk.alphabet.get(c))
                .copied()
                .unwrap_or(0);

            bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                let prev_next = last_bits.get(j + 1).copied().unwrap_or(0);
                let prev = last_bits.get(j).copied().unwrap_or(0);
                bits[j] |= ((prev_next | prev) << 1) | 1 | prev_next;
            }

            if bits[j] & mask != 0 {
                final_score = score_at(errors, location);
                if final_score <= threshold {
                    threshold = final_score;
                    best_location = Some(location);
                    if location <= expected {
                        break;
                    }
                    start = (2 * expected).saturating_sub(location).max(1);
                }
            }
            j -= 1;
        }

        // One more error can no longer beat what we have
        if score_at(errors + 1, expected) > threshold {
            break;
        }
        last_bits = bits;
    }

    (best_location.is_some(), f64::max(0.001, final_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(query: &str, text: &str) -> bool {
        FuzzyMatcher::new(query).is_match(text)
    }

    #[test]
    fn prefix_matches() {
        assert!(matches("pika", "pikachu"));
        assert!(matches("char", "charmander"));
        assert!(matches("char", "charizard"));
        assert!(!matches("char", "bulbasaur"));
    }

    #[test]
    fn exact_name_always_matches() {
        assert!(matches("mr-mime", "mr-mime"));
        assert!(matches("bulbasaur", "bulbasaur"));
        assert_eq!(FuzzyMatcher::new("onix").score("onix"), Some(0.0));
    }

    #[test]
    fn case_insensitive() {
        assert!(matches("PIKA", "pikachu"));
        assert!(matches("Pikachu", "PIKACHU"));
    }

    #[test]
    fn single_character_near_start() {
        assert!(matches("p", "pikachu"));
        assert!(matches("c", "pikachu"));
        assert!(!matches("z", "pikachu"));
    }

    #[test]
    fn far_from_start_is_rejected() {
        assert!(matches("z", "aaaaaaaaz"));
        assert!(!matches("z", "aaaaaaaaaaz"));
    }

    #[test]
    fn tolerates_a_typo() {
        assert!(matches("pikachi", "pikachu"));
        assert!(!matches("pikachi", "raichu"));
    }

    #[test]
    fn long_patterns_are_chunked() {
        let long = "abcdefghijklmnopqrstuvwxyzabcdefghijklmn";
        assert_eq!(long.chars().count(), 40);
        assert!(matches(long, &format!("{long}x")));
        assert!(!matches(long, "pikachu"));
    }

    #[test]
    fn empty_query_matches_nothing_on_its_own() {
        assert!(!matches("", "pikachu"));
        assert!(matches("", ""));
    }
}
