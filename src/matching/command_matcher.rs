//! "Did you mean" suggestions for mistyped command names.

/// Scores below this are not worth suggesting.
pub const MIN_SUGGESTION_SCORE: u8 = 40;

/// Finds the known command closest to what the user typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandMatcher;

impl CommandMatcher {
    pub fn new() -> Self {
        Self
    }

    /// The best-scoring candidate for `input`, if any scores at least
    /// [`MIN_SUGGESTION_SCORE`]. Ties go to the earlier candidate.
    pub fn suggest<'a>(&self, input: &str, candidates: &[&'a str]) -> Option<&'a str> {
        let input = input.trim().to_lowercase();
        let mut best: Option<(&'a str, u8)> = None;

        for &candidate in candidates {
            let score = Self::calculate_fuzzy_score(&input, candidate);
            if score < MIN_SUGGESTION_SCORE {
                continue;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate, score));
            }
        }

        best.map(|(candidate, _)| candidate)
    }

    /// Similarity score from 0 to 95 using substring and Levenshtein checks.
    pub fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Prefix or fragment of the command, e.g. "birth" for "birthdays"
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Edit distance between two strings, counted in chars.
    pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Two rows are enough: the previous one and the one being filled.
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }
}
