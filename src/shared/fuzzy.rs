use std::cmp;

/// Levenshtein distance counted in chars.
pub fn distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }

    let (long, short) = if s2.chars().count() > s1.chars().count() {
        (s2, s1)
    } else {
        (s1, s2)
    };
    let short: Vec<char> = short.chars().collect();

    // Single row of the edit matrix, indexed by position in `short`
    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let sub_cost = if lc == *sc { 0 } else { 1 };
            let value = cmp::min(cmp::min(row[j + 1] + 1, row[j] + 1), diagonal + sub_cost);
            diagonal = row[j + 1];
            row[j + 1] = value;
        }
    }
    row[short.len()]
}

fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|token| !token.is_empty())
}

/// Scores how well `needle` matches `hay` in `0.0..=1.0`.
/// Both are expected to be lower-cased already.
pub fn score(needle: &str, hay: &str) -> f64 {
    let hay_tokens: Vec<_> = tokens(hay).collect();
    if hay_tokens.is_empty() {
        return 0.0;
    }

    let mut count = 0;
    let mut score: f64 = 0.0;
    for needle_token in tokens(needle) {
        count += 1;
        score += hay_tokens
            .iter()
            .map(|hay_token| score_inner(needle_token, hay_token))
            .fold(0.0, f64::max);
    }

    if count == 0 { 0.0 } else { score / count as f64 }
}

fn score_inner(needle: &str, hay: &str) -> f64 {
    // Half typed names count as a full hit for autocomplete
    if hay.starts_with(needle) {
        return 1.0;
    }
    let dist = distance(needle, hay);
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    if longest == 0 {
        0.0
    } else {
        1.0 - (dist as f64 / longest as f64)
    }
}

#[test]
fn fuzzy_prefix_is_full_hit() {
    assert_eq!(score("kari", "karimnagar"), 1.0);
}

#[test]
fn fuzzy_token_order_does_not_matter() {
    assert_eq!(score("rajanagaram kotha", "kotha rajanagaram"), 1.0);
}

#[test]
fn fuzzy_hyphen_splits_tokens() {
    assert_eq!(score("rajanagaram", "kotha-rajanagaram"), 1.0);
}

#[test]
fn fuzzy_empty_needle_scores_zero() {
    assert_eq!(score("", "eluru"), 0.0);
    assert_eq!(score("   ", "eluru"), 0.0);
}

#[test]
fn fuzzy_typo_scores_below_exact() {
    let typo = score("vijayawda", "vijayawada");
    assert!(typo > 0.8 && typo < 1.0);
}
