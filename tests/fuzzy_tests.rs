use yatra::shared::fuzzy;

#[test]
fn fuzzy_empty_vs_empty() {
    let dist = fuzzy::distance("", "");
    assert_eq!(dist, 0);
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    let dist = fuzzy::distance("", "abc");
    assert_eq!(dist, 3);
}

#[test]
fn fuzzy_nonempty_vs_empty() {
    let dist = fuzzy::distance("abc", "");
    assert_eq!(dist, 3);
}

#[test]
fn fuzzy_substitution() {
    let dist = fuzzy::distance("eluru", "elura");
    assert_eq!(dist, 1);
}

#[test]
fn fuzzy_insertion() {
    let dist = fuzzy::distance("siddipet", "siddipeta");
    assert_eq!(dist, 1);
}

#[test]
fn fuzzy_deletion() {
    let dist = fuzzy::distance("khammam", "khamam");
    assert_eq!(dist, 1);
}

#[test]
fn fuzzy_unicode_distinct() {
    let dist = fuzzy::distance("హైదరాబాద్", "హైదరాబాదు");
    assert_eq!(dist, 1);
}

#[test]
fn fuzzy_longer_sequence() {
    let dist = fuzzy::distance("intention", "execution");
    assert_eq!(dist, 5);
}

#[test]
fn fuzzy_kitten_sitting() {
    assert_eq!(fuzzy::distance("kitten", "sitting"), 3);
    assert_eq!(fuzzy::distance("sitting", "kitten"), 3);
}

#[test]
fn fuzzy_score_exact_and_miss() {
    assert_eq!(fuzzy::score("nalgonda", "nalgonda"), 1.0);
    assert!(fuzzy::score("suryapet", "bhadrachalam") < 0.5);
}
