pub mod fuzzy;
pub mod time;

pub use time::*;

use rayon::prelude::*;
use std::cmp::Ordering;

/// Minimum score a fuzzy hit needs to be returned.
pub const MIN_SCORE: f64 = 0.5;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Generic fuzzy search function built for multithreaded searching.
/// Best matches come first, ties keep haystack order.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Identifiable,
{
    let normalized_needle = needle.to_lowercase();
    let mut results: Vec<(usize, &T, f64)> = haystack
        .par_iter()
        .enumerate()
        .filter_map(|(i, hay)| {
            let score = fuzzy::score(&normalized_needle, hay.normalized_name());
            if score >= MIN_SCORE {
                Some((i, hay, score))
            } else {
                None
            }
        })
        .collect();

    results.par_sort_unstable_by(|(ia, _, a), (ib, _, b)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal).then(ia.cmp(ib))
    });
    results.into_iter().map(|(_, entity, _)| entity).collect()
}
