use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

mod builtin;
pub mod key;
mod models;
pub use key::*;
pub use models::*;
use tracing::info;

use crate::{loader, shared};

type KeyToAlternatives = HashMap<RouteKey, Arc<[RouteAlternative]>>;
type KeyToIndex = HashMap<PlaceKey, usize>;

static BUILTIN: LazyLock<RouteTable> =
    LazyLock::new(|| RouteTable::new().with_alternatives(builtin::alternatives()));

/// Immutable mapping from an origin/destination pair to its ranked alternatives.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    /// Forward keys in the order they were first inserted.
    pub keys: Box<[RouteKey]>,
    pub places: Box<[Place]>,

    routes: Arc<KeyToAlternatives>,
    place_lookup: Arc<KeyToIndex>,
}

impl RouteTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// The data set shipped with the crate, built once per process.
    pub fn builtin() -> &'static RouteTable {
        &BUILTIN
    }

    /// Adds alternatives, grouped under the key of their journey endpoints.
    /// Alternatives for a key that already exists are appended after the
    /// existing ones.
    pub fn with_alternatives<I>(self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = RouteAlternative>,
    {
        let mut keys = self.keys.into_vec();
        let mut grouped: HashMap<RouteKey, Vec<RouteAlternative>> =
            Arc::unwrap_or_clone(self.routes)
                .into_iter()
                .map(|(key, value)| (key, value.to_vec()))
                .collect();

        for alternative in alternatives {
            let key = RouteKey::new(&alternative.journey.from, &alternative.journey.to);
            grouped
                .entry(key.clone())
                .or_insert_with(|| {
                    keys.push(key);
                    Vec::new()
                })
                .push(alternative);
        }

        // Build place index in first seen order
        let mut places: Vec<Place> = Vec::new();
        let mut place_lookup: KeyToIndex = HashMap::new();
        for key in keys.iter() {
            for alternative in grouped[key].iter() {
                let journey = &alternative.journey;
                let names = [&journey.from, &journey.to]
                    .into_iter()
                    .chain(journey.steps.iter().flat_map(|step| [&step.from, &step.to]));
                for name in names {
                    let place = Place::new(name);
                    if place.key.is_empty() || place_lookup.contains_key(&place.key) {
                        continue;
                    }
                    place_lookup.insert(place.key.clone(), places.len());
                    places.push(place);
                }
            }
        }

        let routes: KeyToAlternatives = grouped
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        info!(
            "Route table holds {} pairs and {} places",
            keys.len(),
            places.len()
        );
        Self {
            keys: keys.into(),
            places: places.into(),
            routes: routes.into(),
            place_lookup: place_lookup.into(),
        }
    }

    /// Streams every alternative out of a route source into the table.
    pub fn with_source(self, source: &loader::RouteSource) -> Result<Self, loader::Error> {
        let alternatives = source.load()?;
        Ok(self.with_alternatives(alternatives))
    }

    pub fn get(&self, key: &RouteKey) -> Option<&Arc<[RouteAlternative]>> {
        self.routes.get(key)
    }

    pub fn contains(&self, key: &RouteKey) -> bool {
        self.routes.contains_key(key)
    }

    /// Number of forward pairs.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn alternatives(&self) -> impl Iterator<Item = &RouteAlternative> {
        self.keys
            .iter()
            .filter_map(|key| self.routes.get(key))
            .flat_map(|value| value.iter())
    }

    pub fn place(&self, name: &str) -> Option<&Place> {
        let index = self.place_lookup.get(&PlaceKey::new(name))?;
        Some(&self.places[*index])
    }

    /// Place names matching a partially typed needle, best first.
    pub fn search_places<'a>(&'a self, needle: &str) -> Vec<&'a Place> {
        shared::search(needle, &self.places)
    }
}
