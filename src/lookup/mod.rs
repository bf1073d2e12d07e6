use std::{collections::HashMap, sync::Arc};

use serde::Serialize;
use tracing::debug;

use crate::table::{Category, RouteAlternative, RouteKey, RoutePair, RouteTable};

pub const REVERSE_SUFFIX: &str = "-reverse";

/// Values to use on a synthesized return trip instead of the outbound ones.
/// Unset fields are copied from the outbound alternative.
#[derive(Debug, Clone, Default)]
pub struct ReturnTrip {
    pub estimated_fare: Option<u32>,
    pub first_bus: Option<Arc<str>>,
    pub last_bus: Option<Arc<str>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub reverse_suffix: String,
    /// Keyed by the id of the outbound alternative.
    pub return_trips: HashMap<Arc<str>, ReturnTrip>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reverse_suffix: REVERSE_SUFFIX.into(),
            return_trips: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Served straight from the table.
    Forward,
    /// Synthesized from the entry stored the other way round.
    Reverse,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub key: RouteKey,
    pub direction: Direction,
    pub alternatives: Arc<[RouteAlternative]>,
}

impl Resolution {
    pub fn preferred(&self) -> Option<&RouteAlternative> {
        preferred(&self.alternatives)
    }
}

pub struct Lookup<'a> {
    table: &'a RouteTable,
    key: RouteKey,
    config: Option<&'a Config>,
}

impl<'a> Lookup<'a> {
    pub fn new(table: &'a RouteTable, from: &str, to: &str) -> Self {
        Self {
            table,
            key: RouteKey::new(from, to),
            config: None,
        }
    }

    pub fn with_config(mut self, config: &'a Config) -> Self {
        self.config = Some(config);
        self
    }

    /// `None` when neither direction is in the table.
    pub fn solve(self) -> Option<Resolution> {
        let default = Config::default();
        let config = self.config.unwrap_or(&default);

        if let Some(alternatives) = self.table.get(&self.key)
            && !alternatives.is_empty()
        {
            debug!("Forward hit for {}", self.key);
            return Some(Resolution {
                key: self.key,
                direction: Direction::Forward,
                alternatives: alternatives.clone(),
            });
        }

        let reverse_key = self.key.reversed();
        if let Some(alternatives) = self.table.get(&reverse_key)
            && !alternatives.is_empty()
        {
            debug!("Reverse hit for {} via {}", self.key, reverse_key);
            let alternatives: Arc<[RouteAlternative]> = alternatives
                .iter()
                .map(|alternative| reverse(alternative, config))
                .collect();
            return Some(Resolution {
                key: self.key,
                direction: Direction::Reverse,
                alternatives,
            });
        }

        debug!("No route for {}", self.key);
        None
    }
}

/// Builds the return trip of an outbound alternative. The step order is
/// flipped and every step runs the other way.
pub fn reverse(alternative: &RouteAlternative, config: &Config) -> RouteAlternative {
    let journey = alternative.journey.reversed();
    let default_label = format!("{} → {}", alternative.journey.from, alternative.journey.to);
    let label: Arc<str> = if *alternative.label == default_label {
        format!("{} → {}", journey.from, journey.to).into()
    } else {
        alternative.label.clone()
    };

    let mut value = RouteAlternative {
        id: format!("{}{}", alternative.id, config.reverse_suffix).into(),
        category: alternative.category,
        label,
        highlights: alternative.highlights.clone(),
        estimated_fare: alternative.estimated_fare,
        first_bus: alternative.first_bus.clone(),
        last_bus: alternative.last_bus.clone(),
        journey,
    };
    if let Some(trip) = config.return_trips.get(&alternative.id) {
        if let Some(fare) = trip.estimated_fare {
            value.estimated_fare = fare;
        }
        if let Some(first_bus) = &trip.first_bus {
            value.first_bus = first_bus.clone();
        }
        if let Some(last_bus) = &trip.last_bus {
            value.last_bus = last_bus.clone();
        }
    }
    value
}

/// The alternative tagged fastest, else the first one listed.
pub fn preferred(alternatives: &[RouteAlternative]) -> Option<&RouteAlternative> {
    alternatives
        .iter()
        .find(|alternative| alternative.category == Category::Fastest)
        .or_else(|| alternatives.first())
}

impl RouteTable {
    pub fn lookup<'a>(&'a self, from: &str, to: &str) -> Lookup<'a> {
        Lookup::new(self, from, to)
    }

    /// Ranked alternatives for the pair, synthesizing the return trip when
    /// only the opposite direction is stored. `None` means no route.
    ///
    /// Journey endpoints carry the stored display names rather than the raw
    /// input, so `"karimnagar "` comes back as `"Karimnagar"`.
    pub fn find_routes(&self, from: &str, to: &str) -> Option<Arc<[RouteAlternative]>> {
        self.lookup(from, to)
            .solve()
            .map(|resolution| resolution.alternatives)
    }

    pub fn find_route(&self, from: &str, to: &str) -> Option<RouteAlternative> {
        let alternatives = self.find_routes(from, to)?;
        preferred(&alternatives).cloned()
    }

    /// Every pair with a forward entry, in table order.
    pub fn available_routes(&self) -> Vec<RoutePair> {
        self.keys
            .iter()
            .filter_map(|key| self.get(key)?.first())
            .map(|alternative| RoutePair {
                from: alternative.journey.from.clone(),
                to: alternative.journey.to.clone(),
            })
            .collect()
    }
}
