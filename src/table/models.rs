use std::{fmt::Display, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    shared::{Identifiable, time::Duration},
    table::key::PlaceKey,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Walk,
    /// Carries the route or line identifier, e.g. `"Bus 101"`.
    Bus(Arc<str>),
}

impl Mode {
    pub fn is_bus(&self) -> bool {
        matches!(self, Mode::Bus(_))
    }

    pub fn route(&self) -> Option<&str> {
        match self {
            Mode::Walk => None,
            Mode::Bus(route) => Some(route),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Walk => f.write_str("walk"),
            Mode::Bus(_) => f.write_str("bus"),
        }
    }
}

/// A single leg of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub mode: Mode,
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub duration: Duration,
}

impl Step {
    pub fn walk(from: &str, to: &str, minutes: u32) -> Self {
        Self {
            mode: Mode::Walk,
            from: from.into(),
            to: to.into(),
            duration: Duration::from_minutes(minutes),
        }
    }

    pub fn bus(route: &str, from: &str, to: &str, minutes: u32) -> Self {
        Self {
            mode: Mode::Bus(route.into()),
            from: from.into(),
            to: to.into(),
            duration: Duration::from_minutes(minutes),
        }
    }

    /// Same leg travelled the other way.
    pub fn reversed(&self) -> Self {
        Self {
            mode: self.mode.clone(),
            from: self.to.clone(),
            to: self.from.clone(),
            duration: self.duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub steps: Vec<Step>,
}

impl Itinerary {
    pub fn new(from: &str, to: &str, steps: Vec<Step>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            steps,
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.duration).sum()
    }

    /// Vehicle changes: a bus leg followed directly by another bus leg.
    pub fn transfers(&self) -> u32 {
        self.steps
            .windows(2)
            .filter(|pair| pair[0].mode.is_bus() && pair[1].mode.is_bus())
            .count() as u32
    }

    /// The journey travelled end to end in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            steps: self.steps.iter().rev().map(Step::reversed).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fastest,
    Cheapest,
    Comfortable,
    Direct,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Fastest => f.write_str("fastest"),
            Category::Cheapest => f.write_str("cheapest"),
            Category::Comfortable => f.write_str("comfortable"),
            Category::Direct => f.write_str("direct"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fastest" => Ok(Category::Fastest),
            "cheapest" => Ok(Category::Cheapest),
            "comfortable" => Ok(Category::Comfortable),
            "direct" => Ok(Category::Direct),
            other => Err(other.to_string()),
        }
    }
}

/// One ranked option for an origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAlternative {
    pub id: Arc<str>,
    pub category: Category,
    pub label: Arc<str>,
    pub highlights: Vec<Arc<str>>,
    pub estimated_fare: u32,
    pub first_bus: Arc<str>,
    pub last_bus: Arc<str>,
    pub journey: Itinerary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePair {
    pub from: Arc<str>,
    pub to: Arc<str>,
}

/// A place name that shows up somewhere in the table.
#[derive(Debug, Clone)]
pub struct Place {
    pub key: PlaceKey,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
}

impl Place {
    pub fn new(name: &str) -> Self {
        Self {
            key: PlaceKey::new(name),
            name: name.trim().into(),
            normalized_name: name.trim().to_lowercase().into(),
        }
    }
}

impl Identifiable for Place {
    fn id(&self) -> &str {
        self.key.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}
