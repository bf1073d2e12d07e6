use std::{collections::BTreeSet, fmt::Display, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::shared::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    Express,
    Local,
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Express => f.write_str("Express"),
            ServiceType::Local => f.write_str("Local"),
        }
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "express" => Ok(ServiceType::Express),
            "local" => Ok(ServiceType::Local),
            other => Err(other.to_string()),
        }
    }
}

/// A scheduled service shown on the routes page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: u32,
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub service: ServiceType,
    pub duration: Duration,
    pub fare: u32,
    pub transfers: u32,
    pub frequency: Arc<str>,
    pub operator: Arc<str>,
    pub favorite: bool,
}

/// `None` fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Matched against origin, destination and operator.
    pub term: Option<String>,
    pub service: Option<ServiceType>,
    pub operator: Option<String>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &ServiceListing) -> bool {
        let term = match &self.term {
            Some(term) => {
                let term = term.trim().to_lowercase();
                [&listing.from, &listing.to, &listing.operator]
                    .iter()
                    .any(|value| value.to_lowercase().contains(&term))
            }
            None => true,
        };
        let service = self.service.is_none_or(|service| service == listing.service);
        let operator = self
            .operator
            .as_deref()
            .is_none_or(|operator| operator.eq_ignore_ascii_case(&listing.operator));
        term && service && operator
    }
}

struct Entry {
    from: &'static str,
    to: &'static str,
    service: ServiceType,
    minutes: u32,
    fare: u32,
    transfers: u32,
    frequency: &'static str,
    operator: &'static str,
    favorite: bool,
}

impl Entry {
    fn into_listing(self, id: u32) -> ServiceListing {
        ServiceListing {
            id,
            from: self.from.into(),
            to: self.to.into(),
            service: self.service,
            duration: Duration::from_minutes(self.minutes),
            fare: self.fare,
            transfers: self.transfers,
            frequency: self.frequency.into(),
            operator: self.operator.into(),
            favorite: self.favorite,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<ServiceListing>,
}

impl Catalog {
    pub fn new(listings: Vec<ServiceListing>) -> Self {
        Self { listings }
    }

    pub fn builtin() -> Self {
        let entries = [
            Entry {
                from: "Hyderabad",
                to: "Karimnagar",
                service: ServiceType::Express,
                minutes: 150,
                fare: 120,
                transfers: 0,
                frequency: "Every 30 min",
                operator: "TSRTC",
                favorite: false,
            },
            Entry {
                from: "Vijayawada",
                to: "Kotha Rajanagaram",
                service: ServiceType::Local,
                minutes: 105,
                fare: 85,
                transfers: 1,
                frequency: "Every 1 hour",
                operator: "APSRTC",
                favorite: true,
            },
            Entry {
                from: "Warangal",
                to: "Bhadrachalam",
                service: ServiceType::Express,
                minutes: 195,
                fare: 150,
                transfers: 0,
                frequency: "Every 2 hours",
                operator: "TSRTC",
                favorite: false,
            },
            Entry {
                from: "Karimnagar",
                to: "Nizamabad",
                service: ServiceType::Local,
                minutes: 120,
                fare: 95,
                transfers: 1,
                frequency: "Every 45 min",
                operator: "TSRTC",
                favorite: false,
            },
            Entry {
                from: "Nalgonda",
                to: "Suryapet",
                service: ServiceType::Express,
                minutes: 90,
                fare: 70,
                transfers: 0,
                frequency: "Every 20 min",
                operator: "TSRTC",
                favorite: false,
            },
            Entry {
                from: "Khammam",
                to: "Bhadrachalam",
                service: ServiceType::Local,
                minutes: 165,
                fare: 110,
                transfers: 1,
                frequency: "Every 1 hour",
                operator: "TSRTC",
                favorite: false,
            },
        ];
        let listings = entries
            .into_iter()
            .zip(1..)
            .map(|(entry, id)| entry.into_listing(id))
            .collect();
        Self { listings }
    }

    pub fn listings(&self) -> &[ServiceListing] {
        &self.listings
    }

    pub fn filter(&self, filter: &ListingFilter) -> Vec<&ServiceListing> {
        self.listings
            .iter()
            .filter(|listing| filter.matches(listing))
            .collect()
    }

    /// Returns the new favorite state, `None` for an unknown id.
    pub fn toggle_favorite(&mut self, id: u32) -> Option<bool> {
        let listing = self.listings.iter_mut().find(|listing| listing.id == id)?;
        listing.favorite = !listing.favorite;
        Some(listing.favorite)
    }

    pub fn favorites(&self) -> Vec<&ServiceListing> {
        self.listings.iter().filter(|listing| listing.favorite).collect()
    }

    /// Distinct operators, sorted.
    pub fn operators(&self) -> Vec<&str> {
        self.listings
            .iter()
            .map(|listing| &*listing.operator)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
