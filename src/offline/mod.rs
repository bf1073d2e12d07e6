use std::{fs::File, io, path::Path};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{
    shared::time::Duration,
    table::{RouteKey, RouteTable},
};

/// How long a downloaded route stays valid.
pub const VALIDITY_DAYS: u64 = 30;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Origin and destination must not be blank")]
    BlankPlace,
    #[error("No route found from {from} to {to}")]
    RouteNotFound { from: String, to: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// A route saved for use without connectivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineRoute {
    pub id: u64,
    pub from: String,
    pub to: String,
    pub duration: Duration,
    pub estimated_fare: u32,
    pub downloaded_at: NaiveDate,
    pub expires_at: NaiveDate,
}

impl OfflineRoute {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expires_at
    }

    /// Negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expires_at - today).num_days()
    }

    fn key(&self) -> RouteKey {
        RouteKey::new(&self.from, &self.to)
    }

    fn stamp(&mut self, today: NaiveDate) {
        self.downloaded_at = today;
        self.expires_at = expiry(today);
    }
}

fn expiry(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(VALIDITY_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Saved routes, newest first.
#[derive(Debug, Clone, Default)]
pub struct OfflineStore {
    routes: Vec<OfflineRoute>,
    next_id: u64,
}

impl OfflineStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn routes(&self) -> &[OfflineRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&OfflineRoute> {
        self.routes.iter().find(|route| route.id == id)
    }

    /// Saves the preferred alternative for the pair. Saving a pair that is
    /// already stored renews it instead of adding a second copy.
    pub fn download(
        &mut self,
        table: &RouteTable,
        from: &str,
        to: &str,
        today: NaiveDate,
    ) -> Result<&OfflineRoute, self::Error> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(Error::BlankPlace);
        }
        let alternative = table
            .find_route(from, to)
            .ok_or_else(|| Error::RouteNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let key = RouteKey::new(from, to);
        if let Some(index) = self.routes.iter().position(|route| route.key() == key) {
            let mut route = self.routes.remove(index);
            route.duration = alternative.journey.total_duration();
            route.estimated_fare = alternative.estimated_fare;
            route.stamp(today);
            info!("Renewed offline route {} ({})", route.id, key);
            self.routes.insert(0, route);
            return Ok(&self.routes[0]);
        }

        self.next_id += 1;
        let route = OfflineRoute {
            id: self.next_id,
            from: alternative.journey.from.to_string(),
            to: alternative.journey.to.to_string(),
            duration: alternative.journey.total_duration(),
            estimated_fare: alternative.estimated_fare,
            downloaded_at: today,
            expires_at: expiry(today),
        };
        info!("Saved offline route {} ({})", route.id, key);
        self.routes.insert(0, route);
        Ok(&self.routes[0])
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let len = self.routes.len();
        self.routes.retain(|route| route.id != id);
        len != self.routes.len()
    }

    /// Restarts the validity window of a saved route.
    pub fn refresh(&mut self, id: u64, today: NaiveDate) -> bool {
        match self.routes.iter_mut().find(|route| route.id == id) {
            Some(route) => {
                route.stamp(today);
                true
            }
            None => false,
        }
    }

    /// Routes whose origin or destination contains `term`, ignoring case.
    pub fn filter(&self, term: &str) -> Vec<&OfflineRoute> {
        let term = term.trim().to_lowercase();
        self.routes
            .iter()
            .filter(|route| {
                route.from.to_lowercase().contains(&term) || route.to.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn expired(&self, today: NaiveDate) -> Vec<&OfflineRoute> {
        self.routes
            .iter()
            .filter(|route| route.is_expired(today))
            .collect()
    }

    pub fn save(&self, path: &Path) -> Result<(), self::Error> {
        let mut writer = csv::Writer::from_writer(File::create(path)?);
        for route in self.routes.iter() {
            writer.serialize(route)?;
        }
        writer.flush()?;
        info!("Wrote {} offline routes to {:?}", self.routes.len(), path);
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, self::Error> {
        let mut reader = csv::Reader::from_reader(File::open(path)?);
        let routes = reader
            .deserialize()
            .collect::<Result<Vec<OfflineRoute>, _>>()?;
        let next_id = routes.iter().map(|route| route.id).max().unwrap_or(0);
        info!("Read {} offline routes from {:?}", routes.len(), path);
        Ok(Self { routes, next_id })
    }
}
