use std::{sync::Arc, time::Duration};

use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, warn};

mod config;
pub use config::*;

use crate::{
    lookup::{self, Resolution},
    table::{RouteAlternative, RoutePair, RouteTable},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No route found from {from} to {to}")]
    NotFound { from: String, to: String },
    #[error("Route lookup timed out after {0:?}")]
    TimedOut(Duration),
    #[error("A newer search replaced this one")]
    Superseded,
}

/// Async front of the route table. Every call waits out the configured
/// latency before answering, bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct RouteService {
    table: Arc<RouteTable>,
    lookup: Arc<lookup::Config>,
    config: Config,
}

impl RouteService {
    pub fn new(table: Arc<RouteTable>, config: self::Config) -> Self {
        Self {
            table,
            lookup: Default::default(),
            config,
        }
    }

    pub fn builtin(config: self::Config) -> Self {
        Self::new(Arc::new(RouteTable::builtin().clone()), config)
    }

    pub fn with_lookup_config(mut self, config: lookup::Config) -> Self {
        self.lookup = Arc::new(config);
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub async fn resolve(&self, from: &str, to: &str) -> Result<Resolution, self::Error> {
        self.wait().await?;
        self.table
            .lookup(from, to)
            .with_config(&self.lookup)
            .solve()
            .ok_or_else(|| Error::NotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    pub async fn find_routes(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Arc<[RouteAlternative]>, self::Error> {
        Ok(self.resolve(from, to).await?.alternatives)
    }

    pub async fn find_route(&self, from: &str, to: &str) -> Result<RouteAlternative, self::Error> {
        let resolution = self.resolve(from, to).await?;
        resolution
            .preferred()
            .cloned()
            .ok_or_else(|| Error::NotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    pub fn available_routes(&self) -> Vec<RoutePair> {
        self.table.available_routes()
    }

    /// A search context where only the latest request may deliver a result.
    pub fn session(&self) -> SearchSession {
        let (generation, _) = watch::channel(0);
        SearchSession {
            service: self.clone(),
            generation: Arc::new(generation),
        }
    }

    async fn wait(&self) -> Result<(), self::Error> {
        let delay = tokio::time::sleep(self.config.latency);
        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, delay).await.map_err(|_| {
                warn!("Route lookup exceeded {:?}", limit);
                Error::TimedOut(limit)
            }),
            None => {
                delay.await;
                Ok(())
            }
        }
    }
}

/// Last request wins: starting a search or calling `cancel` turns every
/// search still in flight into `Error::Superseded`.
#[derive(Debug, Clone)]
pub struct SearchSession {
    service: RouteService,
    generation: Arc<watch::Sender<u64>>,
}

impl SearchSession {
    pub async fn search(&self, from: &str, to: &str) -> Result<Resolution, self::Error> {
        let mut ticket = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            ticket = *generation;
        });
        let mut changes = self.generation.subscribe();
        debug!("Search {} started for {} -> {}", ticket, from, to);

        tokio::select! {
            result = self.service.resolve(from, to) => {
                if *self.generation.borrow() != ticket {
                    warn!("Search {} finished after a newer one started", ticket);
                    return Err(Error::Superseded);
                }
                result
            }
            _ = changes.changed() => {
                warn!("Search {} was superseded", ticket);
                Err(Error::Superseded)
            }
        }
    }

    pub fn cancel(&self) {
        self.generation.send_modify(|generation| *generation += 1);
    }

    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }
}
