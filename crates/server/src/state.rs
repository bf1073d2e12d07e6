use tokio::sync::RwLock;
use yatra::prelude::*;

pub struct AppState {
    pub service: RouteService,
    pub catalog: RwLock<Catalog>,
}

impl AppState {
    pub fn new(service: RouteService, catalog: Catalog) -> Self {
        Self {
            service,
            catalog: RwLock::new(catalog),
        }
    }
}
