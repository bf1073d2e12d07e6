pub mod listing;
pub mod loader;
pub mod lookup;
pub mod offline;
pub mod service;
pub mod shared;
pub mod table;

pub mod prelude {
    pub use crate::listing::{Catalog, ListingFilter, ServiceListing, ServiceType};
    pub use crate::loader::RouteSource;
    pub use crate::lookup::{Direction, Resolution, ReturnTrip};
    pub use crate::offline::{OfflineRoute, OfflineStore};
    pub use crate::service::{RouteService, SearchSession};
    pub use crate::shared::time::Duration;
    pub use crate::table::{
        Category, Itinerary, Mode, Place, RouteAlternative, RouteKey, RoutePair, RouteTable, Step,
    };
}
