mod listing;
mod routes;
mod search;
pub use listing::*;
pub use routes::*;
pub use search::*;
