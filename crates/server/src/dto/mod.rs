mod listing;
mod place;
mod route;
pub use listing::*;
pub use place::*;
pub use route::*;
