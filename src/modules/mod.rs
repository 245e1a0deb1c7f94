pub mod auth;
pub mod notes;
pub mod store;

mod router;
pub use router::get_router;
