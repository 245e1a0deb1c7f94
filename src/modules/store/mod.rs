mod client;
mod query;

pub use client::{AuthUser, Client, Error};
pub use query::{Order, QueryBuilder};
