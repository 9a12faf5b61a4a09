pub mod client;
pub mod query;
pub mod token;

pub use client::{WorldClient, WORLD_ENDPOINT};
pub use token::csrf_token;
