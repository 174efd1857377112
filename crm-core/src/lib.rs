mod client;
mod clock;
mod directory;
mod error;
mod filter;
mod form;
mod notify;
mod seed;
mod store;

pub use client::*;
pub use clock::*;
pub use directory::*;
pub use error::*;
pub use filter::*;
pub use form::*;
pub use notify::*;
pub use seed::sample_clients;
pub use store::*;
