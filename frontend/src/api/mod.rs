mod absences;
mod audit;
pub mod client;
mod reviews;
pub mod types;

pub use client::*;
pub use types::*;
