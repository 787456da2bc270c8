pub mod cache;
pub mod error;
pub mod normalize;
pub mod service;

pub use cache::LookupCache;
pub use error::LookupError;
pub use normalize::normalize;
pub use service::LookupService;

#[cfg(test)]
mod tests;
