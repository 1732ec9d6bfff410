pub mod comparison;
pub mod dataset;
pub mod error;
pub mod features;
pub mod home;
pub mod news;
pub mod platform;
pub mod pricing;
pub mod profile;
pub mod route;
pub mod scoring;

#[cfg(feature = "network")]
pub mod cache;
#[cfg(feature = "network")]
pub mod config;
#[cfg(feature = "network")]
pub mod loader;
#[cfg(feature = "network")]
pub mod sync;

pub use dataset::Dataset;
pub use error::AcError;
pub use platform::{Platform, PricingTier, SpecValue};
