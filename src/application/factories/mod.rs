/// Factories for creating infrastructure adapters
mod presenter_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
