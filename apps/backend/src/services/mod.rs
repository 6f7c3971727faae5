//! Coordinator services bridging validated actions into the domain.

pub mod games;

pub use games::GameService;
