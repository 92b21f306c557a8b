// Handlers module

pub mod generate_comfort;
pub mod health;
pub mod rejection;

pub use generate_comfort::{generate_comfort, generate_comfort_handler};
pub use health::health_handler;
pub use rejection::handle_rejection;
