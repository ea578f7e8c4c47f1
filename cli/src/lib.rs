pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod logging;
pub mod queries;
pub mod utils;

// Re-export commonly used items
pub use app::ActorPathApp;
pub use args::{Args, Command, Weighting};
pub use queries::{ActorPair, parse_actor_names, parse_actor_pairs};
pub use utils::format_number;
