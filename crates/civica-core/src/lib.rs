pub mod actions;
pub mod config;
pub mod error;
pub mod persistence;
pub mod reducer;
pub mod seed;
pub mod state;

pub use actions::*;
pub use error::*;
pub use reducer::*;
pub use state::*;

pub use persistence::*;
