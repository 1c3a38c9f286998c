pub mod cli;
mod context;
pub mod resolve;
pub mod transcript;

pub use context::AppContext;
pub use resolve::{RunOutcome, execute, resolve};
