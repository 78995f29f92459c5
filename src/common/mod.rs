pub mod clock;
mod state;

pub use state::AppState;
