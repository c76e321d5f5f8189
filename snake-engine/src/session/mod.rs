mod game_loop;
mod renderer;

pub use game_loop::{SessionState, create_session, run_game_loop};
pub use renderer::{GameOverSummary, Renderer};
