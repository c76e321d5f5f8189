pub mod config;
pub mod game;
pub mod logger;
pub mod session;

pub use game::{Direction, EndReason, GameSettings, GameSnapshot, GameState, Point, SessionRng, Snake};
pub use session::{GameOverSummary, Renderer, SessionState, create_session, run_game_loop};
