use std::future::Future;

use crate::game::{EndReason, GameSnapshot};

/// Presentation seam: the session pushes a snapshot after every tick and a
/// summary once the game ends. Drawing and windowing live behind this trait.
pub trait Renderer: Send + 'static {
    fn render_frame(&mut self, snapshot: &GameSnapshot) -> impl Future<Output = ()> + Send;

    fn render_game_over(&mut self, summary: &GameOverSummary) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub reason: EndReason,
    pub ticks: u64,
}
