use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;

use crate::config::Validate;
use crate::game::{Direction, GameSettings, GameState, SessionRng};
use crate::log;

use super::renderer::{GameOverSummary, Renderer};

pub struct SessionState {
    pub game_state: GameState,
    pub rng: SessionRng,
    pub tick: u64,
}

pub fn create_session(settings: GameSettings, seed: u64) -> Result<SessionState, String> {
    settings.validate()?;

    let mut rng = SessionRng::new(seed);
    let game_state = GameState::new(settings, &mut rng);
    Ok(SessionState {
        game_state,
        rng,
        tick: 0,
    })
}

/// Drives the game to completion: sleep the interval the state currently
/// reports, drain pending direction intents, tick, push a snapshot. No
/// further ticks are scheduled once the game goes terminal.
pub async fn run_game_loop<R: Renderer>(
    mut session: SessionState,
    mut inputs: UnboundedReceiver<Direction>,
    renderer: &mut R,
) -> GameOverSummary {
    log!("Game session started with seed {}", session.rng.seed());

    loop {
        sleep(session.game_state.tick_interval()).await;

        while let Ok(direction) = inputs.try_recv() {
            session.game_state.set_direction(direction);
        }

        session.game_state.tick(&mut session.rng);
        session.tick += 1;

        renderer.render_frame(&session.game_state.snapshot()).await;

        if !session.game_state.is_running() {
            break;
        }
    }

    let summary = GameOverSummary {
        score: session.game_state.score(),
        reason: session
            .game_state
            .end_reason()
            .expect("terminal game always has an end reason"),
        ticks: session.tick,
    };
    renderer.render_game_over(&summary).await;
    summary
}
