//! Headless computer-vs-computer games.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::{Phase, Session, Symbol, select_move};
use tracing::{debug, info, instrument, warn};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Total games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` random-vs-random games and counts the results.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>) -> Tally {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::new();
    let mut tally = Tally::default();

    for game in 0..games {
        session.reset();
        loop {
            match session.phase() {
                Phase::AwaitingMove(mover) => {
                    let Some(index) = select_move(session.board(), mover, &mut rng) else {
                        warn!(game, "No move on a live board");
                        break;
                    };
                    if let Err(e) = session.submit_move(index) {
                        warn!(game, error = %e, "Simulated move rejected");
                        break;
                    }
                }
                Phase::Won { symbol, .. } => {
                    match symbol {
                        Symbol::X => tally.x_wins += 1,
                        Symbol::O => tally.o_wins += 1,
                    }
                    break;
                }
                Phase::Drawn => {
                    tally.draws += 1;
                    break;
                }
            }
        }
        debug!(game, "\n{}", session.board());
    }

    info!(%tally, "Simulation finished");
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_counted() {
        let tally = simulate(200, Some(11));
        assert_eq!(tally.total(), 200);
    }

    #[test]
    fn test_same_seed_same_tally() {
        assert_eq!(simulate(100, Some(99)), simulate(100, Some(99)));
    }

    #[test]
    fn test_x_has_first_move_advantage() {
        let tally = simulate(2000, Some(4));
        assert!(tally.x_wins() > tally.o_wins());
    }

    #[test]
    fn test_display() {
        assert_eq!(Tally::default().to_string(), "X wins: 0, O wins: 0, draws: 0");
    }
}
