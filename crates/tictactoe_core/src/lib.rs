//! Tic-tac-toe rules engine.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`evaluate`]) over the eight winning lines
//! - **Selector**: the computer player's uniformly random move choice ([`select_move`])
//! - **Session**: the mutable game state machine ([`Session`])
//! - **Snapshot**: immutable copies of session state for presentation ([`Snapshot`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Phase, Session, Symbol};
//!
//! let mut session = Session::new();
//! for index in [0, 4, 1, 3, 2] {
//!     session.submit_move(index).unwrap();
//! }
//! assert!(matches!(session.phase(), Phase::Won { symbol: Symbol::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod selector;
mod session;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{Outcome, WINNING_LINES, WinningLine, evaluate};
pub use selector::{select_move, select_move_with_thread_rng};
pub use session::{Mode, Phase, Session};
pub use snapshot::{Snapshot, Status};
pub use types::{Board, CELL_COUNT, Cell, Symbol};
