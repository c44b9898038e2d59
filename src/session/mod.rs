//! Game session flow.
//!
//! A [`Session`] owns one configured game: who plays, which mark the human
//! holds, the automated player's tier, and the board. Human moves come in
//! through [`Session::play`]; the automated player moves through
//! [`Session::computer_move`].
//!
//! ```rust
//! use rust_ttt::core::Mark;
//! use rust_ttt::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::human_vs_human("Ada", "Bob")).unwrap();
//! session.play(4).unwrap();
//! assert_eq!(session.next_mark(), Mark::O);
//! assert_eq!(session.status().to_string(), "Next turn: O (Bob)");
//! ```

pub mod config;
pub mod game;

pub use config::{PlayMode, SessionConfig, COMPUTER_NAME};
pub use game::{Session, Status};
