//! teenpatti-rs: hand evaluation for a three-card AKQJ Teen Patti variant
//!
//! Goals:
//! - Deterministic classification and scoring for the six-way hand ranking
//! - Monte-Carlo win-chance estimation against a multi-deck shoe
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a hand and estimate its win chance
//! ```
//! use teenpatti_rs::cards::{Card, Rank, Suit};
//! use teenpatti_rs::estimator::{estimate_win_chance_seeded, DEFAULT_TRIALS};
//! use teenpatti_rs::evaluator::{evaluate_three, Category};
//! use teenpatti_rs::shoe::Shoe;
//!
//! let my_hand = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//! ];
//!
//! let eval = evaluate_three(&my_hand);
//! assert_eq!(eval.category, Category::PureSequence);
//!
//! let remaining = Shoe::default().without_copies(&my_hand);
//! let chance =
//!     estimate_win_chance_seeded(&my_hand, &remaining.faces(), DEFAULT_TRIALS, 42).unwrap();
//! assert!(chance > 90.0);
//! ```

pub mod cards;
pub mod describe;
pub mod estimator;
pub mod evaluator;
pub mod hand;
pub mod round;
pub mod shoe;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
