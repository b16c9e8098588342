//! Santase rules as pure functions over round state.
//!
//! - `announce`: marriage evaluation and the claimed-marriage registry
//! - `validator`: legal actions for the player about to act
//! - `trick`: trick resolution
//! - `scoring`: round points to game points
//!
//! Nothing here mutates a round; `round::Round` applies the results.

pub mod announce;
pub mod scoring;
pub mod trick;
pub mod validator;

pub use announce::{evaluate_announce, Announce, AnnounceRegistry};
pub use scoring::{margin_points, score_round, RoundEndReason, RoundOutcome};
pub use trick::{resolve_trick, Trick, TrickOutcome, TrickWinner};
pub use validator::{legal_actions, LegalActions};
