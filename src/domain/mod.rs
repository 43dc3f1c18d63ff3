//! Pure chess domain logic: move-token translation and move resolution.
//! No I/O and no async - this is the stateless layer.

pub mod chess;
pub mod token;

pub use chess::{position_fen, resolve_move};
pub use token::RawMove;
