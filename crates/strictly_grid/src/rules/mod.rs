//! Game rules for the grid game.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the engine
//! so they can be checked in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::has_line;
