//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](super::Board). The round evaluates them
//! after every placement, win first, so a full board that completes a line
//! counts as a win.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{LINES, check_win};
