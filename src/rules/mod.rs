//! Game rules: win detection

pub mod win;

pub use win::{is_winning_placement, winning_line};
