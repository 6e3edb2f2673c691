//! Concrete game tables implementing `rules::Game`.

pub mod round_table;
