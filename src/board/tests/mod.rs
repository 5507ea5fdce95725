//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move counts from the starting position
//! - `edge_cases.rs` - Special positions and edge cases
//! - `game_flow.rs` - Short games played through `make_move`
//! - `proptest.rs` - Property-based tests
//! - `search.rs` - Search behaviour on whole positions

mod search;
