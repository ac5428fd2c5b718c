//! Scenario tests for the collision resolver
//!
//! End-to-end checks of `resolve_move` against small hand-built rooms.
