//! Helpers shared by unit tests that need a local mock server.

#[path = "../../tests/support/socket_guard.rs"]
pub mod socket_guard;
