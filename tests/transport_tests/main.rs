//! Transport Tests
//!
//! URL resolution and real HTTP exchanges against a one-shot local server.

mod url_tests;
