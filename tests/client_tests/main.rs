//! Client Tests
//!
//! Operation façade tests against a stub transport.
