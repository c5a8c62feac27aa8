//! # Segreti
//!
//! `segreti` is a small credential-based web authentication service:
//! users register with an email and password, log in with the same
//! credentials, and reach a gated "secrets" page only on a match.
//!
//! Passwords are never stored in plaintext. Two storage schemes are
//! supported, selected at startup:
//!
//! - **hashed** (default): salted bcrypt with a configurable cost.
//! - **encrypted**: ChaCha20-Poly1305 under a process-start secret,
//!   kept for compatibility with databases written by the reversible
//!   scheme.
//!
//! The credential core lives in [`credentials`]; user persistence in
//! [`store`]; HTTP wiring in [`segreti`].

pub mod cli;
pub mod credentials;
pub mod segreti;
pub mod store;
