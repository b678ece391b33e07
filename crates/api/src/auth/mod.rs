//! Bearer-token verification.
//!
//! - [`jwt`] -- optional HS256 verification of bearer tokens.

pub mod jwt;
