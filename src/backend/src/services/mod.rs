//! Business logic services
//!
//! Kept separate from HTTP concerns so they can be tested without a server.

pub mod normalize;
