//! Cosmos SDK record shapes.

pub mod accesscontrol;
pub mod base;
pub mod crypto;
pub mod feegrant;
pub mod signing;
pub mod tx;
