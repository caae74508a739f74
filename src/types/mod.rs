//! Record shapes shipped with the crate, grouped by protobuf package.
//!
//! Each record implements [`Message`](crate::codec::Message); records that
//! travel inside `google.protobuf.Any` also implement
//! [`Name`](crate::codec::Name) and are listed in
//! [`default_registry`](crate::registry::default_registry).

pub mod cosmos;
pub mod cosmwasm;
pub mod google;
pub mod sei;
