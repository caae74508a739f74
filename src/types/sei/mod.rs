//! Sei chain modules.

pub mod dex;
pub mod oracle;
pub mod oracle_legacy;
pub mod oracle_query;
