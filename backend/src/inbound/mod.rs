//! Inbound adapters translating external requests into gateway calls.

pub mod http;
