//! Inbound adapters feeding the domain.

pub mod http;
