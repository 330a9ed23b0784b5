//! Domains module containing business logic organized by bounded contexts.
//!
//! The tools domain is the only bounded context of this server: the
//! registry, the dispatch protocol, and the individual tool definitions.

pub mod tools;
