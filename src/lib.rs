//! Forum API - threads, comments and comment soft-deletion
//!
//! Hexagonal layout: `domain` holds value objects and the error taxonomy,
//! `ports` the capability traits, `application` one orchestrating handler
//! per operation, and `adapters` the PostgreSQL, in-memory, auth and HTTP
//! implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
