//! LinkVault: a personal bookmark organizer.
//!
//! Links carry a url, free-text note, tags and an optional folder name;
//! folders are named, color-tagged groups. Both collections live in memory
//! and are written to a local key-value store after every change.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
