// LinkVault shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod folder;
pub mod link;
pub mod settings;
