// LinkVault state managers
// Managers own the in-memory collections and their persistence.

pub mod link_vault;
pub mod store;
