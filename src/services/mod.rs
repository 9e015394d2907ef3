// LinkVault services
// Services hold the stateless logic: link filtering, time labels, and settings.

pub mod query;
pub mod settings_engine;
pub mod time_ago;
