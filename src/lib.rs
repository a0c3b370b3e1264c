pub mod config;
pub mod deferred;
pub mod dependencies;
pub mod local;
pub mod logging;
pub mod runtime;
pub mod version;
