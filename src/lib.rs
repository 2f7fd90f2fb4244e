pub mod activation;
pub mod events;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod replay;
pub mod session;
pub mod settings;
pub mod timers;
