pub mod config;
pub mod logging;
pub mod shutdown;
pub mod task;
pub mod ui;
