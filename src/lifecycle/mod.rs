//! Process lifecycle concerns.

pub mod shutdown;

pub use shutdown::{trigger_on_ctrl_c, Shutdown};
