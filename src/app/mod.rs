//! Application orchestration: startup wiring, the greeter loop, and launch.

mod entry;
pub mod greeter;
pub mod launch;

pub use entry::{run, run_init, RunOptions};
pub use greeter::{Greeter, GreeterState, View};
pub use launch::{split_command, ExecLauncher, Launcher};
