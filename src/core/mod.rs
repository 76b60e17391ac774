pub mod cli;
pub mod cmds;
pub mod extract;
pub mod logging;
pub mod main_shared;
pub mod types;
pub mod writer;
