pub mod config;
pub mod init;
pub mod print;
pub mod write;

pub use config::execute_config;
pub use init::execute_init;
pub use print::execute_print;
pub use write::execute_write;
