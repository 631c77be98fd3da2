pub mod args;
pub mod commands;
pub mod console;
pub mod pager;
pub mod session;

pub use args::Cli;
pub use commands::run;
pub use console::Console;
pub use pager::RawDataPager;
pub use session::Session;
