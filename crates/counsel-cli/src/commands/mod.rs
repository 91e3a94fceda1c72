//! Command implementations.
//!
//! Each command returns its rendered output; `main` prints it.

pub mod ingest;
pub mod init;
pub mod search;
pub mod show;
pub mod stats;

pub use self::ingest::execute_ingest;
pub use self::init::execute_init;
pub use self::search::execute_search;
pub use self::show::execute_show;
pub use self::stats::execute_stats;
