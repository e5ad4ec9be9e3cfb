pub mod logging;
pub mod paths;

pub use paths::expand_home;
