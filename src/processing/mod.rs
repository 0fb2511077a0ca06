pub mod executor;
pub mod icons;
pub mod imaging;

pub use executor::{IconExecutor, convert_file};
