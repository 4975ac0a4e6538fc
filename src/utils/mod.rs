mod logging;
#[cfg(test)]
pub mod testing;

pub use logging::*;
