pub mod contention;
pub mod error;
pub mod flow;
pub mod vcs;

pub use error::{Error, Result};

#[cfg(test)]
mod test;
