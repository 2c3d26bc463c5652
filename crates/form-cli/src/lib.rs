//! Library side of the `yarn-form` command.

pub mod input;
pub mod logging;
pub mod summary;
