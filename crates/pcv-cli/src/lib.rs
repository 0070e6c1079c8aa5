//! Library components of the `preclinvar` command-line tool.

pub mod logging;
pub mod pipeline;
