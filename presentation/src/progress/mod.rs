//! Progress indicators for long-running commands

pub mod spinner;
