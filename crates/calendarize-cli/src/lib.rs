//! CLI: convert text to events, print/open export links, download ICS files.

pub mod actions;
pub mod cli;
pub mod download;
pub mod error;
