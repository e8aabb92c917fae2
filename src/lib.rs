//! tflink: upload the clipboard to tmpfile.link from the command line.

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod presenter;
