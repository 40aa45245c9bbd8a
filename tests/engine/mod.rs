//! End-to-end tests over the analysis engines.

mod io;
mod properties;
mod report_files;
mod session;
mod signatures;
