//! Estate CLI - command line tools for estate drone planning.
//!
//! - plan: compute a sweep locally from an estate file
//! - upload: push an estate file to a running server and fetch its plan
//! - random: generate a random estate file

pub mod client;
pub mod estate_file;
pub mod random;

pub use client::EstateClient;
pub use estate_file::{EstateFile, PlanOutput};
pub use random::{random_estate, MAX_RANDOM_TREES};
