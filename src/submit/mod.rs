pub mod client;

pub use client::{HttpSubmitClient, SubmitConfig, SubmitError, DEFAULT_ENDPOINT};
