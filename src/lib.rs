//! Typed client for the warp agent CLI.
//!
//! This crate shells out to the external `warp` binary: it merges typed
//! option records, builds the exact argument vector for a sub-command,
//! invokes the binary (waiting or streaming), and parses the rendered
//! profile-list table into typed records. It does not manage the tool's
//! lifecycle, interpret agent output, or add retries; one call is one
//! process.
//!
//! # Quick start
//!
//! ```no_run
//! use warp_client::{ProfileListOptions, RunOptions, WarpClient};
//!
//! # fn main() -> warp_client::Result<()> {
//! let client = WarpClient::with_defaults(RunOptions {
//!     api_key: Some("key".to_string()),
//!     ..Default::default()
//! });
//!
//! // Wait mode: inspect the exit code yourself.
//! let result = client.agent().run(RunOptions {
//!     prompt: Some("hello".to_string()),
//!     ..Default::default()
//! });
//! println!("exit: {:?}", result.exit_code);
//!
//! // Profile lookup: failures carry the captured stderr.
//! let profiles = client.profiles().list(ProfileListOptions::default())?;
//! for profile in profiles {
//!     println!("{}: {}", profile.id, profile.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod command;
pub mod error;
pub mod invoker;
pub mod options;
pub mod profile;
pub mod table;

pub use client::{AgentResource, ProfilesResource, WARP_BINARY, WarpClient};
pub use command::WarpCommand;
pub use error::{Result, WarpError};
pub use invoker::{AgentStream, ExecutionResult, ProcessInvoker, SystemInvoker};
pub use options::{OutputFormat, ProfileListOptions, RunOptions};
pub use profile::{Profile, parse_profiles};
pub use table::{TableGlyphs, decode_rows};
