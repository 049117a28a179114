//! Client facade over the warp binary.
//!
//! A [`WarpClient`] holds an immutable snapshot of default options and a
//! process invoker, and exposes two resource groups:
//!
//! - [`AgentResource`]: run an agent task and wait, or stream its output.
//! - [`ProfilesResource`]: list profiles and look one up by name.
//!
//! Every call follows the same pipeline: merge call options over the
//! defaults, build the argument vector, invoke. Calls are independent and
//! stateless aside from reading the defaults snapshot; there is no built-in
//! timeout, retry, or global instance — callers construct clients
//! explicitly and wrap invocations if they need more.
//!
//! ```no_run
//! use warp_client::{RunOptions, WarpClient};
//!
//! let client = WarpClient::with_defaults(RunOptions {
//!     api_key: Some("key".to_string()),
//!     ..Default::default()
//! });
//!
//! let result = client.agent().run(RunOptions {
//!     prompt: Some("summarize the open tickets".to_string()),
//!     ..Default::default()
//! });
//! if !result.success() {
//!     eprintln!("agent failed: {}", result.stderr);
//! }
//! ```

use crate::command::WarpCommand;
use crate::error::{Result, WarpError};
use crate::invoker::{AgentStream, ExecutionResult, ProcessInvoker, SystemInvoker};
use crate::options::{ProfileListOptions, RunOptions};
use crate::profile::{Profile, parse_profiles};

/// Name of the external binary, resolved via the caller's PATH.
pub const WARP_BINARY: &str = "warp";

/// Client for the warp CLI.
pub struct WarpClient {
    defaults: RunOptions,
    invoker: Box<dyn ProcessInvoker>,
}

impl WarpClient {
    /// Create a client with no default options.
    pub fn new() -> Self {
        Self::with_defaults(RunOptions::default())
    }

    /// Create a client whose defaults are applied under every call's
    /// options.
    pub fn with_defaults(defaults: RunOptions) -> Self {
        Self::with_invoker(defaults, Box::new(SystemInvoker))
    }

    /// Create a client backed by a custom process invoker.
    pub fn with_invoker(defaults: RunOptions, invoker: Box<dyn ProcessInvoker>) -> Self {
        Self { defaults, invoker }
    }

    /// The default options applied under every call.
    pub fn defaults(&self) -> &RunOptions {
        &self.defaults
    }

    /// Agent execution resource.
    pub fn agent(&self) -> AgentResource<'_> {
        AgentResource { client: self }
    }

    /// Profile lookup resource.
    pub fn profiles(&self) -> ProfilesResource<'_> {
        ProfilesResource { client: self }
    }
}

impl Default for WarpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WarpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarpClient")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// `warp agent run` operations.
#[derive(Debug, Clone, Copy)]
pub struct AgentResource<'a> {
    client: &'a WarpClient,
}

impl AgentResource<'_> {
    /// Run an agent task and wait for completion.
    ///
    /// A non-zero or absent exit code is not an error here; inspect the
    /// returned [`ExecutionResult`] to decide what a failure means.
    pub fn run(&self, options: RunOptions) -> ExecutionResult {
        let merged = options.merged_over(&self.client.defaults);
        // The cwd doubles as the spawn directory, independent of the --cwd
        // token the builder emits.
        let cwd = merged.cwd.clone();
        let args = WarpCommand::AgentRun(merged).to_args();

        self.client
            .invoker
            .invoke_wait(WARP_BINARY, &args, cwd.as_deref())
    }

    /// Start an agent task and return a live handle for streaming
    /// consumption.
    pub fn stream(&self, options: RunOptions) -> Result<AgentStream> {
        let merged = options.merged_over(&self.client.defaults);
        let cwd = merged.cwd.clone();
        let args = WarpCommand::AgentRun(merged).to_args();

        self.client
            .invoker
            .invoke_stream(WARP_BINARY, &args, cwd.as_deref())
    }
}

/// `warp agent profile list` operations.
#[derive(Debug, Clone, Copy)]
pub struct ProfilesResource<'a> {
    client: &'a WarpClient,
}

impl ProfilesResource<'_> {
    /// List the available agent profiles.
    ///
    /// Unlike agent runs, a caller cannot reasonably proceed without
    /// profile data, so a non-zero (or absent) exit code escalates to
    /// [`WarpError::ProfileList`] carrying the captured stderr.
    pub fn list(&self, options: ProfileListOptions) -> Result<Vec<Profile>> {
        let merged = options.merged_over(&self.client.defaults);
        let args = WarpCommand::ProfileList(merged).to_args();

        let result = self.client.invoker.invoke_wait(WARP_BINARY, &args, None);
        if !result.success() {
            return Err(WarpError::ProfileList {
                exit_code: result.exit_code,
                stderr: result.stderr,
            });
        }

        Ok(parse_profiles(&result.stdout))
    }

    /// Find a profile by display name, case-insensitively.
    ///
    /// Returns `Ok(None)` when no profile matches; only the listing itself
    /// can fail.
    pub fn find_by_name(
        &self,
        name: &str,
        options: ProfileListOptions,
    ) -> Result<Option<Profile>> {
        let needle = name.to_lowercase();
        let profiles = self.list(options)?;
        Ok(profiles
            .into_iter()
            .find(|profile| profile.name.to_lowercase() == needle))
    }
}
