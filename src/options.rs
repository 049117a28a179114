//! Option records for warp invocations and the layered merge.
//!
//! A [`WarpClient`](crate::client::WarpClient) holds a `RunOptions` value as
//! its defaults; each call supplies its own options, and `merged_over` layers
//! the call-level record over the defaults field by field. Every field is
//! optional: absence means "omit from the command line", never "use an empty
//! value".

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format accepted by `warp agent run --output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON events.
    Json,
    /// Plain text output.
    Text,
}

impl OutputFormat {
    /// The token passed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for `warp agent run`.
///
/// Field names mirror the warp CLI flags. List-valued fields are wrapped in
/// `Option` so the merge can distinguish "not supplied" (inherit the
/// default) from "supplied empty" (replace the default with nothing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunOptions {
    /// API key passed as `--api-key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Emit `--debug` when `Some(true)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Prompt text passed as `--prompt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Saved-prompt reference passed as `--saved-prompt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_prompt: Option<String>,

    /// Output format passed as `--output-format`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Working directory. Used twice when present: emitted as the `--cwd`
    /// token and supplied to the process invoker as the spawn directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Share recipients, one `--share` flag per entry, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<Vec<String>>,

    /// Profile name passed as `--profile`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// MCP server identifiers, one `--mcp-server` flag per entry, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<Vec<String>>,

    /// Environment name passed as `--environment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

impl RunOptions {
    /// Layer these options over `base`, field by field.
    ///
    /// For every field, the value from `self` wins when present, otherwise
    /// the value from `base` is used. The merge is shallow and last-write
    /// wins: a list supplied here fully replaces the base list, even when
    /// empty. No validation happens; values pass through unchanged.
    pub fn merged_over(&self, base: &RunOptions) -> RunOptions {
        RunOptions {
            api_key: self.api_key.clone().or_else(|| base.api_key.clone()),
            debug: self.debug.or(base.debug),
            prompt: self.prompt.clone().or_else(|| base.prompt.clone()),
            saved_prompt: self
                .saved_prompt
                .clone()
                .or_else(|| base.saved_prompt.clone()),
            output_format: self.output_format.or(base.output_format),
            cwd: self.cwd.clone().or_else(|| base.cwd.clone()),
            share: self.share.clone().or_else(|| base.share.clone()),
            profile: self.profile.clone().or_else(|| base.profile.clone()),
            mcp_servers: self
                .mcp_servers
                .clone()
                .or_else(|| base.mcp_servers.clone()),
            environment: self
                .environment
                .clone()
                .or_else(|| base.environment.clone()),
        }
    }
}

/// Options for `warp agent profile list`.
///
/// The listing sub-command accepts only the common flags, so it gets its own
/// record: run-only fields cannot reach the listing path by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileListOptions {
    /// API key passed as `--api-key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Emit `--debug` when `Some(true)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

impl ProfileListOptions {
    /// Layer these options over the shared fields of the client defaults.
    pub fn merged_over(&self, base: &RunOptions) -> ProfileListOptions {
        ProfileListOptions {
            api_key: self.api_key.clone().or_else(|| base.api_key.clone()),
            debug: self.debug.or(base.debug),
        }
    }
}
