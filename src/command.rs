//! Argument construction for warp sub-commands.
//!
//! [`WarpCommand`] is a tagged request type with one variant per
//! sub-command, so run-only options cannot be supplied to the listing path.
//! [`WarpCommand::to_args`] is the single place that knows the warp CLI's
//! flag names and their fixed order; it is total over its input and
//! deterministic, which downstream tests and any exact argv matching rely
//! on.

use crate::options::{ProfileListOptions, RunOptions};

/// A fully-merged request for one warp sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarpCommand {
    /// `warp agent run` with the merged run options.
    AgentRun(RunOptions),
    /// `warp agent profile list` with the merged listing options.
    ProfileList(ProfileListOptions),
}

impl WarpCommand {
    /// Build the ordered token list passed to the warp binary.
    ///
    /// Tokens are emitted only for fields that are present; an empty list
    /// field emits nothing at all. Flag order is fixed regardless of how
    /// the options record was populated. This never fails.
    pub fn to_args(&self) -> Vec<String> {
        match self {
            WarpCommand::AgentRun(opts) => agent_run_args(opts),
            WarpCommand::ProfileList(opts) => profile_list_args(opts),
        }
    }
}

fn agent_run_args(opts: &RunOptions) -> Vec<String> {
    let mut args = vec!["agent".to_string(), "run".to_string()];

    if let Some(api_key) = &opts.api_key {
        args.push("--api-key".to_string());
        args.push(api_key.clone());
    }

    if opts.debug == Some(true) {
        args.push("--debug".to_string());
    }

    if let Some(prompt) = &opts.prompt {
        args.push("--prompt".to_string());
        args.push(prompt.clone());
    }

    if let Some(saved_prompt) = &opts.saved_prompt {
        args.push("--saved-prompt".to_string());
        args.push(saved_prompt.clone());
    }

    if let Some(format) = opts.output_format {
        args.push("--output-format".to_string());
        args.push(format.as_str().to_string());
    }

    // One flag+value pair per recipient, never a comma-joined value.
    if let Some(share) = &opts.share {
        for recipient in share {
            args.push("--share".to_string());
            args.push(recipient.clone());
        }
    }

    if let Some(profile) = &opts.profile {
        args.push("--profile".to_string());
        args.push(profile.clone());
    }

    if let Some(servers) = &opts.mcp_servers {
        for server in servers {
            args.push("--mcp-server".to_string());
            args.push(server.clone());
        }
    }

    if let Some(environment) = &opts.environment {
        args.push("--environment".to_string());
        args.push(environment.clone());
    }

    // The cwd also becomes the spawn directory; the flag is for the agent's
    // own context and both uses must be honored.
    if let Some(cwd) = &opts.cwd {
        args.push("--cwd".to_string());
        args.push(cwd.to_string_lossy().into_owned());
    }

    args
}

fn profile_list_args(opts: &ProfileListOptions) -> Vec<String> {
    let mut args = vec![
        "agent".to_string(),
        "profile".to_string(),
        "list".to_string(),
    ];

    if let Some(api_key) = &opts.api_key {
        args.push("--api-key".to_string());
        args.push(api_key.clone());
    }

    if opts.debug == Some(true) {
        args.push("--debug".to_string());
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OutputFormat;
    use std::path::PathBuf;

    fn args_for(opts: RunOptions) -> Vec<String> {
        WarpCommand::AgentRun(opts).to_args()
    }

    #[test]
    fn empty_options_emit_only_the_prefix() {
        assert_eq!(args_for(RunOptions::default()), vec!["agent", "run"]);
    }

    #[test]
    fn all_flags_in_fixed_order() {
        let opts = RunOptions {
            api_key: Some("key".to_string()),
            debug: Some(true),
            prompt: Some("do the thing".to_string()),
            saved_prompt: Some("weekly-report".to_string()),
            output_format: Some(OutputFormat::Json),
            cwd: Some(PathBuf::from("/work/repo")),
            share: Some(vec!["team:view".to_string()]),
            profile: Some("ops".to_string()),
            mcp_servers: Some(vec!["server1".to_string()]),
            environment: Some("staging".to_string()),
        };

        assert_eq!(
            args_for(opts),
            vec![
                "agent",
                "run",
                "--api-key",
                "key",
                "--debug",
                "--prompt",
                "do the thing",
                "--saved-prompt",
                "weekly-report",
                "--output-format",
                "json",
                "--share",
                "team:view",
                "--profile",
                "ops",
                "--mcp-server",
                "server1",
                "--environment",
                "staging",
                "--cwd",
                "/work/repo",
            ]
        );
    }

    #[test]
    fn api_key_precedes_prompt() {
        let opts = RunOptions {
            prompt: Some("hello world".to_string()),
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let args = args_for(opts);

        let key_pos = args.iter().position(|a| a == "--api-key").unwrap();
        let prompt_pos = args.iter().position(|a| a == "--prompt").unwrap();
        assert!(key_pos < prompt_pos);
    }

    #[test]
    fn building_twice_is_deterministic() {
        let opts = RunOptions {
            prompt: Some("p".to_string()),
            share: Some(vec!["a".to_string(), "b".to_string()]),
            debug: Some(true),
            ..Default::default()
        };
        let cmd = WarpCommand::AgentRun(opts);
        assert_eq!(cmd.to_args(), cmd.to_args());
    }

    #[test]
    fn debug_is_a_bare_flag() {
        let args = args_for(RunOptions {
            debug: Some(true),
            ..Default::default()
        });
        assert_eq!(args, vec!["agent", "run", "--debug"]);
    }

    #[test]
    fn debug_false_emits_nothing() {
        let args = args_for(RunOptions {
            debug: Some(false),
            ..Default::default()
        });
        assert_eq!(args, vec!["agent", "run"]);
    }

    #[test]
    fn list_fields_repeat_the_flag_per_item() {
        let args = args_for(RunOptions {
            share: Some(vec![
                "team:view".to_string(),
                "user@example.com:edit".to_string(),
            ]),
            mcp_servers: Some(vec!["server1".to_string(), "server2".to_string()]),
            ..Default::default()
        });

        assert_eq!(
            args,
            vec![
                "agent",
                "run",
                "--share",
                "team:view",
                "--share",
                "user@example.com:edit",
                "--mcp-server",
                "server1",
                "--mcp-server",
                "server2",
            ]
        );
    }

    #[test]
    fn empty_lists_emit_no_flags() {
        let args = args_for(RunOptions {
            share: Some(Vec::new()),
            mcp_servers: Some(Vec::new()),
            ..Default::default()
        });
        assert_eq!(args, vec!["agent", "run"]);
    }

    #[test]
    fn cwd_is_emitted_as_a_flag() {
        let args = args_for(RunOptions {
            cwd: Some(PathBuf::from("/tmp/project")),
            ..Default::default()
        });
        assert_eq!(args, vec!["agent", "run", "--cwd", "/tmp/project"]);
    }

    #[test]
    fn profile_list_prefix_only() {
        let args = WarpCommand::ProfileList(ProfileListOptions::default()).to_args();
        assert_eq!(args, vec!["agent", "profile", "list"]);
    }

    #[test]
    fn profile_list_with_common_flags() {
        let args = WarpCommand::ProfileList(ProfileListOptions {
            api_key: Some("key".to_string()),
            debug: Some(true),
        })
        .to_args();
        assert_eq!(
            args,
            vec!["agent", "profile", "list", "--api-key", "key", "--debug"]
        );
    }
}
