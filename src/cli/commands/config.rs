use tracing::info;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::config::{Config, CONFIG_KEYS};

const CONFIG_USAGE: &str = "config [show|set <key> <value>|reset]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences (currency, color, log-level, banner)",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let action = args.first().map(|value| value.to_ascii_lowercase());
    match action.as_deref() {
        None | Some("show") => {
            show_config(context);
            Ok(())
        }
        Some("set") => {
            let (Some(key), Some(_)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    CONFIG_KEYS.join("|")
                )));
            };
            let value = args[2..].join(" ");
            context.config.set(key, &value)?;
            context.persist_config()?;
            info!(key = *key, value = %value, "config updated");
            output::success(format!("Set {key} = {}", value.trim()));
            Ok(())
        }
        Some("reset") => {
            context.config = Config::default();
            context.persist_config()?;
            output::success("Preferences restored to defaults.");
            Ok(())
        }
        Some(_) => Err(CommandError::usage(CONFIG_USAGE)),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Preferences");
    output::two_column(&context.config.entries());
    output::detail(format!("Stored at {}", context.config_manager.path().display()));
}
