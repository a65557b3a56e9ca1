use crate::cli::core::{CommandError, CommandResult};
use crate::cli::forms::run_form;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::domain::Category;

use super::report::print_status;

const ADD_USAGE: &str = "add <category> <amount> <description...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record a transaction (salary, extra, planned, unplanned, investment)",
            ADD_USAGE,
            cmd_add,
        ),
        CommandEntry::new(
            "form",
            "Fill in a transaction interactively",
            "form",
            cmd_form,
        ),
    ]
}

/// Invalid amounts or blank descriptions are dropped without a message.
fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw_category) = args.first() else {
        return Err(CommandError::usage(ADD_USAGE));
    };
    let category: Category = raw_category.parse()?;
    let raw_amount = args.get(1).copied().unwrap_or("");
    let description = args.get(2..).map(|words| words.join(" ")).unwrap_or_default();

    if context.session.submit(&description, raw_amount, category) {
        print_recorded(context);
    }
    Ok(())
}

fn cmd_form(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    run_form(context)
}

/// Confirms the newest entry and shows the refreshed status.
pub(crate) fn print_recorded(context: &ShellContext) {
    if let Some(latest) = context.session.history().last() {
        output::success(format!(
            "Recorded {}: {} ({}, {} pts)",
            latest.category(),
            latest.description(),
            context.format_amount(latest.amount()),
            latest.points()
        ));
    }
    print_status(context);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::shell_context::CliMode;
    use crate::config::ConfigManager;
    use tempfile::tempdir;

    fn context() -> (tempfile::TempDir, ShellContext) {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let context = ShellContext::with_config_manager(CliMode::Script, manager).unwrap();
        (dir, context)
    }

    #[test]
    fn add_joins_the_remaining_words_into_the_description() {
        let (_dir, mut context) = context();
        cmd_add(&mut context, &["investment", "250", "index", "fund"]).unwrap();
        let latest = &context.session.history()[0];
        assert_eq!(latest.description(), "index fund");
        assert_eq!(latest.category(), Category::Investment);
    }

    #[test]
    fn invalid_entries_are_silently_dropped() {
        let (_dir, mut context) = context();
        cmd_add(&mut context, &["salary", "50", ""]).unwrap();
        cmd_add(&mut context, &["salary", "50"]).unwrap();
        cmd_add(&mut context, &["planned", "0", "Coffee"]).unwrap();
        cmd_add(&mut context, &["planned", "abc", "Coffee"]).unwrap();
        cmd_add(&mut context, &["planned"]).unwrap();
        assert!(context.session.history().is_empty());
    }

    #[test]
    fn unknown_category_is_a_usage_error() {
        let (_dir, mut context) = context();
        let err = cmd_add(&mut context, &["lottery", "10", "ticket"]).unwrap_err();
        assert!(matches!(err, CommandError::UnknownCategory(_)));
        assert!(matches!(
            cmd_add(&mut context, &[]),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
