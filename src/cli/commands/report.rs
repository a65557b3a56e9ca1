use chrono::Local;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::ScoringService;
use crate::domain::{Category, Rank};

const HISTORY_USAGE: &str = "history [--oldest-first]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "status",
            "Show balance, points and rank",
            "status",
            cmd_status,
        ),
        CommandEntry::new(
            "history",
            "List recorded transactions, newest first",
            HISTORY_USAGE,
            cmd_history,
        ),
        CommandEntry::new(
            "breakdown",
            "Totals and points per category",
            "breakdown",
            cmd_breakdown,
        ),
        CommandEntry::new(
            "categories",
            "List categories and the points each one awards",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new("ranks", "Show the rank ladder", "ranks", cmd_ranks),
    ]
}

pub(crate) fn print_status(context: &ShellContext) {
    let status = context.session.status();
    let progress = match (status.next_rank, status.points_to_next) {
        (Some(next), Some(missing)) => format!("{} ({missing} pts to {next})", status.rank),
        _ => format!("{} (top rank)", status.rank),
    };
    output::section("Status");
    output::two_column(&[
        ("Balance", context.format_amount(status.balance)),
        ("Points", status.points.to_string()),
        ("Rank", progress),
        ("Entries", status.entries.to_string()),
    ]);
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_status(context);
    Ok(())
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let oldest_first = match args {
        [] => false,
        [flag] if flag.eq_ignore_ascii_case("--oldest-first") => true,
        _ => return Err(CommandError::usage(HISTORY_USAGE)),
    };

    output::section("History");
    if context.session.ledger().is_empty() {
        output::detail("No transactions yet.");
        return Ok(());
    }
    output::table(
        &["Id", "Description", "Category", "Amount", "Recorded"],
        &history_rows(context, oldest_first),
    );
    Ok(())
}

fn history_rows(context: &ShellContext, oldest_first: bool) -> Vec<Vec<String>> {
    let ledger = context.session.ledger();
    let entries: Vec<_> = if oldest_first {
        ledger.all().iter().collect()
    } else {
        ledger.iter_newest_first().collect()
    };
    entries
        .into_iter()
        .map(|txn| {
            vec![
                txn.short_id(),
                txn.description().to_string(),
                txn.category().to_string(),
                context.format_amount(txn.amount()),
                txn.recorded_at()
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ]
        })
        .collect()
}

fn cmd_breakdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let rows: Vec<Vec<String>> = ScoringService::breakdown(context.session.history())
        .into_iter()
        .map(|row| {
            vec![
                row.category.to_string(),
                row.entries.to_string(),
                context.format_amount(row.category.signed_amount(row.amount)),
                format!("{:+}", row.points),
            ]
        })
        .collect();
    output::section("Breakdown");
    output::table(&["Category", "Entries", "Balance effect", "Points"], &rows);
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let rows: Vec<Vec<String>> = Category::ALL
        .into_iter()
        .map(|category| {
            vec![
                category.label().to_string(),
                category.points_label(),
                if category.is_credit() { "credit" } else { "debit" }.to_string(),
                category.aliases().join(", "),
            ]
        })
        .collect();
    output::section("Categories");
    output::table(&["Category", "Points", "Balance", "Aliases"], &rows);
    Ok(())
}

fn cmd_ranks(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let current = context.session.current_rank();
    let rows: Vec<Vec<String>> = Rank::LADDER
        .into_iter()
        .map(|rank| {
            let marker = if rank == current { "<- you" } else { "" };
            vec![
                rank.label().to_string(),
                format!("{}+", rank.threshold()),
                marker.to_string(),
            ]
        })
        .collect();
    output::section("Ranks");
    output::table(&["Rank", "Points", ""], &rows);
    Ok(())
}
