//! Interactive entry form.
//!
//! A form whose submission is rejected keeps its inputs: the next `form`
//! opens pre-filled with them. An accepted submission clears the draft.

use dialoguer::{Input, Select};

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::domain::Category;

/// Field values carried between form attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub description: String,
    pub amount: String,
    pub category: Category,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: Category::Salary,
        }
    }
}

impl FormDraft {
    fn category_index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|category| *category == self.category)
            .unwrap_or(0)
    }
}

/// Category choices as the picker shows them: label and weight side by side.
pub fn category_choices() -> Vec<String> {
    let width = Category::ALL
        .iter()
        .map(|category| category.label().len())
        .max()
        .unwrap_or(0);
    Category::ALL
        .iter()
        .map(|category| format!("{:<width$}  {}", category.label(), category.points_label()))
        .collect()
}

/// Outcome of applying a filled-in draft to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Accepted,
    Kept(FormDraft),
}

/// Submits `draft`; the draft survives only when the session turns it down.
pub fn submit_draft(context: &mut ShellContext, draft: FormDraft) -> FormOutcome {
    if context
        .session
        .submit(&draft.description, &draft.amount, draft.category)
    {
        FormOutcome::Accepted
    } else {
        FormOutcome::Kept(draft)
    }
}

fn prompt_draft(context: &ShellContext, initial: &FormDraft) -> Result<FormDraft, CommandError> {
    let description = Input::<String>::with_theme(&context.theme)
        .with_prompt("Description")
        .with_initial_text(initial.description.clone())
        .allow_empty(true)
        .interact_text()?;
    let amount = Input::<String>::with_theme(&context.theme)
        .with_prompt("Amount")
        .with_initial_text(initial.amount.clone())
        .allow_empty(true)
        .interact_text()?;
    let choice = Select::with_theme(&context.theme)
        .with_prompt("Category")
        .items(&category_choices())
        .default(initial.category_index())
        .interact()?;
    Ok(FormDraft {
        description,
        amount,
        category: Category::ALL[choice],
    })
}

pub fn run_form(context: &mut ShellContext) -> CommandResult {
    if context.mode != CliMode::Interactive {
        return Err(CommandError::InteractiveOnly("form"));
    }
    let initial = context.form_draft.take().unwrap_or_default();
    let draft = prompt_draft(context, &initial)?;
    match submit_draft(context, draft) {
        FormOutcome::Accepted => {
            crate::cli::commands::entry::print_recorded(context);
        }
        FormOutcome::Kept(draft) => context.form_draft = Some(draft),
    }
    Ok(())
}
