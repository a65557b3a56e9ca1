use dialoguer::theme::ColorfulTheme;
use tracing::{info, trace};

use crate::cli::commands;
use crate::cli::core::{CliError, CommandError, LoopControl};
use crate::cli::forms::FormDraft;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::config::{Config, ConfigManager};
use crate::core::FinanceSession;
use crate::currency::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can reach: the session plus shell state.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: FinanceSession,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Inputs of the last form that was not accepted.
    pub form_draft: Option<FormDraft>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        crate::init(&config.log_level);
        output::apply_config(&config);
        if mode == CliMode::Script {
            colored::control::set_override(false);
        }

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        info!(?mode, "session started");
        Ok(Self {
            mode,
            registry,
            session: FinanceSession::new(),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            form_draft: None,
            running: true,
        })
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            return Err(CommandError::UnknownCommand {
                name: command.to_string(),
                suggestion: self.registry.suggest(command),
            });
        };
        trace!(command, ?args, "dispatching");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("solo [{}]> ", self.session.current_rank())
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format_amount(amount, &self.config.currency_symbol)
    }

    pub fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        output::apply_config(&self.config);
        Ok(())
    }

    pub fn report_error(&self, err: CommandError) {
        output::error(err);
    }

    pub fn print_warning(&self, message: &str) {
        output::warning(message);
    }
}
