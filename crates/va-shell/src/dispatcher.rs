//! Verb to strategy resolution.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use va_core::{CommandIntent, CommandResult};

use crate::config::ShellConfig;
use crate::context::CommandContext;
use crate::strategy::{ShellEnv, Strategy, help};

/// An ordered strategy registry. The first strategy whose aliases contain
/// the verb wins; the catch-all runs when none does.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    strategies: Vec<Strategy>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher over every strategy in default priority order.
    pub fn new() -> Self {
        Self::with_strategies(Strategy::PRIORITY)
    }

    /// A dispatcher over `strategies` in the given order. The catch-all is
    /// always held back and tried last, so it is dropped from the list.
    pub fn with_strategies(strategies: impl IntoIterator<Item = Strategy>) -> Self {
        Self {
            strategies: strategies
                .into_iter()
                .filter(|s| *s != Strategy::Unknown)
                .collect(),
        }
    }

    /// Registered strategies in priority order.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// The strategy that handles `verb`.
    pub fn find(&self, verb: &str) -> Strategy {
        self.strategies
            .iter()
            .copied()
            .find(|s| s.matches(verb))
            .unwrap_or(Strategy::Unknown)
    }

    pub(crate) async fn dispatch(&self, ctx: &CommandContext, env: &ShellEnv<'_>) -> CommandResult {
        let strategy = self.find(&ctx.verb);
        debug!(session = %ctx.session_id, verb = %ctx.verb, ?strategy, "dispatching command");
        strategy.execute(ctx, env).await
    }

    /// Every alias of every registered strategy, deduplicated and sorted.
    pub fn available_commands(&self) -> Vec<String> {
        self.strategies
            .iter()
            .flat_map(|s| s.aliases().iter().map(|a| a.to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Aliases grouped by intent, each list sorted.
    pub fn commands_by_intent(&self) -> BTreeMap<CommandIntent, Vec<String>> {
        let mut grouped: BTreeMap<CommandIntent, BTreeSet<String>> = BTreeMap::new();
        for strategy in &self.strategies {
            grouped
                .entry(strategy.intent())
                .or_default()
                .extend(strategy.aliases().iter().map(|a| a.to_string()));
        }
        grouped
            .into_iter()
            .map(|(intent, aliases)| (intent, aliases.into_iter().collect()))
            .collect()
    }

    /// Help for `verb`, or the general listing.
    pub fn help(&self, verb: Option<&str>, config: &ShellConfig) -> String {
        help::render(&self.strategies, verb, config)
    }
}
