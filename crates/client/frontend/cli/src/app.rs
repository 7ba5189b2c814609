//! Glue code tying the action menu, the selection channel, and the terminal together.
use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{self as term_event, Event as TermEvent};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use client_frontend_core::{ActionDescriptor, FrontendConfig, frontend::Frontend};

use crate::{
    catalog::Catalog,
    config::CliConfig,
    input::{InputCommand, InputHandler},
    presentation::terminal::{self, Tui},
    session::MenuSession,
};

/// Input polling cadence (~60 fps).
const FRAME_INTERVAL_MS: u64 = 16;

pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    catalog: Catalog,
    input: InputHandler,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig, catalog: Catalog) -> Self {
        Self {
            frontend_config,
            cli_config,
            catalog,
            input: InputHandler::new(),
        }
    }

    async fn event_loop(
        &self,
        session: &mut MenuSession,
        selections: &mut mpsc::Receiver<ActionDescriptor>,
        terminal: &mut Tui,
    ) -> Result<()> {
        session.draw(terminal, &self.cli_config.ui)?;

        loop {
            tokio::select! {
                Some(action) = selections.recv() => {
                    session.on_selection(action);
                    session.draw(terminal, &self.cli_config.ui)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(session, terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Drain pending terminal input. Returns `true` when the user quits.
    fn handle_input_tick(&self, session: &mut MenuSession, terminal: &mut Tui) -> Result<bool> {
        let mut events = Vec::new();
        while term_event::poll(Duration::from_millis(0))? {
            events.push(term_event::read()?);
        }

        match self.apply_events(session, &events) {
            TickOutcome::Quit => Ok(true),
            TickOutcome::Redraw => {
                session.draw(terminal, &self.cli_config.ui)?;
                Ok(false)
            }
            TickOutcome::Idle => Ok(false),
        }
    }

    /// Applies a batch of events in order, stopping at a quit.
    fn apply_events(&self, session: &mut MenuSession, events: &[TermEvent]) -> TickOutcome {
        let mut outcome = TickOutcome::Idle;

        for event in events {
            let command = self.input.handle_event(event, session.menu.is_visible());
            if session.handle_command(command) {
                return TickOutcome::Quit;
            }
            if command != InputCommand::None || matches!(event, TermEvent::Resize(_, _)) {
                outcome = TickOutcome::Redraw;
            }
        }

        outcome
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TickOutcome {
    Idle,
    Redraw,
    Quit,
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let (tx, mut rx) =
            mpsc::channel::<ActionDescriptor>(self.frontend_config.channels.selection_buffer);
        let mut session = MenuSession::new(
            &self.frontend_config.action_menu,
            self.catalog.clone(),
            tx,
        )?;

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = self.event_loop(&mut session, &mut rx, &mut terminal).await;

        terminal::restore()?;
        tracing::info!("CLI client exiting");

        result
    }
}
