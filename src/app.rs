use std::io::{stderr, Stderr};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::game::{GameConfig, GameController};
use crate::input::{InputAction, InputHandler};
use crate::score::ScoreStore;
use crate::ticker::Ticker;
use crate::tui::view;

/// Wires the controller, input mapping, tick timer, and terminal together
pub struct App {
    controller: GameController,
    input: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Self {
        Self {
            controller: GameController::new(config, store),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = Ticker::new(self.controller.config().tick_interval());

        loop {
            // One frame per pass: the initial Idle board, then after every
            // event or tick
            terminal
                .draw(|frame| view::draw(frame, &self.controller))
                .context("failed to draw frame")?;

            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = ticker.tick() => {
                    self.controller.on_tick();
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            // The controller decides the cadence; the timer mirrors it
            ticker.sync(self.controller.is_ticking());
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.handle_key_event(key) {
                InputAction::Direction(direction) => self.controller.on_direction(direction),
                InputAction::Start => self.controller.start(),
                InputAction::TogglePause => self.controller.toggle_pause(),
                InputAction::Reset => self.controller.reset(),
                InputAction::Restart => self.controller.restart(),
                InputAction::Quit => self.should_quit = true,
                InputAction::None => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}
