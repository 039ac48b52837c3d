use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, trace};

use crate::game::{GameEngine, Session, TickEvent};
use crate::input::{InputController, InputHandler, KeyAction};
use crate::render::Renderer;

/// Interactive play: owns the one canonical `Session` and is its only writer
pub struct HumanMode {
    engine: GameEngine,
    session: Session,
    renderer: Renderer,
    input_handler: InputHandler,
    controller: InputController,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(engine: GameEngine) -> Self {
        let session = engine.initial_session();
        let renderer = Renderer::new(engine.config().grid_size);
        let controller = InputController::new(session.direction);

        Self {
            engine,
            session,
            renderer,
            input_handler: InputHandler::new(),
            controller,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(high_score = self.session.high_score, "session started");

        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed
        self.cleanup_terminal(&mut terminal)?;

        info!(high_score = self.session.high_score, "quit");
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let period = Duration::from_millis(self.engine.config().tick_interval_ms);
        let mut tick_timer = interval_at(Instant::now() + period, period);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            self.handle_event(event);
                            self.draw(terminal)?;
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.tick();
                    self.draw(terminal)?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, &self.session))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply(action);
        }
    }

    /// React to one logical input signal
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                if !self.controller.on_direction_key(direction) {
                    trace!(?direction, "turn rejected");
                }
            }
            KeyAction::TogglePause => {
                self.session = self.engine.toggle_pause(&self.session);
                info!(paused = self.session.is_paused, "pause toggled");
            }
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Advance the session by one timer tick
    pub fn tick(&mut self) -> TickEvent {
        let result = self
            .engine
            .advance(&self.session, self.controller.committed());
        self.session = result.session;

        match result.event {
            TickEvent::Idle => {}
            TickEvent::Moved => self.controller.on_tick(self.session.direction),
            TickEvent::AteFood => {
                self.controller.on_tick(self.session.direction);
                debug!(score = self.session.score, food = %self.session.food, "food eaten");
            }
            TickEvent::Collided(cause) => {
                info!(
                    %cause,
                    score = self.session.score,
                    high_score = self.session.high_score,
                    "game over"
                );
            }
        }

        result.event
    }

    pub fn reset_game(&mut self) {
        self.session = self.engine.reset(&self.session);
        self.controller = InputController::new(self.session.direction);
        info!(high_score = self.session.high_score, "session reset");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
