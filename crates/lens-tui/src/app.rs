//! Main application state and render loop.

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use lens_client::AnalysisClient;
use lens_core::{Applied, LensConfig, LensError, Session, Ticket, Trigger};

use crate::action::{Action, Focus, InputMode};
use crate::components::help::HelpComponent;
use crate::components::status_bar::StatusBarComponent;
use crate::components::Component;
use crate::event::{self, EventHandler, InputModeFlag};
use crate::page::TerminalPage;
use crate::theme::Theme;

/// Main application state.
pub struct App {
    /// Whether the app should exit.
    should_quit: bool,
    /// Shared flag to tell the EventHandler which key-mapping to use.
    input_mode_flag: InputModeFlag,
    focus: Focus,

    // ── Analysis ─────────────────────────────────────────────
    session: Session,
    /// HTTP client shared with spawned cycle tasks.
    client: Arc<AnalysisClient>,
    /// Delay before the automatic first cycle; `None` disables it.
    auto_analyze: Option<Duration>,
    /// Cycles submitted but not yet returned.
    in_flight: usize,

    // Components
    page: TerminalPage,
    status_bar: StatusBarComponent,
    help: HelpComponent,
}

impl App {
    pub fn new(config: &LensConfig, client: AnalysisClient) -> Self {
        let caps = config.capabilities();
        let default_language = config.analysis.default_target_language.clone();

        let mut page = TerminalPage::new(&caps, &default_language);
        page.input.set_text(&config.analysis.example_sentences.join("\n"));

        let auto_analyze = match config.analysis.auto_analyze_delay_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };

        Self {
            should_quit: false,
            input_mode_flag: event::new_input_mode_flag(),
            focus: Focus::Input,
            session: Session::new(caps, default_language),
            client: Arc::new(client),
            auto_analyze,
            in_flight: 0,
            page,
            status_bar: StatusBarComponent::new(),
            help: HelpComponent::new(),
        }
    }

    /// Replace the example sentences with the given ones.
    pub fn set_initial_sentences(&mut self, sentences: &[String]) {
        self.page.input.set_text(&sentences.join("\n"));
    }

    /// Run the TUI application.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Set up terminal.
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create the action channel.
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

        // Start the event handler with the shared input mode flag.
        let event_tx = tx.clone();
        let mode_flag = self.input_mode_flag.clone();
        let event_handler = EventHandler::new(event_tx, Duration::from_millis(100), mode_flag);
        tokio::spawn(async move {
            event_handler.run().await;
        });

        self.spawn_startup_cycle(tx.clone());
        self.sync_focus();

        // Main loop.
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if let Some(action) = rx.recv().await {
                self.handle_action(action, &tx);

                if self.should_quit {
                    break;
                }
            }
        }

        if self.in_flight > 0 {
            debug!(in_flight = self.in_flight, "Exiting with analysis requests in flight");
        }

        // Restore terminal.
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Schedule the one automatic cycle that fills in the example. It goes
    /// through the same path as a manual trigger.
    fn spawn_startup_cycle(&self, tx: mpsc::UnboundedSender<Action>) {
        let Some(delay) = self.auto_analyze else {
            return;
        };
        info!(delay_ms = delay.as_millis() as u64, "Scheduling startup analysis");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::Analyze(Trigger::Startup));
        });
    }

    /// What input mode should be active right now?
    fn current_input_mode(&self) -> InputMode {
        // Overlays take keys in normal mode so any key can close them.
        if self.help.visible || self.page.notice.visible() {
            return InputMode::Normal;
        }
        match self.focus {
            Focus::Input => InputMode::Editing,
            Focus::Results => InputMode::Normal,
        }
    }

    /// Push the focus to the components and the event handler.
    fn sync_focus(&mut self) {
        self.page.input.focused = self.focus == Focus::Input;
        self.page.results.focused = self.focus == Focus::Results;
        self.status_bar.focus = self.focus;
        event::set_input_mode(&self.input_mode_flag, self.current_input_mode());
    }

    /// Dispatch an action to all relevant components.
    fn handle_action(&mut self, action: Action, tx: &mpsc::UnboundedSender<Action>) {
        // An open overlay swallows the key that closes it.
        if action.is_user_input() && (self.help.visible || self.page.notice.visible()) {
            if matches!(action, Action::Quit) {
                self.should_quit = true;
                return;
            }
            self.help.handle_action(&action);
            self.page.notice.handle_action(&action);
            self.sync_focus();
            return;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
            }
            Action::Analyze(trigger) => {
                self.start_cycle(trigger, tx);
            }
            Action::AnalysisFinished { ticket, outcome } => {
                self.finish_cycle(ticket, outcome, tx);
            }
            Action::Clear => {
                self.session.clear(&mut self.page);
                let _ = tx.send(Action::SetStatus("Cleared".to_string()));
            }
            other => self.forward(&other, tx),
        }

        self.sync_focus();
    }

    /// Forward a component-level action to whoever handles it.
    fn forward(&mut self, action: &Action, tx: &mpsc::UnboundedSender<Action>) {
        let mut chained = Vec::new();

        chained.extend(self.help.handle_action(action));
        chained.extend(self.status_bar.handle_action(action));
        chained.extend(self.page.input.handle_action(action));
        chained.extend(self.page.results.handle_action(action));
        if let Some(ref mut language) = self.page.language {
            chained.extend(language.handle_action(action));
        }

        for next in chained {
            let _ = tx.send(next);
        }
    }

    /// Collect, show loading, and spawn the request.
    fn start_cycle(&mut self, trigger: Trigger, tx: &mpsc::UnboundedSender<Action>) {
        match self.session.begin(&mut self.page, trigger) {
            Ok(Some(ticket)) => {
                let _ = tx.send(Action::SetStatus(format!(
                    "Analyzing {} sentence{} ({})...",
                    ticket.request.sentences.len(),
                    if ticket.request.sentences.len() == 1 { "" } else { "s" },
                    ticket.request.target_language
                )));
                self.spawn_submit(ticket, tx.clone());
            }
            Ok(None) => {}
            Err(LensError::EmptyInput) => {
                let _ = tx.send(Action::SetStatus("Nothing to analyze".to_string()));
            }
            Err(e) => {
                warn!("Could not start analysis: {}", e);
                let _ = tx.send(Action::SetStatus(format!("Could not start analysis: {}", e)));
            }
        }
    }

    /// Spawn a task to submit the ticket's request to the analysis service.
    fn spawn_submit(&mut self, ticket: Ticket, tx: mpsc::UnboundedSender<Action>) {
        self.in_flight += 1;
        let client = self.client.clone();
        tokio::spawn(async move {
            let outcome = client.submit(&ticket.request).await;
            let _ = tx.send(Action::AnalysisFinished { ticket, outcome });
        });
    }

    fn finish_cycle(
        &mut self,
        ticket: Ticket,
        outcome: Result<lens_core::AnalysisResponse, LensError>,
        tx: &mpsc::UnboundedSender<Action>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let failure = outcome.as_ref().err().map(|e| e.to_string());

        let status = match self.session.finish(&mut self.page, &ticket, outcome) {
            Applied::Rendered => format!(
                "Analyzed {} word{}",
                self.page.results.view().card_count(),
                if self.page.results.view().card_count() == 1 { "" } else { "s" }
            ),
            Applied::Failed => format!("Analysis failed: {}", failure.unwrap_or_default()),
            Applied::Superseded => return,
        };
        let _ = tx.send(Action::SetStatus(status));
    }

    /// Render the full UI.
    fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let selector_height = if self.page.language.is_some() { 1 } else { 0 };

        let chunks = Layout::vertical([
            Constraint::Length(1),               // Title
            Constraint::Length(7),               // Sentence input
            Constraint::Length(selector_height), // Target language
            Constraint::Min(6),                  // Results
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

        self.render_title(frame, chunks[0]);
        self.page.input.render(frame, chunks[1]);
        if let Some(ref language) = self.page.language {
            language.render(frame, chunks[2]);
        }
        self.page.results.render(frame, chunks[3]);
        self.status_bar.render(frame, chunks[4]);

        // Overlays (rendered on top)
        self.page.notice.render(frame, area);
        self.help.render(frame, area);
    }

    fn render_title(&self, frame: &mut ratatui::Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" sentence-lens ", Theme::title()),
            Span::styled(self.client.base_url(), Theme::dim()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
