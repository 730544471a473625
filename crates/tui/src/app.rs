//! TUI application state and event loop.
//!
//! This module defines the main `App` struct that owns the wizard controller
//! and runs the event loop using `tokio::select!`.

use anyhow::Result;
use aw_core::wizard::WizardController;
use aw_protocol::field_models::Field;
use aw_protocol::ipc::Event;
use aw_protocol::step_models::StepKind;
use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Instant;
use tokio::select;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::StreamExt;

use crate::event_handler;
use crate::tui::{Tui, TuiEvent};
use crate::widgets::{
    next_toast_expiry, prune_toasts, render_review, render_step_form, render_step_indicator,
    render_template_chooser, render_toasts, Toast,
};

/// Presentation state that lives outside the controller.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Index of the focused item among the step's visible items.
    pub focus: usize,
    /// Highlighted row in the template chooser.
    pub chooser_index: usize,
    pub toasts: Vec<Toast>,
    /// Fields named by the last refused advance, minus those edited since.
    pub refusal: Option<Vec<Field>>,
}

/// Main TUI application state.
pub struct App {
    pub wizard: WizardController,
    pub view: ViewState,
    /// Channel to receive events from the controller.
    pub event_rx: UnboundedReceiver<Event>,
    pub should_exit: bool,
}

impl App {
    pub fn new(wizard: WizardController, event_rx: UnboundedReceiver<Event>) -> Self {
        Self {
            wizard,
            view: ViewState::default(),
            event_rx,
            should_exit: false,
        }
    }

    /// Main event loop.
    ///
    /// Uses `tokio::select!` to handle keyboard input and controller events concurrently.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut tui_events = tui.event_stream();
        let frames = tui.frame_requester();

        frames.schedule_frame();
        tracing::info!(session_id = %self.wizard.state().session_id, "wizard started");

        while !self.should_exit {
            select! {
                Some(event) = self.event_rx.recv() => {
                    self.handle_core_event(event);
                    frames.schedule_frame();
                }
                Some(tui_event) = tui_events.next() => {
                    self.handle_tui_event(tui, tui_event)?;
                }
            }
        }

        tracing::info!("wizard closed");
        Ok(())
    }

    fn handle_core_event(&mut self, event: Event) {
        tracing::trace!(?event, "core event");
        event_handler::handle_core_event(&mut self.view, event);
    }

    /// Apply events already queued by the controller.
    pub fn process_pending_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_core_event(event);
        }
    }

    fn handle_tui_event(&mut self, tui: &mut Tui, event: TuiEvent) -> Result<()> {
        match event {
            TuiEvent::Key(key_event) => {
                self.handle_key_event(key_event);
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::Paste(text) => {
                self.handle_paste(&text);
                tui.frame_requester().schedule_frame();
            }
            TuiEvent::Draw => {
                let now = Instant::now();
                prune_toasts(&mut self.view.toasts, now);
                tui.draw(|frame| self.render(frame))?;
                if let Some(wait) = next_toast_expiry(&self.view.toasts, now) {
                    tui.frame_requester().schedule_frame_in(wait);
                }
            }
        }
        Ok(())
    }

    /// Map a key to controller operations and apply them.
    ///
    /// The events those operations emit are applied before returning, so the
    /// next key sees the view state they produce.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let outcome = event_handler::handle_keyboard_event(key_event, &mut self.view, &self.wizard);
        if outcome.quit {
            self.should_exit = true;
            return;
        }
        for op in outcome.ops {
            self.wizard.handle(op);
        }
        self.process_pending_events();
        self.clamp_focus();
    }

    /// Append pasted text to the focused text field.
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(op) = event_handler::handle_paste(text, &self.view, &self.wizard) {
            self.wizard.handle(op);
        }
        self.process_pending_events();
    }

    fn clamp_focus(&mut self) {
        let count = event_handler::visible_items(&self.wizard).len();
        if self.view.focus >= count {
            self.view.focus = count.saturating_sub(1);
        }
    }

    /// Render the whole screen.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Step indicator
                Constraint::Min(5),    // Step body
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        render_step_indicator(
            frame,
            chunks[0],
            self.wizard.sequence(),
            self.wizard.current_step(),
        );
        self.render_body(frame, chunks[1]);
        self.render_hints(frame, chunks[2]);
        render_toasts(frame, area, &self.view.toasts);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        if self.wizard.state().is_choosing_template() {
            render_template_chooser(
                frame,
                area,
                self.wizard.catalog().templates(),
                self.view.chooser_index,
            );
            return;
        }

        let descriptor = self.wizard.current_descriptor();
        if descriptor.kind == StepKind::Review {
            render_review(
                frame,
                area,
                descriptor.title,
                &self.wizard.summary(),
                self.wizard.state().preview_mode,
            );
        } else {
            render_step_form(
                frame,
                area,
                &self.wizard,
                self.view.focus,
                self.view.refusal.as_deref(),
            );
        }
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let next = if self.wizard.can_advance() { "Enter next" } else { "Enter next (incomplete)" };
        let hints = format!(
            "{next}  Esc back  Tab move  Left/Right change  Ctrl+T templates  Ctrl+Q quit"
        );
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_core::catalog::TemplateCatalog;
    use aw_core::wizard::WizardOptions;
    use aw_protocol::step_models::WizardVariant;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc::unbounded_channel;

    fn app(variant: WizardVariant) -> App {
        let (events_tx, events_rx) = unbounded_channel();
        let options = WizardOptions {
            variant,
            ..Default::default()
        };
        let wizard = WizardController::new(options, TemplateCatalog::builtin().unwrap(), events_tx);
        let mut app = App::new(wizard, events_rx);
        app.process_pending_events();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[tokio::test]
    async fn test_app_renders_first_step() {
        let app = app(WizardVariant::Classic);

        let content = screen(&app);

        assert!(content.contains("Business Info"));
        assert!(content.contains("Step 1 of 5"));
        assert!(content.contains("Business Name *"));
    }

    #[tokio::test]
    async fn test_app_quit_on_ctrl_q() {
        let mut app = app(WizardVariant::Classic);
        assert!(!app.should_exit);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));

        assert!(app.should_exit);
    }

    #[tokio::test]
    async fn test_refused_advance_lists_missing_fields() {
        let mut app = app(WizardVariant::Classic);

        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        app.process_pending_events();

        assert_eq!(app.wizard.current_step(), 1);
        assert!(screen(&app).contains("Please fill in: Business Name"));
    }

    #[tokio::test]
    async fn test_keys_fill_business_step_and_advance() {
        let mut app = app(WizardVariant::Classic);

        type_text(&mut app, "Acme Co");
        app.handle_key_event(KeyEvent::from(KeyCode::Tab));
        app.handle_key_event(KeyEvent::from(KeyCode::Tab));
        type_text(&mut app, "We sell widgets");
        app.handle_key_event(KeyEvent::from(KeyCode::Tab));
        app.handle_key_event(KeyEvent::from(KeyCode::Right));
        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        app.process_pending_events();

        let profile = app.wizard.profile();
        assert_eq!(profile.business.name, "Acme Co");
        assert_eq!(profile.business.description, "We sell widgets");
        assert_eq!(profile.business.industry.as_deref(), Some("1"));
        assert_eq!(app.wizard.current_step(), 2);
        assert_eq!(app.view.focus, 0);
        assert!(screen(&app).contains("Virtual Receptionist"));
    }

    #[tokio::test]
    async fn test_publish_shows_toast() {
        let mut app = app(WizardVariant::Enhanced);
        app.wizard.set_field(aw_protocol::FieldUpdate::BusinessName("Acme".to_string()));
        app.wizard
            .set_field(aw_protocol::FieldUpdate::BusinessDescription("Widgets".to_string()));
        while !app.wizard.is_terminal() {
            app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        }
        app.process_pending_events();

        app.handle_key_event(KeyEvent::from(KeyCode::Char('u')));
        app.process_pending_events();

        assert_eq!(app.view.toasts.len(), 1);
        let content = screen(&app);
        assert!(content.contains("Publishing Agent"));
        assert!(content.contains("Review & Launch"));
    }

    #[tokio::test]
    async fn test_template_chooser_flow() {
        let mut app = app(WizardVariant::Compact);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        app.process_pending_events();
        assert!(screen(&app).contains("Choose a Template"));

        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        app.process_pending_events();

        assert!(!app.wizard.state().is_choosing_template());
        assert_eq!(app.wizard.current_step(), 2);
        assert_eq!(app.wizard.profile().business.name, "Customer Support");
    }

    #[tokio::test]
    async fn test_chooser_cursor_survives_keys_typed_ahead() {
        let mut app = app(WizardVariant::Compact);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::from(KeyCode::Down));
        assert_eq!(app.view.chooser_index, 1);

        app.handle_key_event(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.wizard.profile().business.name, "Sales Assistant");
        assert_eq!(
            app.wizard
                .state()
                .selected_template
                .as_ref()
                .map(|t| t.id.as_str()),
            Some("sales-assistant")
        );
    }

    #[tokio::test]
    async fn test_focus_after_step_change_is_not_reset_later() {
        let mut app = app(WizardVariant::Enhanced);

        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        app.handle_key_event(KeyEvent::from(KeyCode::Tab));
        app.process_pending_events();

        assert_eq!(app.wizard.current_step(), 2);
        assert_eq!(app.view.focus, 1);
    }

    #[tokio::test]
    async fn test_paste_applies_events_immediately() {
        let mut app = app(WizardVariant::Classic);
        app.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(
            app.view.refusal.as_deref().map(<[Field]>::len),
            Some(3)
        );

        app.handle_paste("Acme Co");

        let refusal = app.view.refusal.as_deref().unwrap_or_default();
        assert!(!refusal.contains(&Field::BusinessName));
        assert_eq!(refusal.len(), 2);
    }

    #[tokio::test]
    async fn test_hiding_advanced_clamps_focus() {
        let mut app = app(WizardVariant::Classic);
        app.wizard.set_field(aw_protocol::FieldUpdate::BusinessName("Acme".to_string()));
        app.wizard
            .set_field(aw_protocol::FieldUpdate::BusinessDescription("Widgets".to_string()));
        app.wizard.set_field(aw_protocol::FieldUpdate::Industry("1".to_string()));
        app.wizard.set_field(aw_protocol::FieldUpdate::Voice("Voice 1".to_string()));
        for _ in 0..3 {
            app.wizard.advance();
        }
        app.process_pending_events();

        app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        for _ in 0..10 {
            app.handle_key_event(KeyEvent::from(KeyCode::Tab));
        }
        assert_eq!(app.view.focus, 10);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));

        assert_eq!(app.view.focus, 6);
    }
}
