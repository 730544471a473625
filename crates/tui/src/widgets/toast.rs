//! Toast overlay for notifications.

use aw_protocol::ipc::{Notification, NotificationKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    shown_at: Instant,
}

impl Toast {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_TTL
    }

    /// Time left before the toast expires.
    pub fn remaining(&self, now: Instant) -> Duration {
        TOAST_TTL.saturating_sub(now.duration_since(self.shown_at))
    }
}

/// Time until the first of `toasts` expires, if any are showing.
pub fn next_toast_expiry(toasts: &[Toast], now: Instant) -> Option<Duration> {
    toasts.iter().map(|t| t.remaining(now)).min()
}

/// Drop toasts older than [`TOAST_TTL`].
pub fn prune_toasts(toasts: &mut Vec<Toast>, now: Instant) {
    toasts.retain(|t| !t.is_expired(now));
}

fn accent(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Testing => Color::Yellow,
        NotificationKind::Preview => Color::Cyan,
        NotificationKind::Editing => Color::Blue,
        NotificationKind::Publishing => Color::Green,
    }
}

/// Stack toasts in the top-right corner of `area`, newest on top.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y + 1;

    for toast in toasts.iter().rev() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        y += TOAST_HEIGHT;

        let color = accent(toast.notification.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let body = vec![
            Line::from(Span::styled(
                toast.notification.title.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(toast.notification.description.clone()),
        ];

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(body).block(block).wrap(Wrap { trim: true }),
            rect,
        );
    }
}
