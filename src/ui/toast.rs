/// Transient toast notifications
///
/// Fire-and-forget status messages stacked in the bottom-right corner
/// of the window. Every user-visible outcome (search success, empty
/// result, failure, save, delete) goes through here; toasts expire on
/// their own after a fixed TTL and never block interaction.

use std::time::{Duration, Instant};

use iced::widget::{container, text, Column};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn background(self) -> Color {
        match self {
            ToastKind::Success => Color::from_rgb8(0x2e, 0x7d, 0x32),
            ToastKind::Info => Color::from_rgb8(0x02, 0x88, 0xd1),
            ToastKind::Warning => Color::from_rgb8(0xed, 0x6c, 0x02),
            ToastKind::Error => Color::from_rgb8(0xc6, 0x28, 0x28),
        }
    }
}

/// One on-screen notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    born: Instant,
}

/// The stack of currently visible toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new toast, timestamped now
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    /// Push with an explicit timestamp (tests drive this directly)
    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, born: Instant) {
        self.entries.push(Toast {
            kind,
            message: message.into(),
            born,
        });
    }

    /// Drop every toast whose TTL has elapsed as of `now`
    pub fn sweep(&mut self, now: Instant) {
        self.entries
            .retain(|toast| now.duration_since(toast.born) < TOAST_TTL);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }
}

/// Render the toast stack as a full-window overlay layer.
///
/// The layer itself is transparent and captures no input; only the
/// banners in the corner are visible.
pub fn view<'a, Message: 'a>(toasts: &'a Toasts) -> Element<'a, Message> {
    let stack = toasts.iter().fold(
        Column::new().spacing(8).align_x(Alignment::End),
        |column, toast| column.push(banner(toast)),
    );

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(16)
        .into()
}

/// One colored banner
fn banner<'a, Message: 'a>(toast: &'a Toast) -> Element<'a, Message> {
    let color = toast.kind.background();

    container(text(&toast.message).size(14))
        .padding([8, 12])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_expires_old_toasts_only() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.push_at(ToastKind::Success, "old", t0);
        toasts.push_at(ToastKind::Warning, "fresh", t0 + Duration::from_secs(3));

        toasts.sweep(t0 + TOAST_TTL);

        let remaining: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["fresh"]);
    }

    #[test]
    fn test_sweep_keeps_toasts_inside_ttl() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.push_at(ToastKind::Info, "No images found.", t0);

        toasts.sweep(t0 + TOAST_TTL - Duration::from_millis(1));

        assert!(!toasts.is_empty());
    }

    #[test]
    fn test_stacking_keeps_insertion_order() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.push_at(ToastKind::Success, "first", t0);
        toasts.push_at(ToastKind::Error, "second", t0);

        let kinds: Vec<ToastKind> = toasts.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);
    }
}
