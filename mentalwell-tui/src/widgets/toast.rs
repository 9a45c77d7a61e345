//! Transient toast notifications.
//!
//! Recoverable failures (failed fetch, failed submit) and success
//! confirmations surface here for a few seconds and disappear on their
//! own, matching the product's toast behavior.

use std::collections::VecDeque;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::Theme;

/// Lifetime of one toast, in event-loop ticks (~100 ms each).
const TOAST_TICKS: u32 = 30;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// One notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    remaining: u32,
}

/// FIFO queue of live toasts.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastKind::Error);
    }

    fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push_back(Toast {
            message: message.into(),
            kind,
            remaining: TOAST_TICKS,
        });
    }

    /// Age every toast by one tick, dropping expired ones.
    pub fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.remaining = toast.remaining.saturating_sub(1);
        }
        self.toasts.retain(|toast| toast.remaining > 0);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Render live toasts stacked above the footer, newest at the bottom.
    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        if self.toasts.is_empty() {
            return;
        }
        let area = frame.area();
        let shown = self.toasts.len().min(3) as u16;
        let height = shown * 3;
        if area.height <= height + 1 || area.width < 20 {
            return;
        }
        let width = area.width.min(48);
        let x = area.width - width;
        let mut y = area.height.saturating_sub(height + 1);

        for toast in self.toasts.iter().rev().take(shown as usize) {
            let toast_area = Rect::new(x, y, width, 3);
            let color = match toast.kind {
                ToastKind::Info => theme.accent,
                ToastKind::Success => theme.success,
                ToastKind::Error => theme.error,
            };
            frame.render_widget(Clear, toast_area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            let paragraph = Paragraph::new(Line::styled(
                toast.message.clone(),
                Style::default().fg(theme.fg),
            ))
            .block(block);
            frame.render_widget(paragraph, toast_area);
            y += 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_starts_empty() {
        let queue = ToastQueue::new();
        assert!(queue.is_empty());
    }

    #[test]
    fn pushed_toasts_are_kept_in_order() {
        let mut queue = ToastQueue::new();
        queue.error("fetch failed");
        queue.success("submitted");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.toasts[0].kind, ToastKind::Error);
        assert_eq!(queue.toasts[1].kind, ToastKind::Success);
    }

    #[test]
    fn toasts_expire_after_their_ttl() {
        let mut queue = ToastQueue::new();
        queue.info("hello");
        for _ in 0..TOAST_TICKS {
            queue.tick();
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn younger_toasts_outlive_older_ones() {
        let mut queue = ToastQueue::new();
        queue.info("old");
        for _ in 0..(TOAST_TICKS - 1) {
            queue.tick();
        }
        queue.info("new");
        queue.tick();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts[0].message, "new");
    }
}
