//! Background crossterm reader.
//!
//! Forwards key presses, resizes and the mouse events the screens act on
//! (pointer moves for tilt and hover, left clicks, wheel scrolling), and
//! interleaves `Tick` (backdrop animation) and `Render` (frame + spring
//! step) events at the configured rates.
//!
//! A terminal reports a move for every cell the pointer crosses. Only the
//! latest position matters to the tilt, so runs of moves are merged and
//! the survivor is sent ahead of the next non-move event, at the latest
//! right before the next `Render`.

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    Tick,
    Render,
}

/// Mouse kinds some screen reacts to. Releases, right/middle clicks and
/// horizontal scrolling are dropped at the source.
fn is_handled(kind: MouseEventKind) -> bool {
    matches!(
        kind,
        MouseEventKind::Moved
            | MouseEventKind::Drag(_)
            | MouseEventKind::Down(MouseButton::Left)
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
    )
}

fn is_pointer_move(kind: MouseEventKind) -> bool {
    matches!(kind, MouseEventKind::Moved | MouseEventKind::Drag(_))
}

/// Map a raw crossterm event to an app event, if the app wants it.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) if is_handled(mouse.kind) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}

/// Holds back pointer moves so only the last one of a run is delivered.
#[derive(Debug, Default)]
struct MoveCoalescer {
    pending: Option<MouseEvent>,
    merged: usize,
}

impl MoveCoalescer {
    /// Events ready to send, in order, after `event` arrives.
    fn push(&mut self, event: Event) -> Vec<Event> {
        match event {
            Event::Mouse(mouse) if is_pointer_move(mouse.kind) => {
                if self.pending.replace(mouse).is_some() {
                    self.merged += 1;
                }
                Vec::new()
            }
            other => {
                let mut ready = Vec::with_capacity(2);
                if let Some(mouse) = self.pending.take() {
                    if self.merged > 0 {
                        trace!(merged = self.merged, "pointer moves merged");
                    }
                    self.merged = 0;
                    ready.push(Event::Mouse(mouse));
                }
                ready.push(other);
                ready
            }
        }
    }
}

/// Reads terminal events in a background task and sends them over a channel.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut event_stream = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);
            let mut render_interval = tokio::time::interval(render_rate);
            let mut moves = MoveCoalescer::default();

            // Don't burst ticks if we fall behind
            tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            render_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            'read: loop {
                let event = tokio::select! {
                    () = task_cancel.cancelled() => break,

                    _ = tick_interval.tick() => Event::Tick,

                    _ = render_interval.tick() => Event::Render,

                    Some(Ok(crossterm_event)) = event_stream.next() => {
                        match translate(crossterm_event) {
                            Some(event) => event,
                            None => continue,
                        }
                    }
                };

                for ready in moves.push(event) {
                    if tx.send(ready).is_err() {
                        break 'read;
                    }
                }
            }
            debug!("event reader stopped");
        });

        Self { rx, cancel }
    }

    /// Next event, or `None` once the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn unused_mouse_kinds_are_dropped() {
        let dropped = [
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Down(MouseButton::Middle),
            MouseEventKind::ScrollLeft,
            MouseEventKind::ScrollRight,
        ];
        for kind in dropped {
            assert_eq!(translate(CrosstermEvent::Mouse(mouse(kind, 1, 1))), None);
        }

        let click = mouse(MouseEventKind::Down(MouseButton::Left), 3, 4);
        assert_eq!(
            translate(CrosstermEvent::Mouse(click)),
            Some(Event::Mouse(click))
        );
        let wheel = mouse(MouseEventKind::ScrollDown, 3, 4);
        assert_eq!(
            translate(CrosstermEvent::Mouse(wheel)),
            Some(Event::Mouse(wheel))
        );
    }

    #[test]
    fn key_releases_are_dropped() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(CrosstermEvent::Key(release)), None);
    }

    #[test]
    fn run_of_moves_collapses_to_the_last_before_render() {
        let mut moves = MoveCoalescer::default();
        for column in 10..20 {
            assert!(moves
                .push(Event::Mouse(mouse(MouseEventKind::Moved, column, 5)))
                .is_empty());
        }

        assert_eq!(
            moves.push(Event::Render),
            vec![
                Event::Mouse(mouse(MouseEventKind::Moved, 19, 5)),
                Event::Render
            ]
        );
        assert_eq!(moves.push(Event::Render), vec![Event::Render]);
    }

    #[test]
    fn pending_move_is_sent_ahead_of_a_click() {
        let mut moves = MoveCoalescer::default();
        moves.push(Event::Mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 7, 2)));
        let click = mouse(MouseEventKind::Down(MouseButton::Left), 8, 2);

        assert_eq!(
            moves.push(Event::Mouse(click)),
            vec![
                Event::Mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 7, 2)),
                Event::Mouse(click)
            ]
        );
    }
}
