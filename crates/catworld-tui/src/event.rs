//! Terminal event polling

use std::time::{Duration, Instant};

use catworld_app::{InputKey, Message};
use catworld_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Fixed-rate tick schedule.
///
/// Ticks are due on wall-clock time, so a steady stream of input (key
/// repeat, resizes, mouse moves) cannot hold them back.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    tick_rate: Duration,
    last_tick: Instant,
}

impl TickClock {
    pub fn new(tick_rate: Duration, now: Instant) -> Self {
        Self {
            tick_rate,
            last_tick: now,
        }
    }

    /// How long an input poll may block before the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.tick_rate
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Whether a tick is due at `now`; starts the next period if so
    pub fn take_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.tick_rate {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

/// Poll for a terminal event, waiting at most `timeout`.
///
/// Returns `None` on timeout and for events the page does not handle.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('j')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_shift_tab_is_back_tab() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_navigation_keys() {
        for (code, expected) in [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::PageUp, InputKey::PageUp),
            (KeyCode::PageDown, InputKey::PageDown),
            (KeyCode::Home, InputKey::Home),
            (KeyCode::End, InputKey::End),
        ] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(key_event_to_input(key), Some(expected));
        }
    }

    #[test]
    fn test_tick_clock_fires_under_constant_input() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(50), start);

        // Input every 10ms for half a second: each poll returns early
        let ticks = (1..=50)
            .filter(|i| clock.take_due(start + Duration::from_millis(10 * i)))
            .count();

        assert_eq!(ticks, 10);
    }

    #[test]
    fn test_tick_clock_timeout_shrinks_as_period_elapses() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(50), start);

        assert_eq!(clock.timeout(start), Duration::from_millis(50));
        assert_eq!(
            clock.timeout(start + Duration::from_millis(30)),
            Duration::from_millis(20)
        );
        assert_eq!(
            clock.timeout(start + Duration::from_millis(80)),
            Duration::ZERO
        );

        assert!(!clock.take_due(start + Duration::from_millis(49)));
        assert!(clock.take_due(start + Duration::from_millis(50)));
        assert_eq!(
            clock.timeout(start + Duration::from_millis(50)),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }
}
