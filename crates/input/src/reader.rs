//! Blocking key reader running on its own thread.
//!
//! `crossterm::event::read` blocks, so it gets a dedicated OS thread that
//! forwards mapped commands to the game loop. The thread stops when the
//! forwarder reports the receiving side is gone, after a quit command, or when
//! the terminal stops delivering events. Callers do not have to join it.

use std::io;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event};

use crate::map::map_key;
use crate::types::Command;

/// Spawn the reader. `forward` returns `false` once commands can no longer be delivered.
pub fn spawn_key_reader<F>(forward: F) -> io::Result<JoinHandle<()>>
where
    F: FnMut(Command) -> bool + Send + 'static,
{
    thread::Builder::new()
        .name("key-reader".into())
        .spawn(move || read_keys(event::read, forward))
}

/// Pump events from `next_event` into `forward` until one side stops.
///
/// Key presses go through the key map; a terminal resize becomes
/// [`Command::Redraw`].
pub fn read_keys<E, F>(mut next_event: E, mut forward: F)
where
    E: FnMut() -> io::Result<Event>,
    F: FnMut(Command) -> bool,
{
    while let Ok(ev) = next_event() {
        let command = match ev {
            Event::Key(key) => map_key(key),
            Event::Resize(..) => Some(Command::Redraw),
            _ => None,
        };
        let Some(command) = command else {
            continue;
        };
        if !forward(command) || command == Command::Quit {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Intent;
    use crossterm::event::{KeyCode, KeyEvent};
    use std::collections::VecDeque;

    fn scripted(events: Vec<Event>) -> impl FnMut() -> io::Result<Event> {
        let mut queue: VecDeque<Event> = events.into();
        move || {
            queue
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
        }
    }

    #[test]
    fn forwards_mapped_keys_and_skips_others() {
        let events = vec![
            Event::Key(KeyEvent::from(KeyCode::Left)),
            Event::FocusGained,
            Event::Key(KeyEvent::from(KeyCode::Char('x'))),
            Event::Key(KeyEvent::from(KeyCode::Char(' '))),
        ];
        let mut seen = Vec::new();
        read_keys(scripted(events), |cmd| {
            seen.push(cmd);
            true
        });
        assert_eq!(
            seen,
            vec![Command::Play(Intent::Left), Command::Play(Intent::Rotate)]
        );
    }

    #[test]
    fn resize_asks_for_redraw() {
        let events = vec![
            Event::Resize(80, 24),
            Event::Key(KeyEvent::from(KeyCode::Down)),
            Event::Resize(100, 30),
        ];
        let mut seen = Vec::new();
        read_keys(scripted(events), |cmd| {
            seen.push(cmd);
            true
        });
        assert_eq!(
            seen,
            vec![Command::Redraw, Command::Play(Intent::Down), Command::Redraw]
        );
    }

    #[test]
    fn stops_after_quit() {
        let events = vec![
            Event::Key(KeyEvent::from(KeyCode::Esc)),
            Event::Key(KeyEvent::from(KeyCode::Down)),
        ];
        let mut seen = Vec::new();
        read_keys(scripted(events), |cmd| {
            seen.push(cmd);
            true
        });
        assert_eq!(seen, vec![Command::Quit]);
    }

    #[test]
    fn stops_when_receiver_is_gone() {
        let events = vec![
            Event::Key(KeyEvent::from(KeyCode::Down)),
            Event::Key(KeyEvent::from(KeyCode::Down)),
        ];
        let mut calls = 0;
        read_keys(scripted(events), |_| {
            calls += 1;
            false
        });
        assert_eq!(calls, 1);
    }
}
