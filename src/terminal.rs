//! Crossterm display driver.
//!
//! Owns the terminal for one session: entering creates the renderer,
//! [`TerminalDriver::exit`] (or drop) restores the terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::core::GameSnapshot;
use crate::input::translate_key_event;
use crate::session::Driver;
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::InputEvent;

pub struct TerminalDriver {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    tick: Duration,
    next_tick: Instant,
}

impl TerminalDriver {
    pub fn enter(tick: Duration) -> Result<Self> {
        let renderer = TerminalRenderer::enter()?;
        Ok(Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            tick,
            next_tick: Instant::now() + tick,
        })
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Driver for TerminalDriver {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn wait_tick(&mut self, events: &mut Vec<InputEvent>) -> Result<()> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick += self.tick;
                // Fell behind (e.g. suspended terminal): resync instead of bursting.
                if self.next_tick <= now {
                    self.next_tick = now + self.tick;
                }
                return Ok(());
            }

            if !event::poll(self.next_tick - now)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if let Some(input) = translate_key_event(key) {
                        events.push(input);
                        if input == InputEvent::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(w, h) => {
                    log::debug!("terminal resized to {}x{}", w, h);
                    self.renderer.invalidate();
                }
                _ => {}
            }
        }
    }
}
