//! TerminalRenderer: flushes styled lines to a real terminal.
//!
//! Raw mode plus alternate screen, queued commands, one flush per frame.
//! The board is small, so a full-line redraw per frame is cheap enough and
//! keeps the drawing API minimal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetStyle},
    terminal, QueueableCommand,
};

use crate::term::game_view::Line;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last_height: u16,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last_height: 0,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, clearing any rows left over from a taller previous one.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        for (row, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
            for span in line {
                self.stdout.queue(SetStyle(span.style))?;
                self.stdout.queue(Print(span.text.as_str()))?;
                self.stdout.queue(SetAttribute(Attribute::Reset))?;
                self.stdout.queue(ResetColor)?;
            }
        }

        let height = lines.len() as u16;
        for row in height..self.last_height {
            self.stdout.queue(cursor::MoveTo(0, row))?;
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        }
        self.last_height = height;

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
