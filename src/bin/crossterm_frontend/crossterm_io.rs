use chip8_vm::machine::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

use crossterm::event::KeyCode;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{stdout, Write};

/// An alternate-screen renderer for the machine's framebuffer.
/// Keeps a local mirror of the screen so only cells that changed get redrawn.
pub struct CrosstermScreen {
    cells: FrameBuffer,
}

impl CrosstermScreen {
    pub fn new() -> CrosstermScreen {
        execute!(stdout(), EnterAlternateScreen);
        execute!(stdout(), cursor::Hide);
        terminal::enable_raw_mode();
        let bottom = DISPLAY_HEIGHT + 2;
        let right = 2 * DISPLAY_WIDTH + 2;
        for y in 1..=bottom {
            for x in 1..=right {
                if y == 1 || y == bottom || x == 1 || x == right {
                    let c = if y == 1 && x == 1 {
                        '┏'
                    } else if y == 1 && x == right {
                        '┓'
                    } else if y == bottom && x == 1 {
                        '┗'
                    } else if y == bottom && x == right {
                        '┛'
                    } else if y == 1 || y == bottom {
                        '━'
                    } else {
                        '┃'
                    };
                    execute!(stdout(), cursor::MoveTo(x as u16, y as u16));
                    write!(stdout(), "{}", c).unwrap();
                }
            }
        }
        CrosstermScreen {
            cells: [false; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    /// Draw the parts of the frame that changed since the last presentation.
    pub fn present(&mut self, frame: &FrameBuffer) {
        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                let cell = x + y * DISPLAY_WIDTH;
                if self.cells[cell] != frame[cell] {
                    self.cells[cell] = frame[cell];
                    self.draw(x, y, frame[cell]);
                }
            }
        }
        stdout().flush();
    }

    /// Ring the terminal bell.
    pub fn beep(&self) {
        write!(stdout(), "\x07").unwrap();
        stdout().flush();
    }

    fn draw(&self, x: usize, y: usize, on: bool) {
        execute!(stdout(), cursor::MoveTo(2 * x as u16 + 2, y as u16 + 2));
        write!(stdout(), "{}", if on { "██" } else { "  " }).unwrap();
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        terminal::disable_raw_mode();
        execute!(stdout(), LeaveAlternateScreen);
        execute!(stdout(), cursor::Show);
    }
}

/// Map a terminal key to one of the 16 machine keys.
pub fn key_to_hex(key: KeyCode) -> Option<u8> {
    match key {
        KeyCode::Char(c) => c.to_digit(16).map(|d| d as u8),
        _ => None,
    }
}
