//! Crossterm backed [`DisplaySurface`].

use std::io::{self, BufWriter, IsTerminal, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use kanban_engine::{DisplaySurface, EngineError, KeyInput, Position, Result, Size, SurfaceEvent};

/// Banner ink: white on olive.
const INK_FOREGROUND: Color = Color::White;
const INK_BACKGROUND: Color = Color::DarkYellow;

pub struct CrosstermSurface {
    out: BufWriter<Stdout>,
    size: Size,
    cells: Vec<bool>,
    active: bool,
}

impl CrosstermSurface {
    /// Switch the terminal to raw mode on the alternate screen.
    ///
    /// # Errors
    ///
    /// Fails if stdout is not a terminal or the terminal can't be set up.
    pub fn open() -> Result<Self> {
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(EngineError::surface("stdout is not a terminal"));
        }
        terminal::enable_raw_mode()?;
        // from here on drop puts the terminal back
        let mut surface = Self {
            out: BufWriter::new(stdout),
            size: Size::default(),
            cells: Vec::new(),
            active: true,
        };
        execute!(surface.out, EnterAlternateScreen, Hide, ResetColor, Clear(ClearType::All))?;
        let size = Size::from(terminal::size()?);
        surface.resize(size);
        log::info!("terminal opened at {size}");
        Ok(surface)
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.cells = vec![false; (size.width.max(0) * size.height.max(0)) as usize];
    }

    fn draw(&mut self, clear: ClearType) -> io::Result<()> {
        queue!(self.out, ResetColor, Clear(clear))?;
        let width = self.size.width.max(0) as usize;
        if width > 0 {
            for (y, row) in self.cells.chunks(width).enumerate() {
                let mut x = 0;
                while x < row.len() {
                    if !row[x] {
                        x += 1;
                        continue;
                    }
                    let run = row[x..].iter().take_while(|c| **c).count();
                    queue!(
                        self.out,
                        MoveTo(x as u16, y as u16),
                        SetForegroundColor(INK_FOREGROUND),
                        SetBackgroundColor(INK_BACKGROUND),
                        Print(" ".repeat(run)),
                        ResetColor
                    )?;
                    x += run;
                }
            }
        }
        self.out.flush()
    }
}

fn key_input(key: KeyEvent) -> KeyInput {
    match key.code {
        KeyCode::Esc => KeyInput::Escape,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Interrupt,
        KeyCode::Char(ch) => KeyInput::Char(ch),
        _ => KeyInput::Other,
    }
}

impl DisplaySurface for CrosstermSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn fill_cell(&mut self, pos: Position) {
        if self.size.contains(pos) {
            self.cells[(pos.y * self.size.width + pos.x) as usize] = true;
        }
    }

    fn show(&mut self) -> Result<()> {
        self.draw(ClearType::All)?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.draw(ClearType::Purge)?;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<SurfaceEvent> {
        let event = match event::read()? {
            Event::Resize(width, height) => {
                let size = Size::from((width, height));
                self.resize(size);
                SurfaceEvent::Resize(size)
            }
            Event::Key(key) if key.kind != KeyEventKind::Release => SurfaceEvent::Key(key_input(key)),
            _ => SurfaceEvent::Other,
        };
        Ok(event)
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        log::info!("terminal restored");
        Ok(())
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::error!("failed to restore terminal: {err}");
        }
    }
}
