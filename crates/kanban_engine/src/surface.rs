use std::collections::VecDeque;

use crate::{Position, Result, Size};

/// Keys the run loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Interrupt,
    Char(char),
    Other,
}

impl KeyInput {
    /// Escape, Ctrl-C and `q` end the program.
    pub fn is_quit(self) -> bool {
        matches!(self, KeyInput::Escape | KeyInput::Interrupt | KeyInput::Char('q'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Resize(Size),
    Key(KeyInput),
    Other,
}

/// Where banners get painted. Coordinates are in surface cells.
pub trait DisplaySurface {
    /// Current size in cells.
    fn size(&self) -> Size;

    /// Reset every cell to the background.
    fn clear(&mut self);

    /// Paint one cell with the ink colour. Cells outside the surface are ignored.
    fn fill_cell(&mut self, pos: Position);

    /// Make pending changes visible.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn show(&mut self) -> Result<()>;

    /// Redraw everything, used after the surface was resized.
    ///
    /// # Errors
    ///
    /// Fails if the output can't be written.
    fn sync(&mut self) -> Result<()> {
        self.show()
    }

    /// Block until the next event arrives.
    ///
    /// # Errors
    ///
    /// Fails if the event source is gone.
    fn poll_event(&mut self) -> Result<SurfaceEvent>;

    /// Give the underlying device back in its original state.
    ///
    /// # Errors
    ///
    /// Fails if restoring the device fails.
    fn restore(&mut self) -> Result<()>;
}

/// An off-screen surface: a grid of filled/empty cells plus a queue of
/// scripted events. Handy for rendering banners to text.
#[derive(Debug, Clone, Default)]
pub struct BufferSurface {
    size: Size,
    cells: Vec<bool>,
    events: VecDeque<SurfaceEvent>,
    shown_frames: usize,
    restored: bool,
}

impl BufferSurface {
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![false; (size.width.max(0) * size.height.max(0)) as usize],
            ..Default::default()
        }
    }

    /// Queue an event for [`DisplaySurface::poll_event`].
    pub fn push_event(&mut self, event: SurfaceEvent) {
        self.events.push_back(event);
    }

    pub fn resize(&mut self, size: impl Into<Size>) {
        let size = size.into();
        self.size = size;
        self.cells = vec![false; (size.width.max(0) * size.height.max(0)) as usize];
    }

    pub fn is_filled(&self, pos: Position) -> bool {
        self.size.contains(pos) && self.cells[(pos.y * self.size.width + pos.x) as usize]
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Number of [`DisplaySurface::show`]/[`DisplaySurface::sync`] calls so far.
    pub fn shown_frames(&self) -> usize {
        self.shown_frames
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// One text row per cell row, `#` for filled cells.
    pub fn to_text(&self) -> String {
        let mut s = String::new();
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                s.push(if self.is_filled(Position::new(x, y)) { '#' } else { ' ' });
            }
            s.push('\n');
        }
        s
    }
}

impl DisplaySurface for BufferSurface {
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
        self.shown_frames += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<SurfaceEvent> {
        match self.events.pop_front() {
            Some(SurfaceEvent::Resize(size)) => {
                self.resize(size);
                Ok(SurfaceEvent::Resize(size))
            }
            Some(event) => Ok(event),
            // running out of scripted events behaves like a quit request
            None => Ok(SurfaceEvent::Key(KeyInput::Escape)),
        }
    }

    fn restore(&mut self) -> Result<()> {
        self.restored = true;
        Ok(())
    }
}
