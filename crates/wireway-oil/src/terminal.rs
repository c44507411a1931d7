use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event as CtEvent},
    execute, queue,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::node::Node;
use crate::render::render_to_string;

/// Raw-mode terminal that redraws the whole frame when its content changes.
pub struct Terminal {
    stdout: Stdout,
    width: u16,
    height: u16,
    use_alternate_screen: bool,
    entered: bool,
    last_frame: Option<String>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            width,
            height,
            use_alternate_screen: true,
            entered: false,
            last_frame: None,
        })
    }

    pub fn with_alternate_screen(mut self, use_alt: bool) -> Self {
        self.use_alternate_screen = use_alt;
        self
    }

    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        if self.use_alternate_screen {
            execute!(self.stdout, EnterAlternateScreen, Hide)?;
        } else {
            execute!(self.stdout, Hide)?;
        }
        self.entered = true;
        tracing::debug!(width = self.width, height = self.height, "terminal entered");
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        execute!(self.stdout, Show)?;
        if self.use_alternate_screen {
            execute!(self.stdout, LeaveAlternateScreen)?;
        }
        terminal::disable_raw_mode()?;
        writeln!(self.stdout)?;
        self.stdout.flush()
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn handle_resize(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.width = width;
        self.height = height;
        self.last_frame = None;
        Ok(())
    }

    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<CtEvent>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Render `tree` at `width` columns (clamped to the terminal).
    pub fn render(&mut self, tree: &Node, width: usize) -> io::Result<()> {
        let width = width.min(self.width as usize);
        let frame = render_to_string(tree, width);
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return Ok(());
        }

        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        for (i, line) in frame.lines().take(self.height as usize).enumerate() {
            queue!(self.stdout, MoveTo(0, i as u16))?;
            write!(self.stdout, "{line}")?;
        }
        self.stdout.flush()?;
        self.last_frame = Some(frame);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
