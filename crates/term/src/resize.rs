//! Best-effort terminal sizing.

use std::io::{self, Write};

use crossterm::{terminal, ExecutableCommand};

/// Capability to resize the terminal window to a given cell grid.
pub trait ViewportResizer {
    fn resize(&mut self, width: u16, height: u16) -> io::Result<()>;
}

/// Resizes through crossterm's `SetSize`.
///
/// On Unix this is the `CSI 8 ; rows ; cols t` window op, which many terminal
/// emulators ignore. On Windows it goes through the console API.
pub struct CrosstermResizer<W: Write = io::Stdout> {
    out: W,
}

impl CrosstermResizer {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> CrosstermResizer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewportResizer for CrosstermResizer<W> {
    fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.out.execute(terminal::SetSize(width, height))?;
        Ok(())
    }
}

/// Try to size the terminal to `width` x `height`.
///
/// Failure is logged and otherwise ignored; the frame keeps its fixed size and
/// a smaller terminal simply crops it.
pub fn fit_viewport(resizer: &mut impl ViewportResizer, width: u16, height: u16) -> bool {
    match resizer.resize(width, height) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("[Viewport] resize to {}x{} failed: {}", width, height, e);
            false
        }
    }
}

/// Compare the reported terminal size against the frame.
///
/// Logs and returns `false` when the frame will be cropped. The size may still
/// be the one from before a resize request, since terminals apply window ops
/// asynchronously.
pub fn check_terminal_size(actual: (u16, u16), width: u16, height: u16) -> bool {
    let (w, h) = actual;
    if w < width || h < height {
        eprintln!(
            "[Viewport] terminal is {}x{}, frame is {}x{}; output may be cropped",
            w, h, width, height
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RefusingResizer {
        attempts: u32,
    }

    impl ViewportResizer for RefusingResizer {
        fn resize(&mut self, _width: u16, _height: u16) -> io::Result<()> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::Unsupported, "no window ops"))
        }
    }

    #[test]
    fn failed_resize_is_not_fatal() {
        let mut resizer = RefusingResizer { attempts: 0 };
        assert!(!fit_viewport(&mut resizer, 40, 40));
        assert_eq!(resizer.attempts, 1);
    }

    #[test]
    fn terminal_size_check() {
        assert!(check_terminal_size((40, 40), 40, 40));
        assert!(check_terminal_size((120, 50), 40, 40));
        assert!(!check_terminal_size((80, 24), 40, 40));
        assert!(!check_terminal_size((39, 60), 40, 40));
    }

    #[cfg(unix)]
    #[test]
    fn crossterm_resizer_emits_window_op() {
        let mut resizer = CrosstermResizer::with_writer(Vec::new());
        assert!(fit_viewport(&mut resizer, 40, 30));
        let bytes = resizer.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), "\x1b[8;30;40t");
    }
}
