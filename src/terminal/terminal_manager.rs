use std::io;
use std::io::Write;
use std::panic;

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

#[cfg(test)]
use crate::ui::resolution::Resolution;

pub struct TerminalManager<B : Backend> {
    pub terminal : ratatui::Terminal<B>,
}

impl <B : Backend>  TerminalManager<B> {
    pub fn clear_screen(&mut self) -> Result<(), io::Error> {
        self.terminal.clear()
    }
}

pub fn init() -> Result<TerminalManager<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let manager = undo_on_error(build_crossterm_manager(), restore)?;
    log::info!("Terminal initialised.");
    Ok(manager)
}

fn build_crossterm_manager() -> Result<TerminalManager<CrosstermBackend<io::Stdout>>, io::Error> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    let mut manager = TerminalManager::<CrosstermBackend<io::Stdout>> { terminal };
    manager.clear_screen()?;
    Ok(manager)
}

/*
    Runs the undo step if setup failed part way, keeping the original error
 */
fn undo_on_error<T, F>(result: Result<T, io::Error>, undo: F) -> Result<T, io::Error>
    where F: FnOnce() -> Result<(), io::Error> {
    if let Err(e) = &result {
        log::error!("Terminal setup failed: {}", e);
        if let Err(undo_error) = undo() {
            log::error!("Failed to restore the terminal: {}", undo_error);
        }
    }
    result
}

/*
    Hands the terminal back to the shell the way we found it
 */
pub fn restore() -> Result<(), io::Error> {
    disable_raw_mode()?;
    leave_screen(&mut io::stdout())?;
    log::info!("Terminal restored.");
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) -> Result<(), io::Error> {
    execute!(out, LeaveAlternateScreen, Show)
}

/*
    Restores the terminal before the default panic output, otherwise the message lands on the alternate screen in raw mode
 */
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original_hook(info);
    }));
}

#[cfg(test)]
pub fn init_test(resolution : Resolution) -> Result<TerminalManager<ratatui::backend::TestBackend>, io::Error> {
    let backend = ratatui::backend::TestBackend::new(resolution.width,resolution.height);
    let terminal = Terminal::new(backend)?;
    let manager = TerminalManager::<ratatui::backend::TestBackend> { terminal };

    log::info!("Terminal initialised.");
    return Ok(manager);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io;

    use crate::terminal::terminal_manager::{leave_screen, undo_on_error};

    #[test]
    fn test_undo_on_error_runs_undo() {
        // GIVEN setup failed after raw mode was enabled
        let undone = Cell::new(false);
        let failed : Result<u32, io::Error> = Err(io::Error::new(io::ErrorKind::Other, "No alternate screen"));

        // WHEN we check the result
        let result = undo_on_error(failed, || { undone.set(true); Ok(()) });

        // THEN the terminal is put back and the original error is kept
        assert!(undone.get());
        assert_eq!("No alternate screen", result.unwrap_err().to_string());
    }

    #[test]
    fn test_undo_on_error_keeps_success() {
        let undone = Cell::new(false);
        let result = undo_on_error(Ok(5), || { undone.set(true); Ok(()) });
        assert!(!undone.get());
        assert_eq!(5, result.unwrap());
    }

    #[test]
    fn test_undo_failure_keeps_setup_error() {
        let failed : Result<u32, io::Error> = Err(io::Error::new(io::ErrorKind::Other, "No alternate screen"));
        let result = undo_on_error(failed, || Err(io::Error::new(io::ErrorKind::Other, "Not a terminal")));
        assert_eq!("No alternate screen", result.unwrap_err().to_string());
    }

    #[test]
    fn test_leave_screen_writes_leave_and_show() {
        let mut out : Vec<u8> = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "Expected leave alternate screen in {:?}", written);
        assert!(written.contains("\x1b[?25h"), "Expected show cursor in {:?}", written);
    }
}
