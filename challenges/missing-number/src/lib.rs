use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::{Clear, ClearType};

pub mod config;
pub mod driver;
pub mod finder;
pub mod game;
pub mod input;
pub mod numbers;
pub mod output;
pub mod prompt;

pub use config::Config;

/// Line reader for the interactive prompts
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Next trimmed line, or `None` once the input is exhausted. Bytes that
    /// are not UTF-8 become replacement characters.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut input = Vec::new();
        if self.reader.read_until(b'\n', &mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&input).trim().to_string()))
    }
}

/// Whether console output carries colors and decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Colored,
    Plain,
}

impl Palette {
    pub fn is_colored(self) -> bool {
        self == Palette::Colored
    }
}

/// The role a piece of text plays, mapped to a color when the palette allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Prompt,
    Success,
    Banner,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Error => Color::Red,
            Tone::Prompt => Color::Yellow,
            Tone::Success => Color::Green,
            Tone::Banner => Color::Magenta,
        }
    }
}

/// Console writer. Every write is flushed so prompts show up before the
/// next blocking read.
pub struct Writer<W: Write> {
    inner: W,
    palette: Palette,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W, palette: Palette) -> Self {
        Self { inner, palette }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn print<T: Display>(&mut self, value: T) -> io::Result<()> {
        write!(self.inner, "{}", value)?;
        self.inner.flush()
    }

    pub fn println<T: Display>(&mut self, value: T) -> io::Result<()> {
        writeln!(self.inner, "{}", value)?;
        self.inner.flush()
    }

    pub fn paint<T: Display>(&mut self, tone: Tone, value: T) -> io::Result<()> {
        match self.palette {
            Palette::Colored => write!(self.inner, "{}", style(value).with(tone.color()))?,
            Palette::Plain => write!(self.inner, "{}", value)?,
        }
        self.inner.flush()
    }

    pub fn paintln<T: Display>(&mut self, tone: Tone, value: T) -> io::Result<()> {
        self.paint(tone, value)?;
        self.println("")
    }

    /// Clears the terminal. A no-op on the plain palette, which may be
    /// writing somewhere that is not a terminal.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if self.palette.is_colored() {
            crossterm::queue!(self.inner, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Helpers for driving the game from scripted input
pub mod testing {
    use super::*;
    use std::io::Cursor;

    /// A scanner that answers each prompt with the next line, then reports end of input.
    pub fn scripted(lines: &[&str]) -> Scanner {
        let text: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        Scanner::new(Cursor::new(text))
    }

    /// A plain writer backed by memory.
    pub fn buffer() -> Writer<Vec<u8>> {
        Writer::new(Vec::new(), Palette::Plain)
    }

    pub fn output(writer: Writer<Vec<u8>>) -> String {
        String::from_utf8_lossy(&writer.into_inner()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::testing::*;
    use super::*;

    #[test]
    fn test_scanner_trims_and_reports_end() -> io::Result<()> {
        let mut input = scripted(&["  3,0,1  ", ""]);
        assert_eq!(Some("3,0,1".to_string()), input.next_line()?);
        assert_eq!(Some(String::new()), input.next_line()?);
        assert_eq!(None, input.next_line()?);
        Ok(())
    }

    #[test]
    fn test_scanner_replaces_invalid_utf8() -> io::Result<()> {
        let mut input = Scanner::new(Cursor::new(b"\xff\xfe,1\n3,0,1\n".to_vec()));
        assert_eq!(Some("\u{fffd}\u{fffd},1".to_string()), input.next_line()?);
        assert_eq!(Some("3,0,1".to_string()), input.next_line()?);
        Ok(())
    }

    #[test]
    fn test_plain_writer_has_no_escapes() -> io::Result<()> {
        let mut out = buffer();
        out.clear_screen()?;
        out.paintln(Tone::Error, "boom")?;
        assert_eq!("boom\n", output(out));
        Ok(())
    }

    #[test]
    fn test_colored_writer_styles_text() -> io::Result<()> {
        let mut out = Writer::new(Vec::new(), Palette::Colored);
        out.paint(Tone::Success, "ok")?;
        let text = output(out);
        assert!(text.contains("ok"));
        assert!(text.contains('\u{1b}') || std::env::var_os("NO_COLOR").is_some());
        Ok(())
    }
}
