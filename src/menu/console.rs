use super::Event;
use std::io::BufRead;
use std::io::Write;

/// Line-oriented input plus the event output channel of the menu loop.
pub trait Console {
    /// Show `prompt` and block for one line, without its terminator.
    /// `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>>;
    /// Report an event to the user.
    fn notify(&mut self, event: &Event) -> std::io::Result<()>;
}

/// Console over any reader/writer pair, e.g. piped stdin and stdout.
///
/// Only the line terminator is stripped; all other whitespace is kept.
pub struct Lines<R, W> {
    input: R,
    output: W,
}

impl<R, W> Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R, W> Console for Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let ref mut buffer = String::new();
        match self.input.read_line(buffer)? {
            0 => Ok(None),
            _ => {
                let line = buffer.strip_suffix('\n').unwrap_or(buffer.as_str());
                let line = line.strip_suffix('\r').unwrap_or(line);
                Ok(Some(line.to_string()))
            }
        }
    }
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        writeln!(self.output, "{}", event)?;
        self.output.flush()
    }
}
