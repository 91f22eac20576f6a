use super::Console;
use super::Event;
use dialoguer::Input;
use std::io::ErrorKind;
use std::io::IsTerminal;

/// Interactive console for a TTY.
///
/// Prompts are drawn on stderr, so both stdin and stderr must be terminals.
/// Ctrl-C at a prompt ends input; Ctrl-D is just a key here, only [`super::Lines`]
/// sees end-of-file.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Whether the current process can drive interactive prompts.
    pub fn available() -> bool {
        Self::usable(std::io::stdin().is_terminal(), std::io::stderr().is_terminal())
    }
    /// Prompts read keys from stdin and render on stderr.
    pub fn usable(stdin: bool, stderr: bool) -> bool {
        stdin && stderr
    }
    /// Map a prompt result onto console semantics: interrupts end input.
    fn settle(result: Result<String, dialoguer::Error>) -> std::io::Result<Option<String>> {
        match result {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e))
                if matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted) =>
            {
                log::info!("prompt ended: {}", e);
                Ok(None)
            }
            Err(e) => Err(std::io::Error::other(e)),
        }
    }
}

impl Console for Terminal {
    fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        Self::settle(
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .report(false)
                .interact_text(),
        )
    }
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        println!("{}", event);
        Ok(())
    }
}
