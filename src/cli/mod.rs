//! Interactive command loop for the contact assistant.
//!
//! [`Assistant`] owns the address book for one session and turns each input
//! line into a reply. [`run_session`] drives it over any line-oriented
//! reader and writer; [`run_assistant`] wires that to stdin/stdout.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command};

use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::error::{BookResult, StorageResult};
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command. Type 'help' to see available commands.";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print (blank input)
    Silent,
    /// Print the message and read the next command
    Message(String),
    /// The book has been saved; print the message and stop
    Exit(String),
}

/// One user session: the loaded address book and where to save it.
pub struct Assistant {
    book: AddressBook,
    repository: Box<dyn AddressBookRepository>,
    clock: Option<fn() -> NaiveDate>,
}

impl Assistant {
    /// Load the book from `repository` and start a session.
    pub fn start(repository: Box<dyn AddressBookRepository>) -> StorageResult<Self> {
        let book = repository.load()?;
        info!("Session started with {} contacts", book.len());
        Ok(Self {
            book,
            repository,
            clock: None,
        })
    }

    /// Use `today` instead of the local date for birthday reminders.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.clock = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line.
    ///
    /// Command failures become the reply text. Only a failed save on exit is
    /// returned as an error.
    pub fn handle_line(&mut self, line: &str) -> StorageResult<Reply> {
        let (word, args) = parse_input(line);
        if word.is_empty() {
            return Ok(Reply::Silent);
        }

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => {
                warn!(command = %unknown, "unknown command");
                return Ok(Reply::Message(INVALID_COMMAND.to_string()));
            }
        };
        debug!(%command, args = args.len(), "dispatching");

        let outcome: BookResult<String> = match command {
            Command::Exit => {
                self.shutdown()?;
                return Ok(Reply::Exit(FAREWELL.to_string()));
            }
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Help => Ok(handlers::show_help().to_string()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => Ok(handlers::show_all(&self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => {
                Ok(handlers::birthdays(&self.book, self.clock.map(|today| today())))
            }
        };

        let message = outcome.unwrap_or_else(|e| {
            debug!(error = ?e, "command failed");
            e.to_string()
        });
        Ok(Reply::Message(message))
    }

    /// Save the whole book.
    pub fn shutdown(&mut self) -> StorageResult<()> {
        self.repository.save(&self.book)?;
        info!("Session saved with {} contacts", self.book.len());
        Ok(())
    }
}

/// Run the command loop until `close`, `exit` or end of input.
///
/// End of input saves the book like `exit` does. Lines that are not valid
/// UTF-8 are decoded lossily rather than ending the session.
pub async fn run_session<R, W>(
    mut assistant: Assistant,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<Assistant>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

    let mut buf = Vec::new();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, saving and exiting");
            assistant.shutdown()?;
            writer.write_all(format!("\n{}\n", FAREWELL).as_bytes()).await?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match assistant.handle_line(&line)? {
            Reply::Silent => {}
            Reply::Message(message) => {
                writer.write_all(format!("{}\n", message).as_bytes()).await?;
            }
            Reply::Exit(message) => {
                writer.write_all(format!("{}\n", message).as_bytes()).await?;
                break;
            }
        }
    }

    writer.flush().await?;
    Ok(assistant)
}

/// Run the command loop over stdin/stdout.
pub async fn run_assistant(assistant: Assistant) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    run_session(assistant, stdin, tokio::io::stdout()).await?;
    Ok(())
}
