//! Interactive read loop
//!
//! Reads a line, cleans it, looks the first word up in the command registry
//! and runs the command with the remaining words as arguments. Pagination
//! state for `map`/`mapb` lives in the session.

mod commands;
mod input;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;

pub use commands::{lookup, Command, CommandSpec, COMMANDS};
pub use input::clean_input;

/// Prompt printed before every line
pub const PROMPT: &str = "Pokedex > ";

/// What the loop does after a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session writing its output to `W`.
pub struct Repl<W> {
    client: PokeApiClient,
    out: W,
    /// URL of the page `map` shows next; `None` before the first page
    next_url: Option<String>,
    /// URL of the page `mapb` shows next
    previous_url: Option<String>,
    /// Set once a page has been shown, so a missing `next` means "last page"
    paging_started: bool,
}

impl<W: Write> Repl<W> {
    /// Creates a session that queries through `client` and prints to `out`.
    pub fn new(client: PokeApiClient, out: W) -> Self {
        Self {
            client,
            out,
            next_url: None,
            previous_url: None,
            paging_started: false,
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// Command failures are reported to the user and the loop carries on;
    /// only failures to read input or write output end it early.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();

        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                // Ctrl-D
                writeln!(self.out)?;
                self.exit()?;
                return Ok(());
            };

            match self.execute(&line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(PokedexError::UnknownCommand(name)) => {
                    writeln!(self.out, "Unknown command: {name}")?;
                }
                Err(err @ PokedexError::Io(_)) => return Err(err),
                Err(err) => {
                    warn!(error = %err, "command failed");
                    writeln!(self.out, "Error executing command: {err}")?;
                }
            }
        }
    }

    /// Runs a single input line.
    pub async fn execute(&mut self, line: &str) -> Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let command = lookup(name).ok_or_else(|| PokedexError::UnknownCommand(name.clone()))?;
        debug!(command = %name, ?args, "dispatching");

        match command {
            Command::Exit => {
                self.exit()?;
                return Ok(Flow::Exit);
            }
            Command::Help => self.help()?,
            Command::Map => self.map().await?,
            Command::MapBack => self.map_back().await?,
            Command::Explore => self.explore(args).await?,
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.out, "Closing the Pokedex... Goodbye!")?;
        self.client.cache().stop();
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the Pokedex!")?;
        writeln!(self.out, "Usage:")?;
        writeln!(self.out)?;
        for spec in COMMANDS {
            writeln!(self.out, " {}: {}", spec.name, spec.description)?;
        }
        Ok(())
    }

    async fn map(&mut self) -> Result<()> {
        if self.paging_started && self.next_url.is_none() {
            return Err(PokedexError::NoNextPage);
        }
        let page = self.client.location_areas(self.next_url.as_deref()).await?;
        self.show_page(page)
    }

    async fn map_back(&mut self) -> Result<()> {
        let Some(url) = self.previous_url.as_deref() else {
            return Err(PokedexError::NoPreviousPage);
        };
        let page = self.client.location_areas(Some(url)).await?;
        self.show_page(page)
    }

    fn show_page(&mut self, page: LocationAreaPage) -> Result<()> {
        self.paging_started = true;
        self.next_url = page.next;
        self.previous_url = page.previous;

        for area in &page.results {
            writeln!(self.out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore(&mut self, args: &[String]) -> Result<()> {
        let area = args
            .first()
            .ok_or(PokedexError::MissingArgument("area name"))?;

        writeln!(self.out, "Exploring {area}...")?;
        let detail = self.client.location_area(area).await?;

        writeln!(self.out, "Found Pokemon:")?;
        for name in detail.pokemon_names() {
            writeln!(self.out, " - {name}")?;
        }
        Ok(())
    }
}
