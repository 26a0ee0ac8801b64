//! The interactive menu loop.
//!
//! `App` owns the store, the metadata lookup and the exporter, reads choices
//! from any `BufRead` and prints to any `Write`, so the whole loop can be
//! driven from tests with scripted input. Every handler error is printed and
//! the loop continues.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use moviedb_core::catalog;
use moviedb_core::error::{MovieDbError, Result};
use moviedb_core::lookup::{LookupOutcome, MetadataLookup};
use moviedb_core::types::MovieRecord;
use moviedb_core::validate::{parse_rating, require_non_empty};
use moviedb_storage::CatalogStore;

use crate::export::HtmlExporter;
use crate::menu::{MenuChoice, MENU_TEXT};

const GREETING: &str = "********** My Movies Database **********";

pub struct App<L, R, W> {
    store: CatalogStore,
    lookup: L,
    exporter: HtmlExporter,
    input: R,
    output: W,
    rng: StdRng,
}

impl<L, R, W> App<L, R, W>
where
    L: MetadataLookup,
    R: BufRead,
    W: Write,
{
    pub fn new(store: CatalogStore, lookup: L, exporter: HtmlExporter, input: R, output: W) -> Self {
        Self {
            store,
            lookup,
            exporter,
            input,
            output,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed for the random pick.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit or input ends.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{GREETING}")?;

        loop {
            writeln!(self.output, "\n{MENU_TEXT}\n")?;
            let Some(line) = self.prompt("Enter choice (0-9): ")? else {
                writeln!(self.output)?;
                writeln!(self.output, "Bye!")?;
                return Ok(());
            };
            writeln!(self.output)?;

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Bye!")?;
                return Ok(());
            }

            debug!(%choice, "Menu choice");
            if let Err(e) = self.dispatch(choice).await {
                warn!(%choice, error = %e, "Menu action failed");
                writeln!(self.output, "Error: {e}")?;
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Exit => Ok(()),
            MenuChoice::List => self.list_movies(),
            MenuChoice::Add => self.add_movie().await,
            MenuChoice::Delete => self.delete_movie(),
            MenuChoice::Update => self.update_movie(),
            MenuChoice::Stats => self.show_stats(),
            MenuChoice::Random => self.random_movie(),
            MenuChoice::Search => self.search_movies(),
            MenuChoice::SortByRating => self.sorted_movies(),
            MenuChoice::Export => self.generate_website(),
        }
    }

    fn list_movies(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let movies: Vec<&MovieRecord> = catalog.iter().collect();
        self.print_movies(&movies)
    }

    async fn add_movie(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let Some(title) = self.prompt_non_empty("Give me the movie's name: ", "Movie name")? else {
            return Ok(());
        };

        if catalog.contains(&title) {
            writeln!(self.output, "Movie already exists!")?;
            return Ok(());
        }

        let metadata = match self.lookup.fetch(&title).await {
            Ok(LookupOutcome::Found(metadata)) if !metadata.is_empty() => metadata,
            Ok(_) => {
                writeln!(self.output, "Movie '{title}' was not found in OMDb.")?;
                return Ok(());
            }
            Err(MovieDbError::LookupUnavailable(reason)) => {
                warn!(%title, %reason, "Metadata lookup failed");
                writeln!(self.output, "Could not reach OMDb: {reason}")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let movie = metadata.into_record(&title);
        self.store.insert(&movie)?;
        writeln!(self.output, "Movie '{}' added successfully.", movie.title)?;

        writeln!(self.output, "\nUpdated Movie List:")?;
        self.list_movies()
    }

    fn delete_movie(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let Some(title) = self.prompt_non_empty(
            "Give me the name of the movie you want to delete: ",
            "Movie name",
        )?
        else {
            return Ok(());
        };

        if catalog.contains(&title) {
            self.store.delete_by_title_pattern(&title)?;
            writeln!(self.output, "Movie '{title}' deleted successfully.")?;
        } else {
            writeln!(self.output, "Movie not found.")?;
        }

        self.list_movies()
    }

    fn update_movie(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let Some(title) =
            self.prompt_non_empty("Which movie do you want to update? ", "Movie name")?
        else {
            return Ok(());
        };

        if !catalog.contains(&title) {
            writeln!(self.output, "Movie not found.")?;
            return Ok(());
        }

        let rating = loop {
            let Some(line) = self.prompt("What is the updated rating? ")? else {
                return Ok(());
            };
            match parse_rating(&line) {
                Ok(rating) => break rating,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        };

        if self.store.update_rating(&title, rating)? == 0 {
            return Err(MovieDbError::NotFound { title });
        }
        writeln!(self.output, "Movie '{title}' was updated successfully.")?;
        Ok(())
    }

    fn show_stats(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let Some(stats) = catalog::stats(&catalog) else {
            writeln!(self.output, "No movies in the catalog.")?;
            return Ok(());
        };

        writeln!(self.output, "Average Rating is {:.2}", stats.average)?;
        writeln!(
            self.output,
            "Best Movie is {} ({})",
            stats.best.title, stats.best.rating
        )?;
        writeln!(
            self.output,
            "Worst Movie is {} ({})",
            stats.worst.title, stats.worst.rating
        )?;
        Ok(())
    }

    fn random_movie(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        match catalog::random_movie(&catalog, &mut self.rng) {
            Some(movie) => writeln!(self.output, "{movie}")?,
            None => writeln!(self.output, "No movies in the catalog.")?,
        }
        Ok(())
    }

    fn search_movies(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let Some(term) =
            self.prompt_non_empty("What movie are you searching for? ", "Search term")?
        else {
            return Ok(());
        };

        let found = catalog::search(&catalog, &term);
        if found.is_empty() {
            writeln!(self.output, "No movie was found")?;
        }
        for movie in found {
            writeln!(self.output, "{movie}")?;
        }
        Ok(())
    }

    fn sorted_movies(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let sorted = catalog::sorted_by_rating_desc(&catalog);
        self.print_movies(&sorted)
    }

    fn generate_website(&mut self) -> Result<()> {
        let catalog = self.store.list_all()?;
        let path = self.exporter.export(&catalog)?;
        writeln!(
            self.output,
            "Website was generated successfully: {}",
            path.display()
        )?;
        Ok(())
    }

    fn print_movies(&mut self, movies: &[&MovieRecord]) -> Result<()> {
        writeln!(self.output, "{} movies in total\n", movies.len())?;
        for movie in movies {
            writeln!(self.output, "{movie}")?;
        }
        Ok(())
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until a non-blank answer is given. `None` at end of input.
    fn prompt_non_empty(&mut self, message: &str, what: &str) -> Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match require_non_empty(&line, what) {
                Ok(value) => return Ok(Some(value.to_string())),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}
