//! Static website export.
//!
//! Renders one grid item per movie and substitutes the result into an HTML
//! template at a single placeholder token.

use std::path::PathBuf;

use tracing::{info, warn};

use moviedb_core::config::ExportConfig;
use moviedb_core::error::{MovieDbError, Result};
use moviedb_core::types::{Catalog, MovieRecord};

/// Token in the template replaced by the movie grid.
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

/// Template used when the configured template file does not exist.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/index_template.html");

/// Writes the catalog as a static HTML page.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    template_path: PathBuf,
    output_path: PathBuf,
}

impl HtmlExporter {
    pub fn new(template_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.template_path, &config.output_path)
    }

    /// Render the catalog and write it to the output path.
    ///
    /// Returns the path written.
    pub fn export(&self, catalog: &Catalog) -> Result<PathBuf> {
        let template = self.load_template()?;
        let html = render_page(&template, catalog);

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.output_path, html).map_err(|e| {
            MovieDbError::Export(format!(
                "failed to write {}: {}",
                self.output_path.display(),
                e
            ))
        })?;

        info!(
            path = %self.output_path.display(),
            movies = catalog.len(),
            "Website generated"
        );
        Ok(self.output_path.clone())
    }

    fn load_template(&self) -> Result<String> {
        match std::fs::read_to_string(&self.template_path) {
            Ok(template) => Ok(template),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    path = %self.template_path.display(),
                    "Template not found, using built-in template"
                );
                Ok(DEFAULT_TEMPLATE.to_string())
            }
            Err(e) => Err(MovieDbError::Export(format!(
                "failed to read {}: {}",
                self.template_path.display(),
                e
            ))),
        }
    }
}

/// Substitute the rendered grid into `template`.
pub fn render_page(template: &str, catalog: &Catalog) -> String {
    template.replace(GRID_PLACEHOLDER, &render_grid(catalog))
}

/// One `<li>` per movie, newline separated, in catalog order. Values are
/// inserted as-is.
pub fn render_grid(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_item(movie: &MovieRecord) -> String {
    let poster = movie.poster_url.as_deref().unwrap_or("");
    format!(
        r#"<li>
  <div class="movie">
    <img class="movie-poster" src="{poster}" alt="Poster for {title}">
    <p class="movie-title">{title}</p>
    <p class="movie-year">{year}</p>
  </div>
</li>"#,
        poster = poster,
        title = movie.title,
        year = movie.release_year,
    )
}
