//! End-to-end menu sessions against a file-backed store, a mock lookup and a
//! temporary export directory.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use moviedb_app::{App, HtmlExporter};
use moviedb_core::lookup::MovieMetadata;
use moviedb_omdb::MockLookup;
use moviedb_storage::{CatalogStore, Database};

// =============================================================================
// Helpers
// =============================================================================

fn open_store(path: &Path) -> CatalogStore {
    CatalogStore::new(Arc::new(Database::open(path).unwrap()))
}

fn lookup() -> MockLookup {
    MockLookup::new()
        .with_movie(
            "Inception",
            MovieMetadata {
                title: Some("Inception".to_string()),
                year: Some(2010),
                rating: Some(8.8),
                poster_url: Some("http://x/p.jpg".to_string()),
            },
        )
        .with_movie(
            "Up",
            MovieMetadata {
                title: Some("Up".to_string()),
                year: Some(2009),
                rating: Some(8.3),
                poster_url: None,
            },
        )
}

async fn session(store: &CatalogStore, exporter: HtmlExporter, script: &str) -> String {
    let mut app = App::new(
        store.clone(),
        lookup(),
        exporter,
        Cursor::new(script.to_string()),
        Vec::new(),
    )
    .with_seed(7);
    app.run().await.unwrap();
    String::from_utf8(app.into_output()).unwrap()
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_add_stats_sort_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("movies.db"));
    let output = dir.path().join("site").join("index.html");
    let exporter = HtmlExporter::new(dir.path().join("no-template.html"), &output);

    let out = session(&store, exporter, "2\nInception\n2\nUp\n5\n8\n9\n0\n").await;

    assert!(out.contains("Movie 'Inception' added successfully."));
    assert!(out.contains("Movie 'Up' added successfully."));
    assert!(out.contains("Average Rating is 8.55"));
    assert!(out.contains("Best Movie is Inception"));
    assert!(out.contains("Worst Movie is Up"));
    assert!(out.contains("Website was generated successfully"));

    let catalog = store.list_all().unwrap();
    assert_eq!(catalog.titles(), vec!["Inception", "Up"]);
    assert_eq!(catalog.get("Up").unwrap().poster_url, None);

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains(r#"<img class="movie-poster" src="http://x/p.jpg" alt="Poster for Inception">"#));
    assert!(html.contains(r#"<p class="movie-title">Up</p>"#));
    assert!(!html.contains("__TEMPLATE_MOVIE_GRID__"));
}

#[tokio::test]
async fn test_catalog_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("movies.db");
    let exporter = HtmlExporter::new(dir.path().join("t.html"), dir.path().join("i.html"));

    let store = open_store(&db_path);
    session(&store, exporter.clone(), "2\nUp\n4\nUp\n7.25\n0\n").await;
    store.close().unwrap();

    let store = open_store(&db_path);
    let out = session(&store, exporter, "1\n0\n").await;
    assert!(out.contains("1 movies in total"));
    assert!(out.contains("Up (2009): 7.25"));
}

#[tokio::test]
async fn test_export_empty_catalog_with_custom_template() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("movies.db"));
    let template = dir.path().join("index_template.html");
    std::fs::write(&template, "<ul>__TEMPLATE_MOVIE_GRID__</ul>").unwrap();
    let output = dir.path().join("index.html");

    let out = session(&store, HtmlExporter::new(&template, &output), "9\n0\n").await;

    assert!(!out.contains("Error:"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "<ul></ul>");
}

#[tokio::test]
async fn test_unknown_title_leaves_catalog_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir.path().join("movies.db"));
    let exporter = HtmlExporter::new(dir.path().join("t.html"), dir.path().join("i.html"));

    let out = session(&store, exporter, "2\nThe Room 2\n1\n0\n").await;

    assert!(out.contains("Movie 'The Room 2' was not found in OMDb."));
    assert!(out.contains("0 movies in total"));
    assert_eq!(store.count().unwrap(), 0);
}
