//! Search command implementation

use anyhow::Result;
use bookfinder_core::{
    cover_image_url, detail_url, Book, CoverSize, OpenLibraryClient, SearchController, SortKey,
    Transition,
};

/// Render one book the way the reference card does, defaults included
fn print_book(book: &Book) {
    println!("{}", book.title.as_deref().unwrap_or("Untitled"));

    let authors = if book.author_names.is_empty() {
        "Unknown Author".to_string()
    } else {
        book.author_names.join(", ")
    };
    println!("  by {}", authors);

    let year = book
        .first_publish_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let languages = if book.languages.is_empty() {
        "Unknown".to_string()
    } else {
        book.languages.join(", ").to_uppercase()
    };
    println!("  Year: {} | Language: {}", year, languages);

    if let Some(key) = &book.key {
        println!("  {}", detail_url(key));
    }
    if let Some(cover) = cover_image_url(book.cover_id, CoverSize::default()) {
        println!("  Cover: {}", cover);
    }
}

/// Run one search and render the requested page of the derived view
pub async fn search(
    query: &str,
    sort: SortKey,
    language: Option<&str>,
    page: usize,
    json: bool,
) -> Result<()> {
    let mut controller = SearchController::new(OpenLibraryClient::new());

    controller.apply(Transition::SetSort(sort));
    if let Some(code) = language {
        controller.apply(Transition::SetFilter(code.to_string()));
    }

    controller.search(query).await;

    // The search reset the page to 1; move to the requested page afterwards
    // (SetPage clamps to the valid range)
    controller.apply(Transition::SetPage(page));

    let view = controller.derived();
    tracing::debug!(
        page = view.page,
        total_pages = view.total_pages,
        matches = view.total_matches,
        "rendering derived view"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.books.is_empty() {
        println!("No books found for \"{}\"", query.trim());
        return Ok(());
    }

    for book in &view.books {
        print_book(book);
        println!();
    }
    println!(
        "Page {} of {} ({} matches)",
        view.page, view.total_pages, view.total_matches
    );

    Ok(())
}
