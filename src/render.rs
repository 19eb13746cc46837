//! 端末向けテキスト描画

use movie_lookup_common::{toggle_label, DetailView, Movie, NOT_FOUND_MESSAGE};

pub fn render(view: &DetailView) -> String {
    match view {
        DetailView::Loading => "Loading...".to_string(),
        DetailView::Error(message) => format!("Error: {}", message),
        DetailView::NotFound => NOT_FOUND_MESSAGE.to_string(),
        DetailView::Details { movie, is_favorite } => render_details(movie, *is_favorite),
    }
}

fn render_details(movie: &Movie, is_favorite: bool) -> String {
    let mut lines = vec![
        movie.title.clone(),
        format!("Poster: {}", movie.poster),
        format!("Genre: {}", movie.genre),
        format!("Year: {}", movie.year),
        format!("Director: {}", movie.director),
        format!("Actors: {}", movie.actors),
        format!("Plot: {}", movie.plot),
        format!("Language: {}", movie.language),
        format!("Awards: {}", movie.awards),
    ];

    if !movie.ratings.is_empty() {
        lines.push("Ratings:".to_string());
        for rating in &movie.ratings {
            lines.push(format!("  - {}: {}", rating.source, rating.value));
        }
    }

    lines.push(format!("imdbRating: {} (IMDb)", movie.imdb_rating));
    lines.push(format!("[{}]", toggle_label(is_favorite)));
    lines.join("\n")
}

/// お気に入り一覧
pub fn render_favorites(items: &[Movie]) -> String {
    if items.is_empty() {
        return "お気に入りはありません".to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{:>3}. {} ({}) [{}]", i + 1, m.title, m.year, m.imdb_id))
        .collect::<Vec<_>>()
        .join("\n")
}
