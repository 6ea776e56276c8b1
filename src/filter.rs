use crate::models::Movie;

const GENRE_SEPARATOR: &str = ", ";

/// Returns the records whose title, tagline, overview or joined genre names
/// contain `query`, ignoring case. Input order is kept.
pub fn filter<'a>(query: &str, records: &'a [Movie]) -> Vec<&'a Movie> {
    let needle = query.to_lowercase();
    records.iter().filter(|movie| matches(movie, &needle)).collect()
}

fn matches(movie: &Movie, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle)
        || movie.tagline.to_lowercase().contains(needle)
        || movie.overview.to_lowercase().contains(needle)
        || movie.genre_names(GENRE_SEPARATOR).to_lowercase().contains(needle)
}
