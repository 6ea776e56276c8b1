use maud::{DOCTYPE, Markup, html};

use crate::models::{MAX_STARS, Movie};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const DATASTAR_CDN: &str =
    "https://cdn.jsdelivr.net/gh/starfederation/datastar@1.0.0-RC.5/bundles/datastar.js";

pub const LIST_ID: &str = "movie-list";

pub fn entry_id(movie: &Movie) -> String {
    format!("movie-{}", movie.id)
}

pub fn panel_id(movie: &Movie) -> String {
    format!("panel-{}", movie.id)
}

pub fn index_page() -> String {
    page(
        "Movie catalog",
        html! {
            div class="min-h-screen bg-gray-900 text-gray-100" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold" { "Movie catalog" }
                    p class="mt-2 text-gray-400" { "Search by title, tagline, overview or genre." }

                    form class="mt-8 flex gap-3" method="get" action="/search" data-on:submit__prevent="@get('/search')" {
                        input class="flex-1 rounded-md border border-gray-600 bg-gray-800 px-3 py-2 focus:border-yellow-400 focus:outline-none" type="search" name="q" id="query" placeholder="Search movies" autocomplete="off" data-bind:query;
                        button class="rounded-md bg-yellow-500 px-4 py-2 font-semibold text-gray-900 hover:bg-yellow-400" type="submit" { "Search" }
                    }

                    (list(&[]))
                }
            }
        },
    )
}

/// Renders the complete list container for `movies`, replacing whatever the
/// page showed before.
pub fn list_fragment(movies: &[&Movie]) -> String {
    list(movies).into_string()
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-900 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-gray-800 shadow rounded-lg p-8 text-gray-100" {
                        h1 class="text-2xl font-bold" { "Error" }
                        p class="mt-4 text-gray-300" { (message) }
                        a class="mt-6 inline-block text-yellow-400 hover:text-yellow-300" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
                script type="module" src=(DATASTAR_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn list(movies: &[&Movie]) -> Markup {
    html! {
        ul id=(LIST_ID) class="mt-8 space-y-2" {
            @for movie in movies {
                (movie_entry(movie))
            }
        }
    }
}

fn movie_entry(movie: &Movie) -> Markup {
    html! {
        li id=(entry_id(movie)) class="rounded-lg bg-gray-800" {
            details id=(panel_id(movie)) class="group" {
                summary class="cursor-pointer list-none px-4 py-3 hover:bg-gray-700 rounded-lg" {
                    div class="flex w-full justify-between gap-4" {
                        h5 class="font-bold" { (movie.title) }
                        (stars(movie.stars()))
                    }
                    @if !movie.tagline.is_empty() {
                        p class="text-sm italic text-gray-400" { (movie.tagline) }
                    }
                }

                div class="border-t border-gray-700 px-4 py-4" {
                    p class="text-sm text-gray-400" { (movie.genre_names(" - ")) }
                    p class="mt-3" { (movie.overview) }
                    dl class="mt-4 grid grid-cols-2 gap-x-6 gap-y-1 text-sm" {
                        dt { "Year:" }
                        dd class="text-right" { (or_na(movie.release_year())) }
                        dt { "Runtime:" }
                        dd class="text-right" { (or_na(movie.runtime.map(|m| format!("{m} mins")))) }
                        dt { "Budget:" }
                        dd class="text-right" { (format_money(movie.budget)) }
                        dt { "Revenue:" }
                        dd class="text-right" { (format_money(movie.revenue)) }
                    }
                }
            }
        }
    }
}

fn stars(filled: u8) -> Markup {
    let filled = filled.min(MAX_STARS);
    html! {
        span class="text-yellow-400 whitespace-nowrap" title=(format!("{filled} of {MAX_STARS}")) {
            @for _ in 0..filled {
                span class="star-filled" { "★" }
            }
            @for _ in filled..MAX_STARS {
                span class="star-empty" { "☆" }
            }
        }
    }
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

fn format_money(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
