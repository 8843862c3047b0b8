use maud::{DOCTYPE, Markup, html};

use crate::models::Movie;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn index_page(movies: &[Movie]) -> String {
    page(
        "My Movies",
        html! {
            div class="flex items-center justify-between" {
                h1 class="text-3xl font-bold text-gray-900" { "My Movies" }
                a href="/movies/new" { button class=(BUTTON_CLASS) type="button" { "Add A New Movie" } }
            }

            @if movies.is_empty() {
                div class="mt-10 bg-white shadow rounded-lg p-8" {
                    p class="text-gray-600" { "No movies yet." }
                }
            } @else {
                div class="mt-10 grid gap-6 sm:grid-cols-2 md:grid-cols-3" {
                    @for movie in movies {
                        article class="bg-white shadow rounded-lg p-4" {
                            img class="w-full rounded" src=(movie.fields.poster) alt="";
                            a class="mt-3 block hover:text-blue-700" href=(movie_path(movie)) {
                                h2 class="text-xl font-semibold" { (movie.fields.title) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn new_page() -> String {
    page(
        "New Movie",
        html! {
            h1 class="text-3xl font-bold text-gray-900" { "Add A New Movie" }
            (movie_form("/movies", None, "Create Movie"))
        },
    )
}

pub fn edit_page(movie: &Movie) -> String {
    page(
        &format!("Edit {}", movie.fields.title),
        html! {
            h1 class="text-3xl font-bold text-gray-900" { "Edit " (movie.fields.title) }
            (movie_form(&format!("{}?_method=PUT", movie_path(movie)), Some(movie), "Update Movie"))
        },
    )
}

pub fn show_page(movie: &Movie) -> String {
    let fields = &movie.fields;
    page(
        &fields.title,
        html! {
            div class="bg-white shadow rounded-lg p-8 md:flex md:gap-8" {
                img class="w-56 rounded" src=(fields.poster) alt=(fields.title);
                div class="mt-6 md:mt-0" {
                    h1 class="text-3xl font-bold text-gray-900" { (fields.title) }
                    dl class="mt-4 grid grid-cols-2 gap-x-6 gap-y-2 text-gray-700" {
                        dt class="font-medium" { "Director" }
                        dd { (fields.director) }
                        @if let Some(release_date) = &fields.release_date {
                            dt class="font-medium" { "Released" }
                            dd { (release_date) }
                        }
                        @if let Some(length) = fields.length {
                            dt class="font-medium" { "Length" }
                            dd { (length) " min" }
                        }
                        @if let Some(genre) = &fields.genre {
                            dt class="font-medium" { "Genre" }
                            dd { (genre) }
                        }
                        @if let Some(rating) = &fields.rating {
                            dt class="font-medium" { "Rating" }
                            dd { (rating) }
                        }
                        dt class="font-medium" { "Watch again" }
                        dd { @if fields.watch_again { "Yes" } @else { "No" } }
                    }

                    @if !fields.cast.is_empty() {
                        h2 class="mt-6 text-lg font-semibold text-gray-900" { "Cast" }
                        ul class="mt-2 list-disc pl-5 text-gray-700" {
                            @for member in &fields.cast {
                                li { (member) }
                            }
                        }
                    }

                    div class="mt-8 flex gap-4" {
                        a class="text-blue-600 hover:text-blue-800" href="/movies" { "Back" }
                        a class="text-blue-600 hover:text-blue-800" href=(format!("{}/edit", movie_path(movie))) { "Edit" }
                        form method="post" action=(format!("{}?_method=DELETE", movie_path(movie))) {
                            button class="text-red-600 hover:text-red-800" type="submit" { "Delete" }
                        }
                    }
                }
            }
        },
    )
}

fn movie_form(action: &str, movie: Option<&Movie>, submit: &str) -> Markup {
    let fields = movie.map(|m| &m.fields);
    let title = fields.map(|f| f.title.as_str());
    let release_date = fields.and_then(|f| f.release_date.as_deref());
    let genre = fields.and_then(|f| f.genre.as_deref());
    let poster = fields.map(|f| f.poster.as_str());
    let director = fields.map(|f| f.director.as_str());
    let rating = fields.and_then(|f| f.rating.as_deref());
    let cast = fields.map(|f| f.cast.join(","));

    html! {
        form class="mt-8 space-y-4 bg-white shadow rounded-lg p-8" method="post" action=(action) {
            (text_input("Title", "title", title, true))
            (text_input("Release date", "releaseDate", release_date, false))
            div {
                label class="block text-sm font-medium text-gray-700" for="length" { "Length (minutes)" }
                input class=(INPUT_CLASS) type="number" min="0" step="any" name="length" id="length" value=[fields.and_then(|f| f.length)];
            }
            (text_input("Genre", "genre", genre, false))
            (text_input("Poster URL", "poster", poster, true))
            (text_input("Director", "director", director, true))
            (text_input("Rating", "rating", rating, false))
            (text_input("Cast (comma separated)", "cast", cast.as_deref(), false))
            div class="flex items-center gap-2" {
                input type="checkbox" name="watchAgain" id="watchAgain" checked[fields.is_some_and(|f| f.watch_again)];
                label class="text-sm font-medium text-gray-700" for="watchAgain" { "Watch again" }
            }
            button class=(BUTTON_CLASS) type="submit" { (submit) }
        }
    }
}

fn text_input(label: &str, name: &str, value: Option<&str>, required: bool) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            input class=(INPUT_CLASS) type="text" name=(name) id=(name) value=[value] required[required];
        }
    }
}

fn movie_path(movie: &Movie) -> String {
    format!("/movies/{}", movie.id)
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
                link rel="stylesheet" href="/styles.css";
            }
            body class="min-h-screen bg-gray-50" {
                main class="max-w-4xl mx-auto px-6 py-12" { (body) }
            }
        }
    }
    .into_string()
}
