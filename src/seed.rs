use crate::models::MovieFields;

/// The demo collection loaded by `GET /movies/seed`.
pub fn starter_movies() -> Vec<MovieFields> {
    vec![
        MovieFields {
            title: "Matrix".to_string(),
            release_date: Some("1999".to_string()),
            length: Some(136.0),
            genre: Some("Sci-fi".to_string()),
            poster: "https://www.themoviedb.org/t/p/w220_and_h330_face/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
                .to_string(),
            director: "Lana, Lily Wasoki".to_string(),
            rating: Some("R".to_string()),
            watch_again: true,
            cast: cast(&["Keanu Reeves", "Lawerence Fishburne", "Carrie-Anne Moss"]),
        },
        MovieFields {
            title: "50 First Dates".to_string(),
            release_date: Some("2004".to_string()),
            length: Some(99.0),
            genre: Some("Comedy".to_string()),
            poster: "https://m.media-amazon.com/images/M/MV5BMjAwMzc4MDgxNF5BMl5BanBnXkFtZTYwNjUwMzE3._V1_FMjpg_UX1000_.jpg"
                .to_string(),
            director: "Peter Segal".to_string(),
            rating: Some("PG-13".to_string()),
            watch_again: true,
            cast: cast(&["Adam Sandler", "Drew Barrymore", "Rob Schneider"]),
        },
        MovieFields {
            title: "The Dark Knight".to_string(),
            release_date: Some("2008".to_string()),
            length: Some(152.0),
            genre: Some("Action/Superhero".to_string()),
            poster: "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_.jpg"
                .to_string(),
            director: "Christopher Nolan".to_string(),
            rating: Some("R".to_string()),
            watch_again: true,
            cast: cast(&["Christian Bale", "Aaron Eckhart"]),
        },
    ]
}

fn cast(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_movies_are_valid() {
        let movies = starter_movies();
        assert_eq!(movies.len(), 3);
        for movie in &movies {
            movie.validate().unwrap();
            assert!(movie.watch_again);
            assert!(!movie.cast.is_empty());
        }
    }
}
