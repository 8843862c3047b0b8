use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    entities::movie,
    error::{StoreError, StoreResult},
};

/// Store-generated key of a movie. Its textual form is a positive decimal integer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MovieId(pub i32);

impl FromStr for MovieId {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StoreError::InvalidId(raw.to_string()));
        }
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(StoreError::InvalidId(raw.to_string())),
        }
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A movie form submission exactly as the browser sent it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieForm {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub length: Option<String>,
    pub genre: Option<String>,
    pub poster: Option<String>,
    pub director: Option<String>,
    pub rating: Option<String>,
    pub watch_again: Option<String>,
    pub cast: Option<String>,
}

/// Every field of a movie except its id, in stored form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFields {
    pub title: String,
    pub release_date: Option<String>,
    pub length: Option<f64>,
    pub genre: Option<String>,
    pub poster: String,
    pub director: String,
    pub rating: Option<String>,
    pub watch_again: bool,
    pub cast: Vec<String>,
}

impl MovieFields {
    /// Normalizes a raw submission and checks the required fields.
    pub fn from_form(form: MovieForm) -> StoreResult<Self> {
        let length = parse_length(form.length.as_deref())?;
        let fields = Self {
            watch_again: normalize_watch_again(form.watch_again.as_deref()),
            cast: split_cast(form.cast.as_deref()),
            title: form.title.unwrap_or_default(),
            release_date: form.release_date,
            length,
            genre: form.genre,
            poster: form.poster.unwrap_or_default(),
            director: form.director.unwrap_or_default(),
            rating: form.rating,
        };
        fields.validate()?;
        Ok(fields)
    }

    pub fn validate(&self) -> StoreResult<()> {
        for (field, value) in
            [("title", &self.title), ("poster", &self.poster), ("director", &self.director)]
        {
            if value.is_empty() {
                return Err(StoreError::required(field));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(flatten)]
    pub fields: MovieFields,
}

impl From<movie::Model> for Movie {
    fn from(row: movie::Model) -> Self {
        Self {
            id: MovieId(row.id),
            fields: MovieFields {
                title: row.title,
                release_date: row.release_date,
                length: row.length,
                genre: row.genre,
                poster: row.poster,
                director: row.director,
                rating: row.rating,
                watch_again: row.watch_again,
                cast: cast_from_json(row.cast),
            },
        }
    }
}

/// A checkbox only ever submits "on"; anything else means unchecked.
pub fn normalize_watch_again(raw: Option<&str>) -> bool {
    raw == Some("on")
}

/// Splits on every comma, keeping surrounding whitespace and empty segments.
pub fn split_cast(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) => raw.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

fn cast_from_json(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Runtime in minutes. Blank means unknown; surrounding whitespace is ignored.
fn parse_length(raw: Option<&str>) -> StoreResult<Option<f64>> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(minutes) if minutes.is_finite() => Ok(Some(minutes)),
        _ => Err(StoreError::Validation {
            field: "length",
            reason: format!("must be a number of minutes, got {raw:?}"),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn matrix_form() -> MovieForm {
        MovieForm {
            title: Some("Matrix".to_string()),
            release_date: Some("1999".to_string()),
            length: Some("136".to_string()),
            genre: Some("Sci-fi".to_string()),
            poster: Some("https://example.com/matrix.jpg".to_string()),
            director: Some("Lana, Lily Wachowski".to_string()),
            rating: Some("R".to_string()),
            watch_again: Some("on".to_string()),
            cast: Some("Keanu Reeves,Carrie-Anne Moss".to_string()),
        }
    }

    #[test]
    fn test_watch_again_only_on_is_true() {
        assert!(normalize_watch_again(Some("on")));
        assert!(!normalize_watch_again(Some("off")));
        assert!(!normalize_watch_again(Some("ON")));
        assert!(!normalize_watch_again(Some("true")));
        assert!(!normalize_watch_again(None));
    }

    #[test]
    fn test_split_cast_is_literal() {
        assert_eq!(
            split_cast(Some("Keanu Reeves,Carrie-Anne Moss")),
            vec!["Keanu Reeves", "Carrie-Anne Moss"]
        );
        assert_eq!(split_cast(Some("A, B,")), vec!["A", " B", ""]);
        assert_eq!(split_cast(Some("")), vec![""]);
        assert!(split_cast(None).is_empty());
    }

    #[test]
    fn test_from_form_normalizes_matrix() {
        let fields = MovieFields::from_form(matrix_form()).unwrap();
        assert_eq!(fields.title, "Matrix");
        assert_eq!(fields.director, "Lana, Lily Wachowski");
        assert_eq!(fields.length, Some(136.0));
        assert!(fields.watch_again);
        assert_eq!(fields.cast, vec!["Keanu Reeves", "Carrie-Anne Moss"]);
    }

    #[test]
    fn test_from_form_rejects_missing_required_fields() {
        for field in ["title", "poster", "director"] {
            let mut form = matrix_form();
            match field {
                "title" => form.title = None,
                "poster" => form.poster = Some(String::new()),
                _ => form.director = None,
            }
            match MovieFields::from_form(form) {
                Err(StoreError::Validation { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_length_must_be_a_number() {
        let mut form = matrix_form();
        form.length = Some("two hours".to_string());
        assert!(matches!(
            MovieFields::from_form(form),
            Err(StoreError::Validation { field: "length", .. })
        ));

        let mut form = matrix_form();
        form.length = Some("NaN".to_string());
        assert!(MovieFields::from_form(form).is_err());

        for (raw, expected) in
            [("", None), ("   ", None), ("136.5", Some(136.5)), (" 136 ", Some(136.0))]
        {
            let mut form = matrix_form();
            form.length = Some(raw.to_string());
            assert_eq!(MovieFields::from_form(form).unwrap().length, expected, "{raw:?}");
        }
    }

    #[test]
    fn test_movie_id_parse() {
        assert_eq!("42".parse::<MovieId>().unwrap(), MovieId(42));
        for raw in ["", "0", "-1", "1.5", "abc", "65f1c2a9e4b0", "99999999999"] {
            assert!(
                matches!(raw.parse::<MovieId>(), Err(StoreError::InvalidId(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_movie_serializes_camel_case() {
        let movie = Movie { id: MovieId(7), fields: MovieFields::from_form(matrix_form()).unwrap() };
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["watchAgain"], true);
        assert_eq!(value["releaseDate"], "1999");
        assert_eq!(value["cast"][1], "Carrie-Anne Moss");
    }
}
