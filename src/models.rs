use serde::{Deserialize, Serialize};

/// One entry of a title search, as returned under `Search`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Year", default)]
    pub year: String,
}

/// Full record returned by an identifier lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct MovieDetail {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Director", default)]
    pub director: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_reads_provider_field_names() {
        let raw = json!({
            "Title": "Batman Begins",
            "Year": "2005",
            "imdbID": "tt0372784",
            "Type": "movie",
            "Poster": "https://m.media-amazon.com/images/batman.jpg"
        });
        let summary: MovieSummary = serde_json::from_value(raw).unwrap();
        assert_eq!(summary.imdb_id, "tt0372784");
        assert_eq!(summary.title, "Batman Begins");
        assert_eq!(summary.year, "2005");
        assert_eq!(
            summary.poster,
            "https://m.media-amazon.com/images/batman.jpg"
        );
    }

    #[test]
    fn summary_without_title_still_parses() {
        let raw = json!({ "imdbID": "tt0000001", "Year": "1894" });
        let summary: MovieSummary = serde_json::from_value(raw).unwrap();
        assert_eq!(summary.imdb_id, "tt0000001");
        assert!(summary.title.is_empty());
    }

    #[test]
    fn detail_ignores_extra_fields_and_defaults_missing_ones() {
        let raw = json!({
            "Title": "Guardians of the Galaxy Vol. 2",
            "Year": "2017",
            "Released": "05 May 2017",
            "Runtime": "136 min",
            "Genre": "Action, Adventure, Comedy",
            "Director": "James Gunn",
            "Actors": "Chris Pratt, Zoe Saldana, Dave Bautista",
            "Plot": "The Guardians struggle to keep together as a team.",
            "Metascore": "67",
            "imdbRating": "7.6",
            "imdbID": "tt3896198",
            "Response": "True"
        });
        let detail: MovieDetail = serde_json::from_value(raw).unwrap();
        assert_eq!(detail.imdb_id, "tt3896198");
        assert_eq!(detail.runtime, "136 min");
        assert_eq!(detail.imdb_rating, "7.6");
        assert_eq!(detail.director, "James Gunn");
        assert!(detail.poster.is_empty());
    }
}
