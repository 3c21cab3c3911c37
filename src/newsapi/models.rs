use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

use crate::search;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Source {
    /// Upstream sends a string, null, or nothing at all
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Article {
    pub source: Source,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(serialize_with = "serialize_published_date")]
    pub published_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    pub fn published_date(&self) -> String {
        search::format_published_date(&self.published_at)
    }
}

/// Articles pass through serde once more on their way into the template
/// context, which is where the display format gets applied.
fn serialize_published_date<S>(
    date: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&search::format_published_date(date))
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Results {
    pub status: String,
    pub total_results: u32,
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "status": "ok",
        "totalResults": 45,
        "articles": [
            {
                "source": {"id": "the-example-times", "name": "The Example Times"},
                "author": "A. Reporter",
                "title": "First story",
                "description": "Something happened",
                "url": "https://example.com/first",
                "urlToImage": "https://example.com/first.jpg",
                "publishedAt": "2021-03-05T10:30:00Z",
                "content": "Lorem ipsum"
            },
            {
                "source": {"id": null, "name": "Wire Service"},
                "author": null,
                "title": "Second story",
                "description": null,
                "url": "https://example.com/second",
                "urlToImage": null,
                "publishedAt": "2021-01-01T00:30:00+02:00",
                "content": null
            },
            {
                "source": {"name": "No Id Daily"},
                "title": "Third story",
                "url": "https://example.com/third",
                "publishedAt": "2021-01-01T00:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn decodes_a_newsapi_payload() {
        let results: Results = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(results.status, "ok");
        assert_eq!(results.total_results, 45);

        // upstream ordering is kept as-is
        let titles: Vec<&str> = results
            .articles
            .iter()
            .map(|article| article.title.as_str())
            .collect();
        assert_eq!(titles, ["First story", "Second story", "Third story"]);

        assert_eq!(
            results.articles[0].source.id.as_deref(),
            Some("the-example-times")
        );
        assert_eq!(results.articles[1].source.id, None);
        assert_eq!(results.articles[2].source.id, None);
        assert_eq!(results.articles[1].author, None);
        assert_eq!(
            results.articles[0].url_to_image.as_deref(),
            Some("https://example.com/first.jpg")
        );
    }

    #[test]
    fn published_date_uses_the_timestamps_own_calendar_date() {
        let results: Results = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(results.articles[0].published_date(), "March 5, 2021");
        // the +02:00 offset is kept; in UTC this would still be 2020
        assert_eq!(results.articles[1].published_date(), "January 1, 2021");
    }

    #[test]
    fn serializes_the_display_date_for_templates() {
        let results: Results = serde_json::from_str(PAYLOAD).unwrap();
        let value = serde_json::to_value(&results.articles[0]).unwrap();

        assert_eq!(value["published_at"], "March 5, 2021");
        assert_eq!(value["url_to_image"], "https://example.com/first.jpg");
    }
}
