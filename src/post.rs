//! Defines the raw Ghost export records, the derived [`Article`] type, and
//! the editorial filter/sort that turns one into the other. See
//! [`select_articles`] for the full selection contract.

use serde::Deserialize;

/// The earliest `published_at` admitted into the edition. Ghost timestamps
/// are ISO-8601, so a plain lexicographic comparison against a `YYYY-MM-DD`
/// prefix orders chronologically.
pub const CUTOFF_DATE: &str = "2026-02-13";

/// Posts carrying this tag are newsletter issues, not stories.
const EXCLUDED_TAG: &str = "Newsletter";

/// Tags ranked here order the edition; local coverage floats to the top and
/// state politics sinks to the bottom. Articles whose tags rank nowhere get
/// [`DEFAULT_PRIORITY`].
const TAG_PRIORITY: &[(&str, u8)] = &[
    ("Weather", 1),
    ("Forest Grove", 2),
    ("Community", 3),
    ("Education", 4),
    ("Crime", 5),
    ("Recreation", 6),
    ("History", 7),
    ("Government", 8),
    ("Politics", 9),
];

const DEFAULT_PRIORITY: u8 = 5;

/// One author record as exported by Ghost. Only the name is used.
#[derive(Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub name: Option<String>,
}

/// One tag record as exported by Ghost.
#[derive(Deserialize)]
pub struct RawTag {
    pub name: String,
}

/// One post record as exported by Ghost. `title`, `slug`, and
/// `published_at` are required; a document missing any of them fails to
/// deserialize, which aborts the whole run before any output is written.
/// Everything else defaults to absent/zero.
#[derive(Deserialize)]
pub struct RawPost {
    pub title: String,
    pub slug: String,
    pub published_at: String,

    #[serde(default)]
    pub html: Option<String>,

    #[serde(default)]
    pub custom_excerpt: Option<String>,

    #[serde(default)]
    pub feature_image: Option<String>,

    #[serde(default)]
    pub feature_image_caption: Option<String>,

    #[serde(default)]
    pub authors: Vec<RawAuthor>,

    #[serde(default)]
    pub tags: Vec<RawTag>,

    #[serde(default)]
    pub reading_time: u32,
}

/// One published story after filtering, ready for rendering. Built once per
/// run and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub title: String,
    pub slug: String,

    /// The story content as Ghost-flavored HTML.
    pub body: String,

    /// The deck shown under the headline, when the editor wrote one.
    pub excerpt: Option<String>,

    pub hero_image: Option<String>,
    pub hero_caption: Option<String>,

    /// The first author's name, or `"Unknown"` when the export carries no
    /// usable author record.
    pub author: String,

    /// Publish date in `YYYY-MM-DD` form.
    pub date: String,

    /// Category labels in source order, with `#`-prefixed internal tags
    /// already stripped.
    pub tags: Vec<String>,

    pub reading_time: u32,
}

impl Article {
    /// Converts a raw post into an [`Article`], or `None` when the post is
    /// excluded from the edition (newsletter issues and anything published
    /// before [`CUTOFF_DATE`]).
    fn from_raw(post: RawPost) -> Option<Article> {
        let tags: Vec<String> = post
            .tags
            .into_iter()
            .map(|t| t.name)
            .filter(|name| !name.starts_with('#'))
            .collect();

        if tags.iter().any(|t| t == EXCLUDED_TAG) {
            return None;
        }
        if post.published_at.as_str() < CUTOFF_DATE {
            return None;
        }

        Some(Article {
            title: post.title,
            slug: post.slug,
            body: post.html.unwrap_or_default(),
            excerpt: post.custom_excerpt.filter(|e| !e.is_empty()),
            hero_image: post.feature_image.filter(|i| !i.is_empty()),
            hero_caption: post.feature_image_caption.filter(|c| !c.is_empty()),
            author: post
                .authors
                .into_iter()
                .next()
                .and_then(|a| a.name)
                .unwrap_or_else(|| String::from("Unknown")),
            date: post.published_at.chars().take(10).collect(),
            tags,
            reading_time: post.reading_time,
        })
    }

    /// The article's sort rank: the priority of the first tag (in source
    /// order) that appears in [`TAG_PRIORITY`].
    fn priority(&self) -> u8 {
        for tag in &self.tags {
            if let Some((_, rank)) = TAG_PRIORITY.iter().find(|(name, _)| *name == tag.as_str()) {
                return *rank;
            }
        }
        DEFAULT_PRIORITY
    }
}

/// Filters the raw export down to the stories that belong in the edition
/// and orders them by editorial priority. The sort is stable, so posts with
/// equal priority keep their export order.
pub fn select_articles(posts: Vec<RawPost>) -> Vec<Article> {
    let mut articles: Vec<Article> = posts.into_iter().filter_map(Article::from_raw).collect();
    articles.sort_by_key(Article::priority);
    articles
}
