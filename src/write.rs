//! Responsible for assembling rendered story blocks into the edition page
//! and writing it to disk. The page chrome (masthead, nav, calendar,
//! crossword, footer) lives in the gtmpl template; this module fills in
//! the dynamic pieces.

use crate::events;
use crate::post::Article;
use crate::render::{render_story, tag_label, RenderedStory};
use chrono::NaiveDate;
use gtmpl::{Template, Value};
use std::fmt;
use std::io;
use std::path::Path;
use url::Url;

/// Separator placed between stories within a section.
const STORY_RULE: &str = "\n      <hr class=\"story-rule\">\n";

/// Story titles are truncated to this many characters in the run summary.
const SUMMARY_TITLE_CHARS: usize = 60;

/// Writes the edition page to disk from a list of filtered [`Article`]s.
pub struct Writer<'a> {
    /// The template for the edition page.
    pub page_template: &'a Template,

    /// The site's base URL, used for canonical story links and the events
    /// app.
    pub site_url: &'a Url,

    /// The date printed on the masthead.
    pub edition_date: NaiveDate,

    /// The output path for the edition page.
    pub output_file: &'a Path,
}

/// What the run did, for the post-build summary: the final story order
/// (category label plus truncated title) and how many stories received
/// each text treatment.
pub struct EditionStats {
    pub order: Vec<(String, String)>,
    pub pull_quotes: usize,
    pub drop_caps: usize,
}

impl EditionStats {
    fn record(&mut self, story: &RenderedStory) {
        self.pull_quotes += usize::from(story.has_pull_quote);
        self.drop_caps += usize::from(story.has_drop_cap);
    }
}

impl Writer<'_> {
    /// Renders every article, lays the blocks into the fixed editorial
    /// structure (lead story, then two halves separated by the section
    /// divider), executes the page template, and writes the result to
    /// disk. Returns the stats for the run summary.
    pub fn write_edition(&self, articles: &[Article]) -> Result<EditionStats> {
        let (lead, rest) = match articles.split_first() {
            Some(split) => split,
            None => return Err(Error::EmptyEdition),
        };

        let mut stats = EditionStats {
            order: Vec::with_capacity(articles.len()),
            pull_quotes: 0,
            drop_caps: 0,
        };
        for article in articles {
            stats.order.push((
                tag_label(&article.tags).to_owned(),
                article.title.chars().take(SUMMARY_TITLE_CHARS).collect(),
            ));
        }

        let lead_story = render_story(lead, self.site_url, true);
        stats.record(&lead_story);

        let (first_half, second_half) = halves(rest);
        let first_half_html = self.render_section(first_half, &mut stats);
        let second_half_html = self.render_section(second_half, &mut stats);

        let mut index_items = String::new();
        for article in articles {
            index_items.push_str(&format!(
                "        <li><a href=\"#{}\">{}</a></li>\n",
                article.slug, article.title
            ));
        }

        let value = self.page_value(
            lead_story.html,
            first_half_html,
            second_half_html,
            index_items,
        );
        let context = gtmpl::Context::from(value).map_err(Error::Template)?;
        self.page_template
            .execute(&mut std::fs::File::create(self.output_file)?, &context)?;

        Ok(stats)
    }

    /// Renders one section's stories, separated by [`STORY_RULE`]s.
    fn render_section(&self, section: &[Article], stats: &mut EditionStats) -> String {
        let mut out = String::new();
        for (i, article) in section.iter().enumerate() {
            let story = render_story(article, self.site_url, false);
            stats.record(&story);
            out.push_str(&story.html);
            if i < section.len() - 1 {
                out.push_str(STORY_RULE);
            }
        }
        out
    }

    /// Builds the object handed to the page template.
    fn page_value(
        &self,
        lead: String,
        first_half: String,
        second_half: String,
        index_items: String,
    ) -> Value {
        use std::collections::HashMap;

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert(
            "edition_date".to_owned(),
            Value::String(self.edition_date.format("%B %-d, %Y").to_string()),
        );
        m.insert(
            "masthead_date".to_owned(),
            Value::String(self.edition_date.format("%A, %B %-d, %Y").to_string()),
        );
        m.insert(
            "home_page".to_owned(),
            Value::String(self.site_url.to_string()),
        );
        m.insert("index_items".to_owned(), Value::String(index_items));
        m.insert("lead".to_owned(), Value::String(lead));
        m.insert("first_half".to_owned(), Value::String(first_half));
        m.insert("second_half".to_owned(), Value::String(second_half));
        m.insert(
            "events".to_owned(),
            Value::String(events::render_calendar(self.site_url)),
        );
        Value::Object(m)
    }
}

/// Splits the non-lead stories into the two body sections. The first half
/// takes the floor of the midpoint, so an odd remainder lands in the
/// features section.
pub fn halves<T>(rest: &[T]) -> (&[T], &[T]) {
    rest.split_at(rest.len() / 2)
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// Returned when filtering left no stories to lead the edition with.
    EmptyEdition,

    /// An error during templating.
    Template(String),

    /// An error writing the output file.
    Io(io::Error),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`].
    /// This allows us to use the `?` operator for fallible template
    /// operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyEdition => {
                write!(f, "No stories survived filtering; nothing to lead with")
            }
            Error::Template(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::EmptyEdition => None,
            Error::Template(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn article(n: usize) -> Article {
        Article {
            title: format!("Story {}", n),
            slug: format!("story-{}", n),
            body: format!("<p>Body of story {}.</p>", n),
            excerpt: None,
            hero_image: None,
            hero_caption: None,
            author: String::from("Dana Reed"),
            date: String::from("2026-02-15"),
            tags: vec![String::from("Community")],
            reading_time: 2,
        }
    }

    fn writer<'a>(template: &'a Template, output_file: &'a Path, site_url: &'a Url) -> Writer<'a> {
        Writer {
            page_template: template,
            site_url,
            edition_date: NaiveDate::from_ymd_opt(2026, 2, 17).unwrap(),
            output_file,
        }
    }

    #[test]
    fn test_write_edition_assembles_sections() {
        let mut template = Template::default();
        template
            .parse("{{.index_items}}|{{.lead}}|{{.first_half}}|{{.second_half}}")
            .unwrap();
        let output_file = std::env::temp_dir().join("broadsheet-write-edition-test.html");
        let site_url = Url::parse("https://www.newsinthegrove.com/").unwrap();
        let writer = writer(&template, &output_file, &site_url);

        let articles: Vec<Article> = (1..=4).map(article).collect();
        let stats = writer.write_edition(&articles).unwrap();
        let page = std::fs::read_to_string(&output_file).unwrap();

        // 4 stories: lead, then rest of 3 split 1/2.
        assert_eq!(stats.order.len(), 4);
        assert_eq!(stats.order[0], (String::from("Community"), String::from("Story 1")));
        assert!(page.contains(r##"<li><a href="#story-1">Story 1</a></li>"##));
        assert!(page.contains(r#"id="story-2""#));
        // Only the two-story second half carries a rule between stories.
        assert_eq!(page.matches("story-rule").count(), 1);
        std::fs::remove_file(&output_file).unwrap();
    }

    #[test]
    fn test_write_edition_requires_a_lead() {
        let template = Template::default();
        let output_file = std::env::temp_dir().join("broadsheet-empty-edition-test.html");
        let site_url = Url::parse("https://www.newsinthegrove.com/").unwrap();
        let writer = writer(&template, &output_file, &site_url);
        assert!(matches!(
            writer.write_edition(&[]),
            Err(Error::EmptyEdition)
        ));
    }

    #[test]
    fn test_halves_splits_at_the_floor_midpoint() {
        let rest: Vec<u32> = (0..7).collect();
        let (first, second) = halves(&rest);
        assert_eq!(first, &[0, 1, 2]);
        assert_eq!(second, &[3, 4, 5, 6]);
    }

    #[test]
    fn test_halves_of_empty_and_single() {
        let empty: &[u32] = &[];
        assert_eq!(halves(empty), (empty, empty));
        let one = [9u32];
        let (first, second) = halves(&one);
        assert!(first.is_empty());
        assert_eq!(second, &[9]);
    }
}
