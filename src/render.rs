//! Renders one [`Article`] into a self-contained HTML story block. Most
//! stories get the full treatment: body normalization, hero-image
//! deduplication, pull-quote extraction and insertion, and the drop-cap
//! check. Column content ([`STUB_TAG`]) renders as a compact stub that
//! links back to the canonical page on the site instead of carrying the
//! full body.

use crate::analyze;
use crate::post::Article;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Articles carrying this tag are long-form columns and render as stubs.
const STUB_TAG: &str = "History";

/// Display preference for the category badge. This is an editorial
/// ranking, deliberately different from the sort-priority table in
/// [`crate::post`].
const LABEL_PRIORITY: &[&str] = &[
    "Weather",
    "Forest Grove",
    "Education",
    "Crime",
    "Recreation",
    "History",
    "Community",
    "Government",
    "Politics",
];

/// Editor-inserted card markers stripped during body normalization.
const CARD_BEGIN: &str = "<!--kg-card-begin: html-->";
const CARD_END: &str = "<!--kg-card-end: html-->";

/// Inline-styled wrapper divs pasted in from word processors; collapsed to
/// plain `<div>` during normalization.
static STYLED_DIV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<div style="font-family:[^"]*"[^>]*>"#).unwrap());

/// One rendered story block plus which text treatments it received, so the
/// page assembler can report them without re-running the analysis.
pub struct RenderedStory {
    pub html: String,
    pub has_pull_quote: bool,
    pub has_drop_cap: bool,
}

/// Returns the single category label shown on the article's badge: the
/// first entry of [`LABEL_PRIORITY`] present in the article's tags, else
/// the article's own first tag, else the empty string.
pub fn tag_label(tags: &[String]) -> &str {
    for &name in LABEL_PRIORITY {
        if tags.iter().any(|tag| tag == name) {
            return name;
        }
    }
    tags.first().map(String::as_str).unwrap_or("")
}

/// Formats a `YYYY-MM-DD` date as e.g. `February 17, 2026`. Dates that
/// don't parse are shown as-is.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_owned(),
    }
}

/// Strips the upstream editor's card markers and collapses inline-styled
/// wrapper divs, leaving the story content itself untouched.
pub fn clean_body(html: &str) -> String {
    let html = html.replace(CARD_BEGIN, "").replace(CARD_END, "");
    STYLED_DIV.replace_all(&html, "<div>").trim().to_owned()
}

/// Renders one article as a story block, choosing between the stub and
/// full layouts. `is_lead` marks the issue's lead story.
pub fn render_story(article: &Article, site_url: &Url, is_lead: bool) -> RenderedStory {
    if article.tags.iter().any(|tag| tag == STUB_TAG) {
        RenderedStory {
            html: render_stub(article, site_url),
            has_pull_quote: false,
            has_drop_cap: false,
        }
    } else {
        render_full(article, is_lead)
    }
}

fn deck_html(article: &Article) -> String {
    match &article.excerpt {
        Some(excerpt) => format!(r#"<p class="deck">{}</p>"#, excerpt),
        None => String::new(),
    }
}

/// The compact layout for column content: category, title, optional deck,
/// optional hero image, byline, and a read-more link to the canonical page.
fn render_stub(article: &Article, site_url: &Url) -> String {
    let img_html = match &article.hero_image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            src, article.title
        ),
        None => String::new(),
    };
    let post_url = format!("{}{}/", site_url, article.slug);

    format!(
        r#"<article class="story story-stub" id="{slug}">
      <div class="stub-layout">
        <div class="stub-image">
          {img_html}
        </div>
        <div class="stub-text">
          <span class="tag">{tag}</span>
          <h2>{title}</h2>
          {deck_html}
          <p class="meta">
            <span class="author">By {author}</span>
            <span class="date">&bull; {date}</span>
          </p>
          <p class="stub-cta"><a href="{post_url}">Read the full column &rarr;</a></p>
        </div>
      </div>
    </article>"#,
        slug = article.slug,
        img_html = img_html,
        tag = tag_label(&article.tags),
        title = article.title,
        deck_html = deck_html(article),
        author = article.author,
        date = format_date(&article.date),
        post_url = post_url,
    )
}

fn render_full(article: &Article, is_lead: bool) -> RenderedStory {
    let mut body = clean_body(&article.body);

    // The hero figure is skipped when the editor already embedded the same
    // image in the body.
    let img_html = match &article.hero_image {
        Some(src) if !body.contains(src.as_str()) => {
            let caption = match &article.hero_caption {
                Some(caption) => format!("<figcaption>{}</figcaption>", caption),
                None => String::new(),
            };
            format!(
                r#"<figure class="story-hero-img">
          <img src="{}" alt="{}" loading="lazy">
          {}
        </figure>"#,
                src, article.title, caption
            )
        }
        _ => String::new(),
    };

    // Quote insertion must run before the drop-cap check: eligibility is
    // decided on the body as it will actually render.
    let quote = analyze::extract_pull_quote(&body);
    if let Some(quote) = &quote {
        body = analyze::insert_pull_quote(&body, quote);
    }
    let has_drop_cap = analyze::should_have_drop_cap(&body);

    let html = format!(
        r#"<article class="{cls}" id="{slug}">
      <div class="story-header">
        <span class="tag">{tag}</span>
        <h2>{title}</h2>
        {deck_html}
        <p class="meta">
          <span class="author">By {author}</span>
          <span class="date">&bull; {date}</span>
          <span class="reading-time">&bull; {reading_time} min read</span>
        </p>
      </div>
      {img_html}
      <div class="story-body{dropcap_cls}">
        {body}
      </div>
    </article>"#,
        cls = if is_lead { "story lead-story" } else { "story" },
        slug = article.slug,
        tag = tag_label(&article.tags),
        title = article.title,
        deck_html = deck_html(article),
        author = article.author,
        date = format_date(&article.date),
        reading_time = article.reading_time,
        img_html = img_html,
        dropcap_cls = if has_drop_cap { " has-dropcap" } else { "" },
        body = body,
    );

    RenderedStory {
        html,
        has_pull_quote: quote.is_some(),
        has_drop_cap,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn article(tags: &[&str], body: &str) -> Article {
        Article {
            title: String::from("Test Story"),
            slug: String::from("test-story"),
            body: body.to_owned(),
            excerpt: None,
            hero_image: None,
            hero_caption: None,
            author: String::from("Dana Reed"),
            date: String::from("2026-02-15"),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            reading_time: 3,
        }
    }

    fn site_url() -> Url {
        Url::parse("https://www.newsinthegrove.com/").unwrap()
    }

    #[test]
    fn test_label_prefers_editorial_order() {
        let tags = vec![String::from("Community"), String::from("Weather")];
        assert_eq!(tag_label(&tags), "Weather");
    }

    #[test]
    fn test_label_falls_back_to_first_tag() {
        let tags = vec![String::from("Opinion"), String::from("Letters")];
        assert_eq!(tag_label(&tags), "Opinion");
        assert_eq!(tag_label(&[]), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-02-05"), "February 5, 2026");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_clean_body_strips_card_markers_and_styled_divs() {
        let body = concat!(
            "<!--kg-card-begin: html-->",
            r#"<div style="font-family:Georgia, serif" class="pasted">text</div>"#,
            "<!--kg-card-end: html-->",
        );
        assert_eq!(clean_body(body), "<div>text</div>");
    }

    #[test]
    fn test_column_renders_as_stub() {
        let story = render_story(
            &article(&["History"], "<p>A body that should not appear.</p>"),
            &site_url(),
            false,
        );
        assert!(story.html.contains("story-stub"));
        assert!(!story.html.contains("story-body"));
        assert!(!story.html.contains("A body that should not appear."));
        assert!(story
            .html
            .contains(r#"href="https://www.newsinthegrove.com/test-story/""#));
    }

    #[test]
    fn test_regular_story_renders_full_body() {
        let story = render_story(
            &article(&["Community"], "<p>The whole body shows up.</p>"),
            &site_url(),
            false,
        );
        assert!(story.html.contains("story-body"));
        assert!(story.html.contains("The whole body shows up."));
        assert!(!story.html.contains("story-stub"));
    }

    #[test]
    fn test_lead_story_class() {
        let story = render_story(&article(&["Community"], "<p>x</p>"), &site_url(), true);
        assert!(story.html.contains(r#"class="story lead-story""#));
    }

    #[test]
    fn test_hero_image_skipped_when_already_in_body() {
        let mut with_dup = article(
            &["Community"],
            r#"<p>intro</p><img src="https://cdn.example/hero.jpg">"#,
        );
        with_dup.hero_image = Some(String::from("https://cdn.example/hero.jpg"));
        let story = render_story(&with_dup, &site_url(), false);
        assert!(!story.html.contains("story-hero-img"));

        let mut without_dup = article(&["Community"], "<p>intro</p>");
        without_dup.hero_image = Some(String::from("https://cdn.example/hero.jpg"));
        without_dup.hero_caption = Some(String::from("The hero."));
        let story = render_story(&without_dup, &site_url(), false);
        assert!(story.html.contains("story-hero-img"));
        assert!(story.html.contains("<figcaption>The hero.</figcaption>"));
    }

    #[test]
    fn test_full_story_applies_quote_and_drop_cap() {
        let body = concat!(
            "<p>Snow began falling in the Coast Range foothills early Wednesday morning.</p>",
            "<p>Second paragraph with more detail.</p>",
            "<p>\u{201c}Road closures will continue through the weekend,\u{201d} said Jane Smith.</p>",
            "<p>Fourth paragraph.</p>",
            "<p>Fifth paragraph.</p>",
            "<p>Closer paragraph.</p>",
        );
        let story = render_story(&article(&["Weather"], body), &site_url(), false);
        assert!(story.has_pull_quote);
        assert!(story.has_drop_cap);
        assert!(story.html.contains(r#"<blockquote class="pull-quote">"#));
        assert!(story.html.contains("has-dropcap"));
        assert!(story.html.contains("<cite>\u{2014} Jane Smith</cite>"));
    }
}
