//! Heuristic analysis of story bodies. Three independently usable
//! operations:
//!
//! * [`extract_pull_quote`] finds at most one quotable excerpt (and, when
//!   the text supports it, the speaker) in the middle of a story.
//! * [`should_have_drop_cap`] decides whether the opening paragraph can
//!   carry a decorative enlarged initial.
//! * [`insert_pull_quote`] splices an extracted quote back into the body
//!   as a `<blockquote>` callout.
//!
//! All three operate on the story body as marked-up text and are pure
//! functions of their input.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Quotes this short read as fragments; quotes this long are paragraphs,
/// not callouts. Both bounds are exclusive.
const MIN_QUOTE_CHARS: usize = 40;
const MAX_QUOTE_CHARS: usize = 250;

/// Stories shorter than this many paragraphs aren't quotable.
const MIN_QUOTABLE_PARAGRAPHS: usize = 5;

/// A drop cap needs enough opening text to wrap around the large initial.
const MIN_DROP_CAP_CHARS: usize = 50;

/// The callout lands after this many paragraph-close markers.
const INSERT_AFTER_PARAGRAPHS: usize = 4;

const PARAGRAPH_CLOSE: &str = "</p>";

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p>(.*?)</p>").unwrap());

static INLINE_MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A typographic or plain quoted span followed, before the sentence ends,
/// by an attribution verb and a clause ending at a period.
static ATTRIBUTED_SMART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"“([^”]+)”[^.]*?(?:said|told|wrote|added|explained|noted)\s+(.+?)\.").unwrap()
});

static ATTRIBUTED_PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)"[^.]*?(?:said|told|wrote|added|explained|noted)\s+(.+?)\."#).unwrap()
});

static QUOTED_SMART: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"“([^”]+)”").unwrap());

static QUOTED_PLAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// A person's name at the end of an attribution clause: the last two
/// consecutive capitalized words.
static SPEAKER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]+\s[A-Z][a-z]+)\s*$").unwrap());

/// A quotable excerpt lifted from a story body. Computed once per render
/// and discarded after insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct PullQuote {
    pub text: String,
    pub speaker: Option<String>,
}

/// Returns the text of each paragraph-level block in `html`, in order.
fn paragraphs(html: &str) -> Vec<&str> {
    PARAGRAPH
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|text| text.as_str())
        .collect()
}

fn strip_inline_markup(text: &str) -> Cow<'_, str> {
    INLINE_MARKUP.replace_all(text, "")
}

fn quotable(text: &str) -> bool {
    let chars = text.chars().count();
    chars > MIN_QUOTE_CHARS && chars < MAX_QUOTE_CHARS
}

/// Finds at most one pull-quote in a story body.
///
/// Only the middle third of the paragraphs is searched, so the lede and the
/// closer are never lifted, and stories with fewer than five paragraphs are
/// never quoted. The first pass looks for a quoted span followed by an
/// attribution verb (`said`, `told`, ...) and extracts the speaker from the
/// attribution clause; when the clause carries no recognizable name the
/// quote is still returned, just unattributed. The second pass accepts any
/// quoted span of acceptable length, also unattributed. Returns `None`
/// when neither pass matches; that is the normal outcome for most stories,
/// not an error.
pub fn extract_pull_quote(html: &str) -> Option<PullQuote> {
    let paragraphs = paragraphs(html);
    if paragraphs.len() < MIN_QUOTABLE_PARAGRAPHS {
        return None;
    }
    let start = paragraphs.len() / 3;
    let end = 2 * paragraphs.len() / 3;
    let middle = &paragraphs[start..end];

    for paragraph in middle {
        let text = strip_inline_markup(paragraph);
        for pattern in [&*ATTRIBUTED_SMART, &*ATTRIBUTED_PLAIN] {
            if let Some(captures) = pattern.captures(&text) {
                let quote = &captures[1];
                if !quotable(quote) {
                    continue;
                }
                let clause = captures[2].trim();
                return Some(PullQuote {
                    text: quote.to_owned(),
                    speaker: SPEAKER_NAME
                        .captures(clause)
                        .map(|name| name[1].to_owned()),
                });
            }
        }
    }

    // Fallback: any quoted span of acceptable length, no attribution.
    for paragraph in middle {
        let text = strip_inline_markup(paragraph);
        for pattern in [&*QUOTED_SMART, &*QUOTED_PLAIN] {
            if let Some(captures) = pattern.captures(&text) {
                let quote = &captures[1];
                if quotable(quote) {
                    return Some(PullQuote {
                        text: quote.to_owned(),
                        speaker: None,
                    });
                }
            }
        }
    }

    None
}

/// Decides whether the first paragraph of `html` should render with a
/// decorative enlarged initial letter. Paragraphs that open with emphasis,
/// bold, or link markup keep their own treatment; very short paragraphs
/// and paragraphs that open with a digit or punctuation are also passed
/// over.
pub fn should_have_drop_cap(html: &str) -> bool {
    let first = match PARAGRAPH.captures(html).and_then(|c| c.get(1)) {
        Some(text) => text.as_str().trim(),
        None => return false,
    };
    if first.starts_with("<em>") || first.starts_with("<strong>") || first.starts_with("<a") {
        return false;
    }
    let plain = strip_inline_markup(first);
    if plain.chars().count() < MIN_DROP_CAP_CHARS {
        return false;
    }
    matches!(plain.chars().next(), Some(c) if c.is_alphabetic())
}

/// Splices `quote` into `html` as a `pull-quote` blockquote after the
/// fourth paragraph-close marker.
///
/// The body is decomposed into block segments at paragraph boundaries and
/// the callout is inserted by segment index rather than by byte offset.
/// When the body closes fewer than four paragraphs there is no insertion
/// point and the body is returned unchanged.
pub fn insert_pull_quote(html: &str, quote: &PullQuote) -> String {
    let blocks: Vec<&str> = html.split_inclusive(PARAGRAPH_CLOSE).collect();
    let closed = blocks
        .iter()
        .filter(|block| block.ends_with(PARAGRAPH_CLOSE))
        .count();
    if closed < INSERT_AFTER_PARAGRAPHS {
        return html.to_owned();
    }

    let callout = render_callout(quote);
    let mut out = String::with_capacity(html.len() + callout.len());
    let mut seen = 0;
    for block in blocks {
        out.push_str(block);
        if block.ends_with(PARAGRAPH_CLOSE) {
            seen += 1;
            if seen == INSERT_AFTER_PARAGRAPHS {
                out.push_str(&callout);
            }
        }
    }
    out
}

fn render_callout(quote: &PullQuote) -> String {
    let attribution = match &quote.speaker {
        Some(speaker) => format!("<cite>— {}</cite>", speaker),
        None => String::new(),
    };
    format!(
        "\n<blockquote class=\"pull-quote\">“{}”{}</blockquote>\n",
        quote.text, attribution
    )
}
