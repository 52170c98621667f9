//! Exports the [`build_edition`] function which stitches together the
//! high-level steps of building the edition: loading the raw export,
//! selecting and ordering the articles ([`crate::post`]), parsing the page
//! template, rendering and writing the page ([`crate::write`]), and
//! reporting the run summary.

use crate::config::Config;
use crate::post::{select_articles, RawPost};
use crate::write::{EditionStats, Error as WriteError, Writer};
use gtmpl::Template;
use owo_colors::OwoColorize;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Builds the edition from a [`Config`] object. This calls into
/// [`select_articles`] and [`Writer::write_edition`] which do the
/// heavy-lifting, then prints the run summary: the final story order and
/// how many stories received a pull-quote or a drop cap.
pub fn build_edition(config: &Config) -> Result<()> {
    let posts = load_posts(&config.posts_file)?;
    let articles = select_articles(posts);

    let page_template = parse_template(config.page_template.iter())?;

    let writer = Writer {
        page_template: &page_template,
        site_url: &config.site_url,
        edition_date: config.edition_date,
        output_file: &config.output_file,
    };
    let stats = writer.write_edition(&articles)?;

    report(&config.output_file, &stats);
    Ok(())
}

/// Loads and decodes the raw Ghost export. A document missing required
/// fields (title, slug, publish timestamp) fails here, before any output
/// is written.
fn load_posts(path: &Path) -> Result<Vec<RawPost>> {
    let file = File::open(path).map_err(|e| Error::OpenPostsFile {
        path: path.to_owned(),
        err: e,
    })?;
    serde_json::from_reader(file).map_err(Error::DecodePosts)
}

// Loads the template file contents, concatenates them, and parses the
// result into a template.
fn parse_template<P: AsRef<Path>>(template_files: impl Iterator<Item = P>) -> Result<Template> {
    let mut contents = String::new();
    for template_file in template_files {
        use std::io::Read;
        let template_file = template_file.as_ref();
        File::open(template_file)
            .map_err(|e| Error::OpenTemplateFile {
                path: template_file.to_owned(),
                err: e,
            })?
            .read_to_string(&mut contents)?;
        contents.push(' ');
    }

    let mut template = Template::default();
    template.parse(&contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

fn report(output_file: &Path, stats: &EditionStats) {
    println!("{} {}", "Built".green().bold(), output_file.display());
    println!("  Story order:");
    for (i, (label, title)) in stats.order.iter().enumerate() {
        if i == 0 {
            println!("    {}: [{}] {}", ">> LEAD".yellow().bold(), label.cyan(), title);
        } else {
            println!("       #{}: [{}] {}", i + 1, label.cyan(), title);
        }
    }
    println!("  Pull quotes: {}", stats.pull_quotes);
    println!("  Drop caps: {}", stats.drop_caps);
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building the edition. Errors can be during loading
/// or decoding the export, parsing the template file, writing the page,
/// and other I/O.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while opening the posts export.
    OpenPostsFile { path: PathBuf, err: std::io::Error },

    /// Returned for errors decoding the posts export.
    DecodePosts(serde_json::Error),

    /// Returned for I/O problems while opening template files.
    OpenTemplateFile { path: PathBuf, err: std::io::Error },

    /// Returned for errors parsing template files.
    ParseTemplate(String),

    /// Returned for errors assembling and writing the edition page.
    Write(WriteError),

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OpenPostsFile { path, err } => {
                write!(f, "Opening posts export '{}': {}", path.display(), err)
            }
            Error::DecodePosts(err) => write!(f, "Decoding posts export: {}", err),
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenPostsFile { path: _, err } => Some(err),
            Error::DecodePosts(err) => Some(err),
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::ParseTemplate(_) => None,
            Error::Write(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}
