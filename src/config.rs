use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use url::Url;

/// Everything a run needs: where the export lives, where the page goes,
/// which template renders the chrome, and the two editorial constants that
/// change per issue (site URL, edition date).
pub struct Config {
    pub posts_file: PathBuf,
    pub output_file: PathBuf,
    pub page_template: Vec<PathBuf>,
    pub site_url: Url,
    pub edition_date: NaiveDate,
}

impl Config {
    /// Validates the raw CLI strings into a [`Config`]. The site URL must
    /// parse (and should end in a trailing slash, since story links are
    /// built by appending slugs) and the edition date must be a real
    /// `YYYY-MM-DD` date.
    pub fn new(
        posts_file: &str,
        output_file: &str,
        page_template: Vec<&str>,
        site_url: &str,
        edition_date: &str,
    ) -> Result<Config> {
        Ok(Config {
            posts_file: PathBuf::from(posts_file),
            output_file: PathBuf::from(output_file),
            page_template: page_template.into_iter().map(PathBuf::from).collect(),
            site_url: Url::parse(site_url)
                .with_context(|| format!("Parsing site URL '{}'", site_url))?,
            edition_date: NaiveDate::parse_from_str(edition_date, "%Y-%m-%d")
                .with_context(|| format!("Parsing edition date '{}'", edition_date))?,
        })
    }
}
