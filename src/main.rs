use anyhow::Result;
use broadsheet::build::build_edition;
use broadsheet::config::Config;
use clap::{App, Arg};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = App::new("broadsheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds the News in the Grove web edition from a Ghost content export")
        .arg(
            Arg::with_name("posts")
                .help("Path to the Ghost posts export (JSON)")
                .index(1)
                .default_value("web-edition/ghost-stories.json"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Path for the generated edition page")
                .default_value("web-edition/index.html"),
        )
        .arg(
            Arg::with_name("template")
                .long("template")
                .takes_value(true)
                .multiple(true)
                .help("Page template file(s), concatenated in order")
                .default_value("theme/edition.html"),
        )
        .arg(
            Arg::with_name("site-url")
                .long("site-url")
                .takes_value(true)
                .help("Base URL used for canonical story and event links")
                .default_value("https://www.newsinthegrove.com/"),
        )
        .arg(
            Arg::with_name("date")
                .long("date")
                .takes_value(true)
                .help("Edition date (YYYY-MM-DD) printed on the masthead")
                .default_value("2026-02-17"),
        )
        .get_matches();

    let config = Config::new(
        matches.value_of("posts").unwrap_or_default(),
        matches.value_of("output").unwrap_or_default(),
        matches
            .values_of("template")
            .map(|files| files.collect())
            .unwrap_or_default(),
        matches.value_of("site-url").unwrap_or_default(),
        matches.value_of("date").unwrap_or_default(),
    )?;

    build_edition(&config)?;
    Ok(())
}
