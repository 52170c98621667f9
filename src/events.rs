//! The community calendar shown in the events section of the edition. The
//! dataset is hand-curated per issue rather than derived from articles, so
//! it lives here as static reference data.

use url::Url;

/// One calendar entry.
pub struct EventEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub venue: &'static str,

    /// The slug of the event's detail page on the site's events app.
    pub detail_slug: &'static str,
}

/// A day's worth of calendar entries, in chronological order.
pub struct EventDay {
    pub day: &'static str,
    pub entries: &'static [EventEntry],
}

const fn entry(
    time: &'static str,
    title: &'static str,
    venue: &'static str,
    detail_slug: &'static str,
) -> EventEntry {
    EventEntry {
        time,
        title,
        venue,
        detail_slug,
    }
}

/// The calendar for the current issue.
pub const CALENDAR: &[EventDay] = &[
    EventDay {
        day: "Tuesday, February 17",
        entries: &[
            entry(
                "10:00 am",
                "Preschool Storytime",
                "Forest Grove City Library",
                "preschool-storytime/17759265/2026-02-17T10",
            ),
            entry(
                "2:00 pm",
                "Pacific U JV Baseball vs Clark College",
                "Chuck Bafaro Stadium",
                "pacific-university-athletics-jv-baseball-vs-clark-college/18132578/2026-02-17T14",
            ),
            entry(
                "4:00 pm",
                "Chess Club",
                "Forest Grove City Library",
                "chess-club/17759266/2026-02-17T16",
            ),
            entry(
                "5:30 pm",
                "Pacific U Women\u{2019}s Basketball vs George Fox",
                "Stoller Center",
                "pacific-university-athletics-women-s-basketball-vs-george-fox-university/18132579/2026-02-17T17",
            ),
            entry(
                "6:00 pm",
                "Advanced Line Dance Practice",
                "Zesti Food Carts",
                "adv-line-dance-practice/17847729/2026-02-17T18",
            ),
            entry(
                "7:00 pm",
                "Tuesday Trivia at Waltz",
                "Waltz Brewing",
                "tuesday-trivia-at-waltz/16180242/2026-02-17T19",
            ),
            entry(
                "7:30 pm",
                "Pacific U Men\u{2019}s Basketball vs George Fox",
                "Stoller Center",
                "pacific-university-athletics-men-s-basketball-vs-george-fox-university/18132580/2026-02-17T19",
            ),
        ],
    },
    EventDay {
        day: "Wednesday, February 18",
        entries: &[
            entry(
                "10:00 am",
                "Historic Forest Grove Museum & Library",
                "Old Train Station",
                "friends-of-historic-forest-grove-museum-library-open/16072367/2026-02-18T10",
            ),
            entry(
                "10:55 am",
                "Gales Creek Gleaners",
                "Gales Creek Community Church",
                "gales-creek-gleaners/16083114/2026-02-18T10",
            ),
            entry(
                "11:00 am",
                "AARP Foundation Tax-Aide",
                "Forest Grove City Library",
                "aarp-foundation-tax-aide/18041486/2026-02-18T11",
            ),
            entry(
                "4:00 pm",
                "Teen Zone Crafting Hour",
                "Forest Grove City Library",
                "teen-zone-crafting-hour/17759267/2026-02-18T16",
            ),
            entry(
                "5:00 pm",
                "Indoor Climbing \u{2014} Outdoor Pursuits",
                "The Creamery",
                "indoor-climbing-outdoor-pursuits/18117047/2026-02-18T17",
            ),
            entry(
                "6:30 pm",
                "Cub Scouts Pack 169",
                "Holbrook Masonic Lodge",
                "cub-scouts-pack-169/17998186/2026-02-18T18",
            ),
            entry(
                "7:00 pm",
                "Pods & Pints \u{2014} Podcast Club",
                "Waltz Brewing",
                "pods-pints-podcast-club-at-waltz/17651241/2026-02-18T19",
            ),
        ],
    },
    EventDay {
        day: "Thursday, February 19",
        entries: &[
            entry(
                "5:00 pm",
                "Public Arts Commission",
                "Forest Grove",
                "public-arts-commission/18041487/2026-02-19T17",
            ),
            entry(
                "6:00 pm",
                "Gales Creek Library",
                "Gales Creek Elementary School",
                "gales-creek-library/17155099/2026-02-19T18",
            ),
            entry(
                "6:00 pm",
                "Bluegrass Jam Session",
                "Waltz Brewing",
                "bluegrass-jam-session/16180245/2026-02-19T18",
            ),
            entry(
                "7:00 pm",
                "Open Mic Night",
                "Taqueria Corona",
                "open-mic/17847956/2026-02-19T19",
            ),
            entry(
                "7:30 pm",
                "Mojo Holler",
                "McMenamins Grand Lodge",
                "mojo-holler-at-mcmenamins-grand-lodge/17995868/2026-02-19T19",
            ),
        ],
    },
    EventDay {
        day: "Friday, February 20",
        entries: &[
            entry(
                "10:00 am",
                "Digital Navigator: Tech Assistance",
                "Forest Grove City Library",
                "digital-navigator-one-on-one-tech-assistance/17088270/2026-02-20T10",
            ),
            entry(
                "10:15 am",
                "Senior Stretch",
                "Forest Grove",
                "senior-stretch/18041492/2026-02-20T10",
            ),
        ],
    },
];

/// Renders the calendar as the HTML body of the events section, with each
/// entry linking to its detail page on the site's events app.
pub fn render_calendar(site_url: &Url) -> String {
    let mut out = String::new();
    for day in CALENDAR {
        let mut items = String::new();
        for event in day.entries {
            let url = format!("{}events/#/details/{}", site_url, event.detail_slug);
            items.push_str(&format!(
                r#"<a class="event-card" href="{url}">
              <span class="event-time">{time}</span>
              <div class="event-details">
                <strong>{title}</strong>
                <span class="event-venue">{venue}</span>
              </div>
            </a>
"#,
                url = url,
                time = event.time,
                title = event.title,
                venue = event.venue,
            ));
        }
        out.push_str(&format!(
            r#"<div class="events-day-group">
          <h3 class="events-day-label">{day}</h3>
          <div class="events-list">{items}</div>
        </div>
"#,
            day = day.day,
            items = items,
        ));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_calendar_renders_days_and_detail_links() {
        let site_url = Url::parse("https://www.newsinthegrove.com/").unwrap();
        let html = render_calendar(&site_url);
        assert!(html.contains("Tuesday, February 17"));
        assert!(html.contains("Friday, February 20"));
        assert!(html.contains(
            "https://www.newsinthegrove.com/events/#/details/chess-club/17759266/2026-02-17T16"
        ));
        assert_eq!(html.matches("events-day-group").count(), CALENDAR.len());
    }
}
