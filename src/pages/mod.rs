//! HTML page rendering.
//!
//! Pages are plain strings assembled with `format!` and served as `Html`
//! responses. The shared layout carries the nav bar, a small stylesheet
//! and an optional flash message; user-supplied text is escaped before
//! it reaches any markup.

use crate::models::{Artist, ShowListing, Venue};
use crate::services::listings::{ListingSummary, LocationGroup};

/// Minimal HTML escaping for user-supplied text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}

pub fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_html = match flash {
        Some(message) => format!("<div class=\"flash\">{}</div>\n", escape(message)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 16px 24px;
        }}
        header a {{
            color: #4a9eff;
            margin-right: 16px;
            text-decoration: none;
            font-weight: 600;
        }}
        main {{
            padding: 24px;
            max-width: 860px;
        }}
        h1 {{ color: #4a9eff; }}
        h2 {{ color: #7ab8ff; font-size: 18px; }}
        a {{ color: #4a9eff; }}
        ul {{ list-style: none; padding-left: 0; }}
        li {{ margin-bottom: 6px; }}
        img.thumb {{ height: 40px; vertical-align: middle; margin-right: 8px; }}
        .flash {{
            background-color: #2a3a2a;
            border: 1px solid #4a6a4a;
            padding: 10px 14px;
            margin-bottom: 20px;
        }}
        .muted {{ color: #888; font-size: 14px; }}
        form label {{ display: block; margin-top: 12px; }}
        input, textarea {{
            background-color: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
            padding: 6px;
            width: 320px;
        }}
        button {{
            margin-top: 16px;
            background-color: #4a9eff;
            color: #111;
            border: none;
            padding: 8px 18px;
            cursor: pointer;
        }}
    </style>
</head>
<body>
<header>
    <a href="/">Fyyur</a>
    <a href="/venues">Venues</a>
    <a href="/artists">Artists</a>
    <a href="/shows">Shows</a>
</header>
<main>
{flash_html}{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn home(flash: Option<&str>) -> String {
    let body = r#"<h1>Fyyur</h1>
<p>Find and book music venues, artists and shows.</p>
<ul>
    <li><a href="/venues/create">List a venue</a></li>
    <li><a href="/artists/create">List an artist</a></li>
    <li><a href="/shows/create">List a show</a></li>
</ul>"#;
    layout("Home", flash, body)
}

fn summary_list(path_prefix: &str, items: &[ListingSummary]) -> String {
    let mut out = String::from("<ul>\n");
    for item in items {
        out.push_str(&format!(
            "    <li><a href=\"{path_prefix}/{id}\">{name}</a> <span class=\"muted\">{count} upcoming</span></li>\n",
            id = item.id,
            name = escape(&item.name),
            count = item.num_upcoming_shows,
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn search_form(action: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n<input type=\"text\" name=\"search_term\" placeholder=\"Search by name\">\n<button type=\"submit\">Search</button>\n</form>\n"
    )
}

pub fn venue_directory(groups: &[LocationGroup]) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    body.push_str(&search_form("/venues/search"));
    if groups.is_empty() {
        body.push_str("<p class=\"muted\">No venues listed yet.</p>\n");
    }
    for group in groups {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n",
            escape(&group.city),
            escape(&group.state)
        ));
        body.push_str(&summary_list("/venues", &group.venues));
    }
    layout("Venues", None, &body)
}

pub fn artist_directory(artists: &[Artist]) -> String {
    let mut body = String::from("<h1>Artists</h1>\n");
    body.push_str(&search_form("/artists/search"));
    if artists.is_empty() {
        body.push_str("<p class=\"muted\">No artists listed yet.</p>\n");
    }
    body.push_str("<ul>\n");
    for artist in artists {
        body.push_str(&format!(
            "    <li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.id,
            escape(&artist.name)
        ));
    }
    body.push_str("</ul>\n");
    layout("Artists", None, &body)
}

pub fn search_results(
    heading: &str,
    path_prefix: &str,
    term: &str,
    count: usize,
    items: &[ListingSummary],
) -> String {
    let mut body = format!(
        "<h1>{heading}</h1>\n<p>Found {count} result(s) for \"{term}\"</p>\n",
        heading = escape(heading),
        term = escape(term),
    );
    body.push_str(&summary_list(path_prefix, items));
    layout(heading, None, &body)
}

enum ShowSide {
    Artist,
    Venue,
}

fn show_list(heading: &str, shows: &[ShowListing], side: ShowSide) -> String {
    let mut out = format!("<h2>{} ({})</h2>\n<ul>\n", escape(heading), shows.len());
    for show in shows {
        let (id, name, image, prefix) = match side {
            ShowSide::Artist => (
                show.artist_id,
                &show.artist_name,
                &show.artist_image_link,
                "/artists",
            ),
            ShowSide::Venue => (
                show.venue_id,
                &show.venue_name,
                &show.venue_image_link,
                "/venues",
            ),
        };
        let thumb = match image {
            Some(link) => format!("<img class=\"thumb\" src=\"{}\" alt=\"\">", escape(link)),
            None => String::new(),
        };
        out.push_str(&format!(
            "    <li>{thumb}<a href=\"{prefix}/{id}\">{name}</a> <span class=\"muted\">{start}</span></li>\n",
            name = escape(name),
            start = show.start_time,
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn seeking_line(seeking: bool, what: &str, description: Option<&str>) -> String {
    if !seeking {
        return String::new();
    }
    match description {
        Some(text) => format!("<p>Seeking {what}: {}</p>\n", escape(text)),
        None => format!("<p>Seeking {what}.</p>\n"),
    }
}

fn contact_lines(
    phone: Option<&str>,
    website: Option<&str>,
    facebook_link: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(phone) = phone {
        out.push_str(&format!("<p class=\"muted\">Phone: {}</p>\n", escape(phone)));
    }
    if let Some(website) = website {
        let website = escape(website);
        out.push_str(&format!(
            "<p class=\"muted\"><a href=\"{website}\">{website}</a></p>\n"
        ));
    }
    if let Some(facebook) = facebook_link {
        let facebook = escape(facebook);
        out.push_str(&format!(
            "<p class=\"muted\"><a href=\"{facebook}\">{facebook}</a></p>\n"
        ));
    }
    out
}

pub fn venue_detail(venue: &Venue, upcoming: &[ShowListing], past: &[ShowListing]) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(&venue.name));
    if let Some(image) = &venue.image_link {
        body.push_str(&format!("<img class=\"thumb\" src=\"{}\" alt=\"\">\n", escape(image)));
    }
    body.push_str(&format!(
        "<p>{}, {} &mdash; {}</p>\n",
        escape(&venue.city),
        escape(&venue.state),
        escape(&venue.address)
    ));
    if let Some(genres) = &venue.genres {
        body.push_str(&format!("<p class=\"muted\">Genres: {}</p>\n", escape(genres)));
    }
    body.push_str(&contact_lines(
        venue.phone.as_deref(),
        venue.website.as_deref(),
        venue.facebook_link.as_deref(),
    ));
    body.push_str(&seeking_line(
        venue.seeking_talent,
        "talent",
        venue.seeking_description.as_deref(),
    ));
    body.push_str(&show_list("Upcoming shows", upcoming, ShowSide::Artist));
    body.push_str(&show_list("Past shows", past, ShowSide::Artist));
    body.push_str(&format!(
        "<p><a href=\"/venues/{}/edit\">Edit venue</a></p>\n",
        venue.id
    ));
    layout(&venue.name, None, &body)
}

pub fn artist_detail(artist: &Artist, upcoming: &[ShowListing], past: &[ShowListing]) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(&artist.name));
    if let Some(image) = &artist.image_link {
        body.push_str(&format!("<img class=\"thumb\" src=\"{}\" alt=\"\">\n", escape(image)));
    }
    body.push_str(&format!(
        "<p>{}, {}</p>\n",
        escape(&artist.city),
        escape(&artist.state)
    ));
    if let Some(genres) = &artist.genres {
        body.push_str(&format!("<p class=\"muted\">Genres: {}</p>\n", escape(genres)));
    }
    body.push_str(&contact_lines(
        artist.phone.as_deref(),
        artist.website.as_deref(),
        artist.facebook_link.as_deref(),
    ));
    body.push_str(&seeking_line(
        artist.seeking_venue,
        "venues",
        artist.seeking_description.as_deref(),
    ));
    body.push_str(&show_list("Upcoming shows", upcoming, ShowSide::Venue));
    body.push_str(&show_list("Past shows", past, ShowSide::Venue));
    body.push_str(&format!(
        "<p><a href=\"/artists/{}/edit\">Edit artist</a></p>\n",
        artist.id
    ));
    layout(&artist.name, None, &body)
}

pub fn show_directory(shows: &[ShowListing]) -> String {
    let mut body = String::from("<h1>Shows</h1>\n");
    if shows.is_empty() {
        body.push_str("<p class=\"muted\">No shows scheduled yet.</p>\n");
    }
    body.push_str("<ul>\n");
    for show in shows {
        let thumb = match &show.artist_image_link {
            Some(link) => format!("<img class=\"thumb\" src=\"{}\" alt=\"\">", escape(link)),
            None => String::new(),
        };
        body.push_str(&format!(
            "    <li>{thumb}<a href=\"/artists/{artist_id}\">{artist}</a> at <a href=\"/venues/{venue_id}\">{venue}</a> <span class=\"muted\">{start}</span></li>\n",
            artist_id = show.artist_id,
            artist = escape(&show.artist_name),
            venue_id = show.venue_id,
            venue = escape(&show.venue_name),
            start = show.start_time,
        ));
    }
    body.push_str("</ul>\n");
    layout("Shows", None, &body)
}

fn text_field(label: &str, name: &str, value: &str) -> String {
    format!(
        "<label>{label}<input type=\"text\" name=\"{name}\" value=\"{value}\"></label>\n",
        label = escape(label),
    )
}

pub fn venue_form(
    action: &str,
    heading: &str,
    venue: Option<&Venue>,
    flash: Option<&str>,
) -> String {
    let checked = if venue.is_some_and(|v| v.seeking_talent) {
        " checked"
    } else {
        ""
    };
    let description = opt(venue.and_then(|v| v.seeking_description.as_deref()));
    let mut body = format!("<h1>{}</h1>\n", escape(heading));
    body.push_str(&format!("<form method=\"post\" action=\"{action}\">\n"));
    body.push_str(&text_field("Name", "name", &opt(venue.map(|v| v.name.as_str()))));
    body.push_str(&text_field("City", "city", &opt(venue.map(|v| v.city.as_str()))));
    body.push_str(&text_field("State", "state", &opt(venue.map(|v| v.state.as_str()))));
    body.push_str(&text_field("Address", "address", &opt(venue.map(|v| v.address.as_str()))));
    body.push_str(&text_field("Phone", "phone", &opt(venue.and_then(|v| v.phone.as_deref()))));
    body.push_str(&text_field(
        "Genres (comma separated)",
        "genres",
        &opt(venue.and_then(|v| v.genres.as_deref())),
    ));
    body.push_str(&text_field(
        "Image link",
        "image_link",
        &opt(venue.and_then(|v| v.image_link.as_deref())),
    ));
    body.push_str(&text_field(
        "Facebook link",
        "facebook_link",
        &opt(venue.and_then(|v| v.facebook_link.as_deref())),
    ));
    body.push_str(&text_field(
        "Website",
        "website",
        &opt(venue.and_then(|v| v.website.as_deref())),
    ));
    body.push_str(&format!(
        "<label>Seeking talent <input type=\"checkbox\" name=\"seeking_talent\" value=\"y\"{checked}></label>\n"
    ));
    body.push_str(&format!(
        "<label>Seeking description<textarea name=\"seeking_description\">{description}</textarea></label>\n"
    ));
    body.push_str("<button type=\"submit\">Save venue</button>\n</form>\n");
    layout(heading, flash, &body)
}

pub fn artist_form(
    action: &str,
    heading: &str,
    artist: Option<&Artist>,
    flash: Option<&str>,
) -> String {
    let checked = if artist.is_some_and(|a| a.seeking_venue) {
        " checked"
    } else {
        ""
    };
    let description = opt(artist.and_then(|a| a.seeking_description.as_deref()));
    let mut body = format!("<h1>{}</h1>\n", escape(heading));
    body.push_str(&format!("<form method=\"post\" action=\"{action}\">\n"));
    body.push_str(&text_field("Name", "name", &opt(artist.map(|a| a.name.as_str()))));
    body.push_str(&text_field("City", "city", &opt(artist.map(|a| a.city.as_str()))));
    body.push_str(&text_field("State", "state", &opt(artist.map(|a| a.state.as_str()))));
    body.push_str(&text_field("Phone", "phone", &opt(artist.and_then(|a| a.phone.as_deref()))));
    body.push_str(&text_field(
        "Genres (comma separated)",
        "genres",
        &opt(artist.and_then(|a| a.genres.as_deref())),
    ));
    body.push_str(&text_field(
        "Image link",
        "image_link",
        &opt(artist.and_then(|a| a.image_link.as_deref())),
    ));
    body.push_str(&text_field(
        "Facebook link",
        "facebook_link",
        &opt(artist.and_then(|a| a.facebook_link.as_deref())),
    ));
    body.push_str(&text_field(
        "Website",
        "website",
        &opt(artist.and_then(|a| a.website.as_deref())),
    ));
    body.push_str(&format!(
        "<label>Seeking a venue <input type=\"checkbox\" name=\"seeking_venue\" value=\"y\"{checked}></label>\n"
    ));
    body.push_str(&format!(
        "<label>Seeking description<textarea name=\"seeking_description\">{description}</textarea></label>\n"
    ));
    body.push_str("<button type=\"submit\">Save artist</button>\n</form>\n");
    layout(heading, flash, &body)
}

pub fn show_form(flash: Option<&str>) -> String {
    let body = r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
<label>Artist id<input type="number" name="artist_id" min="1"></label>
<label>Venue id<input type="number" name="venue_id" min="1"></label>
<label>Start time<input type="datetime-local" name="start_time" step="1"></label>
<button type="submit">Save show</button>
</form>
"#;
    layout("List a new show", flash, body)
}

pub fn not_found(what: &str) -> String {
    let body = format!(
        "<h1>Not found</h1>\n<p>The {} you are looking for does not exist.</p>\n<p><a href=\"/\">Back home</a></p>\n",
        escape(what)
    );
    layout("Not found", None, &body)
}

pub fn server_error() -> String {
    let body = "<h1>Something went wrong</h1>\n<p>An internal error occurred. Please try again.</p>\n<p><a href=\"/\">Back home</a></p>\n";
    layout("Server error", None, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn layout_renders_flash_when_present() {
        let page = layout("Home", Some("Venue saved"), "<p>hi</p>");
        assert!(page.contains("class=\"flash\""));
        assert!(page.contains("Venue saved"));

        let page = layout("Home", None, "<p>hi</p>");
        assert!(!page.contains("class=\"flash\""));
    }

    #[test]
    fn venue_form_prefills_existing_values() {
        let venue = Venue {
            id: 7,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: None,
            image_link: None,
            facebook_link: None,
            genres: Some("Jazz".to_string()),
            website: None,
            seeking_talent: true,
            seeking_description: None,
        };
        let page = venue_form("/venues/7/edit", "Edit venue", Some(&venue), None);
        assert!(page.contains("value=\"The Musical Hop\""));
        assert!(page.contains("value=\"Jazz\""));
        assert!(page.contains("checked"));
    }
}
