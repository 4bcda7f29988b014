//! Per-field extraction over parsed pages.
//!
//! Every function here is stateless and works on one parsed document. The
//! selectors are tied to the source site's current markup (several class
//! names carry generated hash suffixes, hence the attribute-prefix
//! matches); a structural change on the site breaks extraction with no
//! compatibility shim. A selector that matches nothing yields an empty
//! collection or `None` — callers must tolerate absent data. Only
//! numeric/date text that cannot be interpreted fails hard.

use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

use songbook_core::model::TrackDescriptor;

use crate::error::{ScrapeError, ScrapeResult};

/// Credit roles recognized on a song page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditRole {
    Writers,
    Producers,
}

impl CreditRole {
    /// Label variants the site uses for this role's credit block. The site
    /// is inconsistent between singular and plural forms.
    fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Writers => &["Written By", "Writers"],
            Self::Producers => &["Produced By", "Producers"],
        }
    }
}

/// Label text of every role plus the separator literals that leak into
/// text extraction of a credit block.
const CREDIT_ARTIFACTS: &[&str] = &["Written By", "Writers", "Produced By", "Producers", " & ", ", "];

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Splits a combined name string on `", "` or `" & "`.
fn name_split_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s|\s&\s").expect("valid name split regex"))
}

/// Bracketed section markers embedded in lyric text, e.g. "[Chorus]".
fn section_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[.*?\]").expect("valid section marker regex"))
}

/// Strip layout artifacts from a title: embedded newlines and zero-width
/// spaces removed, non-breaking spaces turned into plain spaces, then
/// trimmed.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    raw.replace(['\n', '\u{200b}'], "")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}

/// Ordered tracklist of an album page.
///
/// Returns (position, title, track URL) triples. Titles are cleaned of
/// layout artifacts; rows whose title is blank after cleanup are skipped.
#[must_use]
pub fn tracklist(doc: &Html) -> Vec<TrackDescriptor> {
    let number_sel = sel(
        "div.chart_row-number_container.chart_row-number_container--align_left > span > span",
    );
    let link_sel = sel("div.chart_row-content > a");
    let title_sel = sel("h3");

    let numbers = doc.select(&number_sel).map(|el| {
        let text: String = el.text().collect();
        text.trim().parse::<u32>().unwrap_or(0)
    });

    let entries = doc.select(&link_sel).filter_map(|link| {
        let url = link.value().attr("href")?.to_string();
        let title_el = link.select(&title_sel).next()?;
        let title = clean_title(&title_el.text().collect::<String>());
        if title.is_empty() {
            None
        } else {
            Some((title, url))
        }
    });

    numbers
        .zip(entries)
        .map(|(number, (title, url))| TrackDescriptor { number, title, url })
        .collect()
}

/// Primary performer(s) from a song page header.
///
/// Combined credits are split on `", "` and `" & "`. When the page marks a
/// "Featuring" block, the featured names are appended, split by the same
/// rule.
#[must_use]
pub fn performers(doc: &Html) -> Vec<String> {
    let header_sel = sel("div[class*='HeaderArtistAndTracklistdesktop__Container'] span span");
    let Some(header) = doc.select(&header_sel).next() else {
        return Vec::new();
    };
    let raw: String = header.text().collect();
    let mut artists: Vec<String> = name_split_re()
        .split(raw.trim())
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    let label_sel = sel("p[class*='HeaderCredits__Label']");
    let featuring = doc
        .select(&label_sel)
        .next()
        .map(|el| el.text().collect::<String>())
        .is_some_and(|label| label.trim() == "Featuring");
    if featuring {
        let list_sel = sel("div[class*='HeaderCredits__List']");
        if let Some(list) = doc.select(&list_sel).next() {
            let raw: String = list.text().collect();
            artists.extend(
                name_split_re()
                    .split(raw.trim())
                    .filter(|name| !name.is_empty())
                    .map(String::from),
            );
        }
    }
    artists
}

/// Release date and page-view count from a song page's metadata-stats
/// block.
///
/// The block yields zero, two, or three entries depending on the song's
/// state. The date is taken from the first entry only when that entry is
/// not itself a view-count label; the view count is taken from the third
/// entry when present, otherwise 0.
pub fn release_metadata(doc: &Html) -> ScrapeResult<(Option<NaiveDate>, u64)> {
    let entry_sel = sel("div[class*='MetadataStats__Container'] span[class*='LabelWithIcon__Label']");
    let entries: Vec<String> = doc
        .select(&entry_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    if entries.is_empty() {
        return Ok((None, 0));
    }

    let date = if is_view_count_label(&entries[0]) {
        None
    } else {
        Some(parse_release_date(&entries[0])?)
    };
    let views = match entries.get(2) {
        Some(entry) => parse_view_count(entry)?,
        None => 0,
    };
    Ok((date, views))
}

fn is_view_count_label(entry: &str) -> bool {
    entry.ends_with("views") || entry.ends_with("view")
}

/// Parse a view-count string with an optional magnitude suffix.
///
/// `K` multiplies by 1,000 and `M` by 1,000,000; a bare number passes
/// through unchanged. A trailing "views" label is tolerated. Any other
/// suffix is a hard parse failure.
pub fn parse_view_count(raw: &str) -> ScrapeResult<u64> {
    let number = raw
        .trim()
        .trim_end_matches("views")
        .trim_end_matches("view")
        .trim();

    let (digits, multiplier) = match number.chars().last() {
        Some('K') => (&number[..number.len() - 1], 1_000.0),
        Some('M') => (&number[..number.len() - 1], 1_000_000.0),
        Some(c) if c.is_ascii_digit() => (number, 1.0),
        _ => {
            return Err(ScrapeError::Parse {
                what: "view count",
                input: raw.to_string(),
            })
        }
    };

    let value: f64 = digits
        .replace(',', "")
        .parse()
        .map_err(|_| ScrapeError::Parse {
            what: "view count",
            input: raw.to_string(),
        })?;
    Ok((value * multiplier).round() as u64)
}

/// Parse a release date in either "Month Day, Year" or bare-year form.
pub fn parse_release_date(raw: &str) -> ScrapeResult<NaiveDate> {
    let text = raw.trim();
    for format in ["%B %d, %Y", "%B %d %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date);
        }
    }
    if let Ok(year) = text.parse::<i32>() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
            return Ok(date);
        }
    }
    Err(ScrapeError::Parse {
        what: "release date",
        input: text.to_string(),
    })
}

/// Lyrics of a song page as an ordered sequence of lines.
///
/// Bracketed section markers ("[Chorus]" and friends) are filtered out
/// and layout whitespace characters normalized. Use [`flatten_lyrics`]
/// for a single display string.
#[must_use]
pub fn lyric_lines(doc: &Html) -> Vec<String> {
    let container_sel = sel("div[data-lyrics-container='true']");
    let mut lines = Vec::new();
    for container in doc.select(&container_sel) {
        for chunk in container.text() {
            let cleaned = chunk.replace('\u{2005}', " ");
            let cleaned = section_marker_re().replace_all(&cleaned, "");
            let cleaned = cleaned.trim();
            if !cleaned.is_empty() {
                lines.push(cleaned.to_string());
            }
        }
    }
    lines
}

/// Join lyric lines into one display string.
#[must_use]
pub fn flatten_lyrics(lines: &[String]) -> String {
    static SPACES: OnceLock<Regex> = OnceLock::new();
    let spaces = SPACES.get_or_init(|| Regex::new(r"\s{2,}").expect("valid spaces regex"));

    let joined = lines.join(" ");
    let joined = spaces.replace_all(&joined, " ");
    let joined = joined.replace("( ", "(").replace(" )", ")");
    joined.trim().to_string()
}

/// Names credited in the given role on a song page.
///
/// The credit block is located by its label text, matched against the
/// role's accepted label variants. Label text and separator literals that
/// leak into the extraction are excluded.
#[must_use]
pub fn credits(doc: &Html, role: CreditRole) -> Vec<String> {
    let block_sel = sel("div[class*='SongInfo__Credit']");
    let mut names = Vec::new();
    for block in doc.select(&block_sel) {
        let chunks: Vec<&str> = block.text().collect();
        let has_label = chunks
            .iter()
            .any(|chunk| role.labels().contains(&chunk.trim()));
        if !has_label {
            continue;
        }
        names.extend(
            chunks
                .iter()
                .filter(|chunk| !CREDIT_ARTIFACTS.contains(&chunk.trim_matches('\n')))
                .map(|chunk| chunk.trim().to_string())
                .filter(|name| !name.is_empty()),
        );
    }
    names
}

/// Genre/descriptor tags from a song page's tag container.
#[must_use]
pub fn tags(doc: &Html) -> Vec<String> {
    let tag_sel = sel("div[class*='SongTags__Container']");
    let mut tags = Vec::new();
    for container in doc.select(&tag_sel) {
        tags.extend(
            container
                .text()
                .map(|chunk| chunk.trim().to_string())
                .filter(|tag| !tag.is_empty()),
        );
    }
    tags
}

/// Album title from an album page header.
#[must_use]
pub fn album_title(doc: &Html) -> Option<String> {
    let title_sel = sel("h1[class*='header_with_cover_art']");
    let el = doc.select(&title_sel).next()?;
    let title = clean_title(&el.text().collect::<String>());
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Song title from a song page header.
#[must_use]
pub fn song_title(doc: &Html) -> Option<String> {
    let title_sel = sel("h1[class*='SongHeaderdesktop']");
    let el = doc.select(&title_sel).next()?;
    let title = clean_title(&el.text().collect::<String>());
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Track position from a song page's header tracklist line ("Track 5 on
/// ..."). 0 when the page carries no position.
#[must_use]
pub fn track_number(doc: &Html) -> u32 {
    let header_sel = sel("div[class*='HeaderArtistAndTracklist']");
    for el in doc.select(&header_sel) {
        // The position lives in the element's own text, not its children.
        for child in el.children() {
            if let Some(text) = child.value().as_text() {
                let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
                if !digits.is_empty() {
                    return digits.parse().unwrap_or(0);
                }
            }
        }
    }
    0
}
