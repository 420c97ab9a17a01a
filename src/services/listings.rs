//! View-model assembly for the directory pages.
//!
//! Everything here is a pure function over rows the db layer already
//! fetched; handlers shape page data with these and nothing else.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::models::{Artist, ShowListing, Venue};

/// One entry in a directory or search listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues sharing one (city, state) pair.
#[derive(Debug, Clone)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingSummary>,
}

#[derive(Debug, Clone)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

/// Split shows into (upcoming, past) relative to `now`.
///
/// Strictly after `now` is upcoming, strictly before is past; a show
/// starting exactly at `now` lands in neither bucket. Input order is
/// preserved within each bucket.
pub fn partition_shows_by_time(
    shows: Vec<ShowListing>,
    now: NaiveDateTime,
) -> (Vec<ShowListing>, Vec<ShowListing>) {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();
    for show in shows {
        if show.start_time > now {
            upcoming.push(show);
        } else if show.start_time < now {
            past.push(show);
        }
    }
    (upcoming, past)
}

/// Group venues by (city, state), annotating each venue with its
/// upcoming-show count. Every venue lands in exactly one group; groups
/// come out ordered by city then state.
pub fn group_venues_by_location(
    venues: Vec<(Venue, Vec<ShowListing>)>,
    now: NaiveDateTime,
) -> Vec<LocationGroup> {
    let mut groups: BTreeMap<(String, String), Vec<ListingSummary>> = BTreeMap::new();
    for (venue, shows) in venues {
        let (upcoming, _) = partition_shows_by_time(shows, now);
        groups
            .entry((venue.city, venue.state))
            .or_default()
            .push(ListingSummary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows: upcoming.len(),
            });
    }

    groups
        .into_iter()
        .map(|((city, state), venues)| LocationGroup { city, state, venues })
        .collect()
}

/// Anything searchable by display name.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for Venue {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Artist {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match on the name field. The empty term
/// matches every record. No ranking and no limit; input order is kept.
pub fn search_by_name<T: Named>(records: Vec<T>, term: &str) -> SearchResults<T> {
    let needle = term.to_lowercase();
    let data: Vec<T> = records
        .into_iter()
        .filter(|record| record.display_name().to_lowercase().contains(&needle))
        .collect();

    SearchResults { count: data.len(), data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use proptest::prelude::*;

    fn at(seconds: i64) -> NaiveDateTime {
        DateTime::from_timestamp(seconds, 0).unwrap().naive_utc()
    }

    fn listing(start_time: NaiveDateTime) -> ShowListing {
        ShowListing {
            venue_id: 1,
            venue_name: "Park Square Live".to_string(),
            venue_image_link: None,
            artist_id: 2,
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: None,
            start_time,
        }
    }

    fn venue(id: i64, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "123 Main St".to_string(),
            phone: None,
            image_link: None,
            facebook_link: None,
            genres: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[test]
    fn partition_respects_strict_boundaries() {
        let now = at(1_000);
        let shows = vec![listing(at(500)), listing(at(1_000)), listing(at(1_500))];

        let (upcoming, past) = partition_shows_by_time(shows, now);

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].start_time, at(1_500));
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].start_time, at(500));
        // the show starting exactly at `now` is in neither bucket
    }

    #[test]
    fn partition_preserves_input_order() {
        let now = at(0);
        let shows = vec![listing(at(30)), listing(at(10)), listing(at(20))];

        let (upcoming, past) = partition_shows_by_time(shows, now);

        let starts: Vec<_> = upcoming.iter().map(|s| s.start_time).collect();
        assert_eq!(starts, vec![at(30), at(10), at(20)]);
        assert!(past.is_empty());
    }

    #[test]
    fn grouping_yields_one_group_per_location() {
        let now = at(1_000);
        let venues = vec![
            (venue(1, "The Musical Hop", "San Francisco", "CA"), vec![listing(at(2_000))]),
            (venue(2, "Park Square Live", "New York", "NY"), vec![]),
            (
                venue(3, "The Dueling Pianos Bar", "San Francisco", "CA"),
                vec![listing(at(500)), listing(at(3_000))],
            ),
        ];

        let groups = group_venues_by_location(venues, now);

        assert_eq!(groups.len(), 2);
        let sf = groups
            .iter()
            .find(|g| g.city == "San Francisco" && g.state == "CA")
            .unwrap();
        assert_eq!(sf.venues.len(), 2);
        assert_eq!(sf.venues[0].num_upcoming_shows, 1);
        assert_eq!(sf.venues[1].num_upcoming_shows, 1);

        let total: usize = groups.iter().map(|g| g.venues.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![
            venue(1, "The Blue Note", "SF", "CA"),
            venue(2, "Blue House", "SF", "CA"),
            venue(3, "Red Room", "SF", "CA"),
        ];

        let results = search_by_name(records, "blue");

        assert_eq!(results.count, 2);
        let names: Vec<_> = results.data.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["The Blue Note", "Blue House"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let records = vec![
            venue(1, "The Blue Note", "SF", "CA"),
            venue(2, "Red Room", "SF", "CA"),
        ];

        let results = search_by_name(records, "");

        assert_eq!(results.count, 2);
        assert_eq!(results.data.len(), 2);
    }

    proptest! {
        // Every show lands in exactly one of upcoming/past, except a show
        // starting exactly at `now`, which lands in neither.
        #[test]
        fn every_show_in_exactly_one_bucket(
            starts in proptest::collection::vec(-100_000i64..100_000, 0..50),
            now in -100_000i64..100_000,
        ) {
            let now = at(now);
            let shows: Vec<_> = starts.iter().map(|&s| listing(at(s))).collect();
            let at_now = shows.iter().filter(|s| s.start_time == now).count();

            let (upcoming, past) = partition_shows_by_time(shows.clone(), now);

            prop_assert_eq!(upcoming.len() + past.len() + at_now, shows.len());
            prop_assert!(upcoming.iter().all(|s| s.start_time > now));
            prop_assert!(past.iter().all(|s| s.start_time < now));
        }
    }
}
