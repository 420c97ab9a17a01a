//! Form payloads for the create/edit/search routes.
//!
//! Every mutating route binds one of these via `axum::Form` and runs the
//! `validator` checks before anything touches the database. Optional
//! fields posted as blank strings are normalized to `None` first, so an
//! empty URL input does not trip the URL check.

use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::models::{NewArtist, NewShow, NewVenue};

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Flatten validation errors into one flash-able line.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => parts.push(message.to_string()),
                None => parts.push(format!("{field} is invalid")),
            }
        }
    }
    parts.sort();
    parts.join("; ")
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    pub phone: Option<String>,
    #[validate(url(message = "image link must be a valid URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    pub genres: Option<String>,
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
    // checkbox: present when ticked, absent otherwise
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.city = self.city.trim().to_string();
        self.state = self.state.trim().to_string();
        self.address = self.address.trim().to_string();
        self.phone = blank_to_none(self.phone);
        self.image_link = blank_to_none(self.image_link);
        self.facebook_link = blank_to_none(self.facebook_link);
        self.genres = blank_to_none(self.genres);
        self.website = blank_to_none(self.website);
        self.seeking_description = blank_to_none(self.seeking_description);
        self
    }

    pub fn into_new(self) -> NewVenue {
        NewVenue {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            genres: self.genres,
            website: self.website,
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: self.seeking_description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ArtistForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    pub phone: Option<String>,
    pub genres: Option<String>,
    #[validate(url(message = "image link must be a valid URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.city = self.city.trim().to_string();
        self.state = self.state.trim().to_string();
        self.phone = blank_to_none(self.phone);
        self.genres = blank_to_none(self.genres);
        self.image_link = blank_to_none(self.image_link);
        self.facebook_link = blank_to_none(self.facebook_link);
        self.website = blank_to_none(self.website);
        self.seeking_description = blank_to_none(self.seeking_description);
        self
    }

    pub fn into_new(self) -> NewArtist {
        NewArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website: self.website,
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: self.seeking_description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShowForm {
    #[validate(range(min = 1, message = "artist id must be a positive id"))]
    pub artist_id: i64,
    #[validate(range(min = 1, message = "venue id must be a positive id"))]
    pub venue_id: i64,
    #[validate(length(min = 1, message = "start time is required"))]
    pub start_time: String,
}

impl ShowForm {
    /// Accepts both the plain `YYYY-MM-DD HH:MM:SS` form and the
    /// `datetime-local` input format.
    pub fn parsed_start_time(&self) -> Option<NaiveDateTime> {
        let raw = self.start_time.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .ok()
    }

    pub fn into_new(self, start_time: NaiveDateTime) -> NewShow {
        NewShow {
            venue_id: self.venue_id,
            artist_id: self.artist_id,
            start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_form() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("".to_string()),
            image_link: Some("  ".to_string()),
            facebook_link: Some("https://www.facebook.com/themusicalhop".to_string()),
            genres: Some("Jazz,Classical".to_string()),
            website: None,
            seeking_talent: Some("y".to_string()),
            seeking_description: Some("Seeking local artists".to_string()),
        }
    }

    #[test]
    fn blank_optionals_normalize_to_none() {
        let form = venue_form().normalized();
        assert!(form.phone.is_none());
        assert!(form.image_link.is_none());
        assert!(form.validate().is_ok());

        let venue = form.into_new();
        assert!(venue.seeking_talent);
        assert_eq!(venue.genres.as_deref(), Some("Jazz,Classical"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = venue_form();
        form.name = "   ".to_string();
        let form = form.normalized();

        let errors = form.validate().unwrap_err();
        assert!(describe_errors(&errors).contains("name is required"));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let mut form = venue_form();
        form.facebook_link = Some("not a url".to_string());
        let form = form.normalized();

        let errors = form.validate().unwrap_err();
        assert!(describe_errors(&errors).contains("facebook link"));
    }

    #[test]
    fn show_form_parses_both_datetime_shapes() {
        let mut form = ShowForm {
            artist_id: 1,
            venue_id: 2,
            start_time: "2035-06-15 20:00:00".to_string(),
        };
        assert!(form.parsed_start_time().is_some());

        form.start_time = "2035-06-15T20:00".to_string();
        assert!(form.parsed_start_time().is_some());

        form.start_time = "next friday".to_string();
        assert!(form.parsed_start_time().is_none());
    }

    #[test]
    fn show_form_rejects_non_positive_ids() {
        let form = ShowForm {
            artist_id: 0,
            venue_id: 2,
            start_time: "2035-06-15 20:00:00".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
