pub mod artist;
pub mod show;
pub mod venue;

pub use artist::{Artist, NewArtist};
pub use show::{NewShow, ShowListing};
pub use venue::{NewVenue, Venue};
