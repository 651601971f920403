//! Typed operation parameters.
//!
//! The wire protocol takes loosely-typed query strings; these types make the
//! legal values unrepresentable-by-mistake on the Rust side. Each enum
//! renders to the exact token the service expects.

use std::fmt;

/// Sort order for [`user_badges`](super::UntappdClient::user_badges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSort {
    /// All badge kinds (the service default).
    #[default]
    All,
    /// Beer badges only.
    Beer,
    /// Venue badges only.
    Venue,
    /// Special-event badges only.
    Special,
}

impl fmt::Display for BadgeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::All => "all",
            Self::Beer => "beer",
            Self::Venue => "venue",
            Self::Special => "special",
        };
        f.write_str(token)
    }
}

/// Result ordering for [`beer_search`](super::UntappdClient::beer_search).
///
/// Omitting the sort leaves the service's relevance ordering in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSort {
    /// Order by checkin count.
    Count,
    /// Order alphabetically by name.
    Name,
}

impl fmt::Display for SearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Count => "count",
            Self::Name => "name",
        };
        f.write_str(token)
    }
}

/// Brewery scale filter for [`public_trending`](super::UntappdClient::public_trending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingKind {
    /// All breweries (the service default).
    #[default]
    All,
    /// Macro breweries only.
    Macro,
    /// Micro breweries only.
    Micro,
    /// Local breweries only.
    Local,
}

impl fmt::Display for TrendingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::All => "all",
            Self::Macro => "macro",
            Self::Micro => "micro",
            Self::Local => "local",
        };
        f.write_str(token)
    }
}

/// Checkin age window for [`public_trending`](super::UntappdClient::public_trending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingAge {
    /// Checkins from the last day (the service default).
    #[default]
    Daily,
    /// Checkins from the last week.
    Weekly,
    /// Checkins from the last month.
    Monthly,
}

impl fmt::Display for TrendingAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        };
        f.write_str(token)
    }
}

/// Default and maximum result count for the trending feed.
pub(crate) const TRENDING_DEFAULT_LIMIT: u8 = 10;

/// Normalizes a trending result limit.
///
/// Out-of-range values silently fall back to the default instead of failing;
/// this mirrors the service client's historical behavior and is intentionally
/// asymmetric with the hard failure on an out-of-range checkin rating.
pub(crate) fn normalize_trending_limit(limit: Option<u8>) -> u8 {
    match limit {
        Some(limit) if (1..=TRENDING_DEFAULT_LIMIT).contains(&limit) => limit,
        _ => TRENDING_DEFAULT_LIMIT,
    }
}

/// Cursor/offset paging shared by the feed operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    /// Numeric ID of the newest checkin already seen; the feed resumes
    /// after it.
    pub since: Option<u64>,
    /// Offset into the result set.
    pub offset: Option<u64>,
}

impl Paging {
    /// Paging that starts at the beginning of the feed.
    #[must_use]
    pub fn start() -> Self {
        Self::default()
    }

    /// Resume after the given checkin ID.
    #[must_use]
    pub fn since(since: u64) -> Self {
        Self {
            since: Some(since),
            ..Self::default()
        }
    }

    /// Skip into the result set by the given offset.
    #[must_use]
    pub fn offset(offset: u64) -> Self {
        Self {
            offset: Some(offset),
            ..Self::default()
        }
    }
}

/// Geographic filter for the public and trending feeds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoFilter {
    /// Latitude of the search center.
    pub latitude: Option<f64>,
    /// Longitude of the search center.
    pub longitude: Option<f64>,
    /// Radius in miles around the center.
    pub radius: Option<u32>,
}

impl GeoFilter {
    /// A filter centered on the given coordinates, unbounded radius.
    #[must_use]
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            radius: None,
        }
    }

    /// Restricts the filter to a radius in miles.
    #[must_use]
    pub fn within(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Arguments for [`checkin`](super::UntappdClient::checkin).
///
/// Only the GMT offset and the beer are required; everything else is opt-in.
///
/// ```
/// use untappd_client::Checkin;
///
/// let checkin = Checkin::new(-5, 12345)
///     .at_venue("67e55044", 40.7128, -74.0060)
///     .shout("Cheers!")
///     .rating(4)
///     .share_on_twitter(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Checkin {
    /// Hours the user is away from GMT.
    pub gmt_offset: i32,
    /// Untappd beer ID being checked in.
    pub beer_id: u64,
    /// Foursquare venue hash ID; requires coordinates when set.
    pub foursquare_id: Option<String>,
    /// Latitude of the user, required alongside `foursquare_id`.
    pub user_lat: Option<f64>,
    /// Longitude of the user, required alongside `foursquare_id`.
    pub user_lng: Option<f64>,
    /// Comment text attached to the checkin.
    pub shout: Option<String>,
    /// Share the checkin on Facebook.
    pub facebook: bool,
    /// Share the checkin on Twitter.
    pub twitter: bool,
    /// Also check in on Foursquare.
    pub foursquare: bool,
    /// Star rating for the beer, 1 through 5.
    pub rating: Option<u8>,
}

impl Checkin {
    /// A minimal checkin of `beer_id` from a user `gmt_offset` hours from
    /// GMT. Sharing defaults to off.
    #[must_use]
    pub fn new(gmt_offset: i32, beer_id: u64) -> Self {
        Self {
            gmt_offset,
            beer_id,
            foursquare_id: None,
            user_lat: None,
            user_lng: None,
            shout: None,
            facebook: false,
            twitter: false,
            foursquare: false,
            rating: None,
        }
    }

    /// Attaches a venue. The service requires the user's coordinates
    /// whenever a venue is given, so they are taken together here.
    #[must_use]
    pub fn at_venue(mut self, foursquare_id: impl Into<String>, lat: f64, lng: f64) -> Self {
        self.foursquare_id = Some(foursquare_id.into());
        self.user_lat = Some(lat);
        self.user_lng = Some(lng);
        self
    }

    /// Attaches a comment.
    #[must_use]
    pub fn shout(mut self, shout: impl Into<String>) -> Self {
        self.shout = Some(shout.into());
        self
    }

    /// Attaches a 1-5 star rating. Validated when the checkin is sent.
    #[must_use]
    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Toggles sharing on Facebook.
    #[must_use]
    pub fn share_on_facebook(mut self, share: bool) -> Self {
        self.facebook = share;
        self
    }

    /// Toggles sharing on Twitter.
    #[must_use]
    pub fn share_on_twitter(mut self, share: bool) -> Self {
        self.twitter = share;
        self
    }

    /// Toggles the companion Foursquare checkin.
    #[must_use]
    pub fn share_on_foursquare(mut self, share: bool) -> Self {
        self.foursquare = share;
        self
    }
}
