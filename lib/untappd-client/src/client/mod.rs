use tracing::debug;
use url::Url;

mod auth;
pub use self::auth::Credentials;

mod builder;
pub use self::builder::UntappdClientBuilder;

mod endpoint;
pub use self::endpoint::Endpoint;

mod error;
pub use self::error::UntappdError;

mod params;
pub use self::params::{BadgeSort, Checkin, GeoFilter, Paging, SearchSort, TrendingAge, TrendingKind};
use self::params::normalize_trending_limit;

mod query;
use self::query::QueryParams;

mod response;
pub use self::response::ApiResponse;

/// Async client for the Untappd v3 REST API.
///
/// Every operation runs the same pipeline: validate the arguments locally,
/// gate on authentication where the service demands it, build the request
/// URL (API key appended, absent optionals omitted), issue a single HTTP
/// GET, and classify the reply envelope. The outcome is a decoded
/// [`ApiResponse`] or a typed [`UntappdError`]; nothing is retried and no
/// timeout is imposed by the library (configure one on the `reqwest` client
/// via [`UntappdClientBuilder::with_http_client`] if needed).
///
/// The client holds no per-call mutable state — request/response diagnostics
/// travel inside the result — so sharing a clone across concurrent calls is
/// safe.
///
/// # Example
///
/// ```rust,no_run
/// use untappd_client::UntappdClient;
///
/// # async fn example() -> Result<(), untappd_client::UntappdError> {
/// let client = UntappdClient::builder("my-api-key").build()?;
/// let response = client.beer_info(1234).await?;
/// println!("{}", response.value()["results"]["beer"]["beer_name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UntappdClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    credentials: Option<Credentials>,
}

impl UntappdClient {
    /// Starts building a client around the given API key.
    pub fn builder(api_key: impl Into<String>) -> UntappdClientBuilder {
        UntappdClientBuilder::new(api_key)
    }

    /// Sets or clears the authenticated user.
    ///
    /// With both values non-empty, credentials are derived (username plus
    /// MD5 password hash, the scheme the service signs with) and
    /// authenticated operations become available. Passing an empty username
    /// or password explicitly clears any previously set credentials.
    pub fn set_authenticated_user(&mut self, username: &str, password: &str) -> &mut Self {
        if !username.is_empty() && !password.is_empty() {
            self.credentials = Some(Credentials::derive(username, password));
        } else {
            self.credentials = None;
        }
        self
    }

    /// Whether user credentials are currently configured.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// The configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

// The shared request pipeline.
impl UntappdClient {
    async fn request(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<ApiResponse, UntappdError> {
        if endpoint.requires_auth() && self.credentials.is_none() {
            return Err(UntappdError::AuthenticationRequired);
        }

        let url = self.request_url(endpoint, params)?;
        let raw_body = self.execute(url.clone()).await?;
        ApiResponse::classify(url, raw_body)
    }

    fn request_url(&self, endpoint: Endpoint, params: QueryParams) -> Result<Url, UntappdError> {
        let query = params.into_query_string(&self.api_key)?;
        let target = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.path()
        );
        let mut url = Url::parse(&target)
            .map_err(|error| UntappdError::validation(format!("invalid request URL: {error}")))?;
        url.set_query(Some(&query));
        Ok(url)
    }

    async fn execute(&self, url: Url) -> Result<String, UntappdError> {
        let mut request = self.http.get(url.clone());
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(credentials.username(), Some(credentials.password_hash()));
        }

        debug!(%url, "sending...");
        let response = request.send().await.map_err(|error| UntappdError::Transport {
            url: url.clone(),
            message: error.to_string(),
        })?;
        debug!(status = %response.status(), "...receiving");

        response.text().await.map_err(|error| UntappdError::Transport {
            url,
            message: error.to_string(),
        })
    }

    /// Resolves the username-or-authentication rule shared by the user
    /// operations: an explicit username wins, otherwise credentials must be
    /// present for the service to default to the authenticated user.
    fn resolve_user<'name>(
        &self,
        username: Option<&'name str>,
    ) -> Result<Option<&'name str>, UntappdError> {
        match username {
            Some(name) if !name.is_empty() => Ok(Some(name)),
            _ if self.credentials.is_some() => Ok(None),
            _ => Err(UntappdError::validation(
                "username parameter or Untappd authentication parameters must be set",
            )),
        }
    }
}

fn require_id(id: u64, name: &str) -> Result<u64, UntappdError> {
    if id == 0 {
        return Err(UntappdError::validation(format!(
            "{name} parameter must be set and not empty"
        )));
    }
    Ok(id)
}

fn require_text<'text>(value: &'text str, name: &str) -> Result<&'text str, UntappdError> {
    if value.is_empty() {
        return Err(UntappdError::validation(format!(
            "{name} parameter must be set and not empty"
        )));
    }
    Ok(value)
}

// User operations.
impl UntappdClient {
    /// Gets a user's profile. Falls back to the authenticated user when no
    /// username is given.
    pub async fn user_info(&self, username: Option<&str>) -> Result<ApiResponse, UntappdError> {
        let username = self.resolve_user(username)?;
        let params = QueryParams::new().set_opt("user", username);
        self.request(Endpoint::User, params).await
    }

    /// Gets a user's checkin feed.
    pub async fn user_feed(
        &self,
        username: Option<&str>,
        paging: Paging,
    ) -> Result<ApiResponse, UntappdError> {
        let username = self.resolve_user(username)?;
        let params = QueryParams::new()
            .set_opt("user", username)
            .set_opt("since", paging.since)
            .set_opt("offset", paging.offset);
        self.request(Endpoint::UserFeed, params).await
    }

    /// Gets a user's distinct beer list.
    pub async fn user_distinct_beers(
        &self,
        username: Option<&str>,
        offset: Option<u64>,
    ) -> Result<ApiResponse, UntappdError> {
        let username = self.resolve_user(username)?;
        let params = QueryParams::new()
            .set_opt("user", username)
            .set_opt("offset", offset);
        self.request(Endpoint::UserDistinct, params).await
    }

    /// Gets a user's friends list.
    pub async fn user_friends(
        &self,
        username: Option<&str>,
        offset: Option<u64>,
    ) -> Result<ApiResponse, UntappdError> {
        let username = self.resolve_user(username)?;
        let params = QueryParams::new()
            .set_opt("user", username)
            .set_opt("offset", offset);
        self.request(Endpoint::Friends, params).await
    }

    /// Gets a user's wishlist.
    pub async fn user_wishlist(
        &self,
        username: Option<&str>,
        offset: Option<u64>,
    ) -> Result<ApiResponse, UntappdError> {
        let username = self.resolve_user(username)?;
        let params = QueryParams::new()
            .set_opt("user", username)
            .set_opt("offset", offset);
        self.request(Endpoint::WishList, params).await
    }

    /// Gets the badges a user has earned, in the given sort order.
    pub async fn user_badges(
        &self,
        username: Option<&str>,
        sort: BadgeSort,
    ) -> Result<ApiResponse, UntappdError> {
        let username = self.resolve_user(username)?;
        let params = QueryParams::new()
            .set_opt("user", username)
            .set("sort", sort);
        self.request(Endpoint::UserBadge, params).await
    }
}

// Beer, venue, and brewery operations.
impl UntappdClient {
    /// Gets a beer's critical info.
    pub async fn beer_info(&self, beer_id: u64) -> Result<ApiResponse, UntappdError> {
        let beer_id = require_id(beer_id, "beerId")?;
        let params = QueryParams::new().set("bid", beer_id);
        self.request(Endpoint::BeerInfo, params).await
    }

    /// Searches beers matching the query string.
    pub async fn beer_search(
        &self,
        query: &str,
        offset: Option<u64>,
        sort: Option<SearchSort>,
    ) -> Result<ApiResponse, UntappdError> {
        let query = require_text(query, "searchString")?;
        let params = QueryParams::new()
            .set("q", query)
            .set_opt("offset", offset)
            .set_opt("sort", sort);
        self.request(Endpoint::BeerSearch, params).await
    }

    /// Gets all checkins for a beer.
    pub async fn beer_feed(
        &self,
        beer_id: u64,
        paging: Paging,
    ) -> Result<ApiResponse, UntappdError> {
        let beer_id = require_id(beer_id, "beerId")?;
        let params = QueryParams::new()
            .set("bid", beer_id)
            .set_opt("since", paging.since)
            .set_opt("offset", paging.offset);
        self.request(Endpoint::BeerCheckins, params).await
    }

    /// Gets information about a venue.
    pub async fn venue_info(&self, venue_id: u64) -> Result<ApiResponse, UntappdError> {
        let venue_id = require_id(venue_id, "venueId")?;
        let params = QueryParams::new().set("venue_id", venue_id);
        self.request(Endpoint::VenueInfo, params).await
    }

    /// Gets all checkins at a venue.
    pub async fn venue_feed(
        &self,
        venue_id: u64,
        paging: Paging,
    ) -> Result<ApiResponse, UntappdError> {
        let venue_id = require_id(venue_id, "venueId")?;
        let params = QueryParams::new()
            .set("venue_id", venue_id)
            .set_opt("since", paging.since)
            .set_opt("offset", paging.offset);
        self.request(Endpoint::VenueCheckins, params).await
    }

    /// Gets a brewery's basic info.
    pub async fn brewery_info(&self, brewery_id: u64) -> Result<ApiResponse, UntappdError> {
        let brewery_id = require_id(brewery_id, "breweryId")?;
        let params = QueryParams::new().set("brewery_id", brewery_id);
        self.request(Endpoint::BreweryInfo, params).await
    }

    /// Gets all checkins for a brewery's beers.
    pub async fn brewery_feed(
        &self,
        brewery_id: u64,
        paging: Paging,
    ) -> Result<ApiResponse, UntappdError> {
        let brewery_id = require_id(brewery_id, "breweryId")?;
        let params = QueryParams::new()
            .set("brewery_id", brewery_id)
            .set_opt("since", paging.since)
            .set_opt("offset", paging.offset);
        self.request(Endpoint::BreweryCheckins, params).await
    }

    /// Searches breweries matching the query string. The service requires
    /// user authentication for this operation.
    pub async fn brewery_search(&self, query: &str) -> Result<ApiResponse, UntappdError> {
        let query = require_text(query, "searchString")?;
        let params = QueryParams::new().set("q", query);
        self.request(Endpoint::BrewerySearch, params).await
    }
}

// Public feeds.
impl UntappdClient {
    /// Gets the public checkin feed, also known as "the pub".
    pub async fn public_feed(
        &self,
        paging: Paging,
        geo: GeoFilter,
    ) -> Result<ApiResponse, UntappdError> {
        let params = QueryParams::new()
            .set_opt("since", paging.since)
            .set_opt("offset", paging.offset)
            .set_opt("geolng", geo.longitude)
            .set_opt("geolat", geo.latitude)
            .set_opt("radius", geo.radius);
        self.request(Endpoint::ThePub, params).await
    }

    /// Gets the trending beer list.
    ///
    /// A `limit` outside 1..=10 (or `None`) falls back to the default of 10
    /// rather than failing.
    pub async fn public_trending(
        &self,
        kind: TrendingKind,
        limit: Option<u8>,
        age: TrendingAge,
        geo: GeoFilter,
    ) -> Result<ApiResponse, UntappdError> {
        let limit = normalize_trending_limit(limit);
        let params = QueryParams::new()
            .set("type", kind)
            .set("limit", limit)
            .set("age", age)
            .set_opt("geolat", geo.latitude)
            .set_opt("geolng", geo.longitude)
            .set_opt("radius", geo.radius);
        self.request(Endpoint::Trending, params).await
    }

    /// Gets the details of one checkin.
    pub async fn checkin_info(&self, checkin_id: u64) -> Result<ApiResponse, UntappdError> {
        let checkin_id = require_id(checkin_id, "checkinId")?;
        let params = QueryParams::new().set("id", checkin_id);
        self.request(Endpoint::CheckinDetails, params).await
    }
}

// Authenticated operations.
impl UntappdClient {
    /// Gets the authenticated user's friend feed.
    pub async fn friend_feed(&self, paging: Paging) -> Result<ApiResponse, UntappdError> {
        let params = QueryParams::new()
            .set_opt("since", paging.since)
            .set_opt("offset", paging.offset);
        self.request(Endpoint::FriendFeed, params).await
    }

    /// Adds a beer to the authenticated user's wishlist.
    pub async fn add_to_wishlist(&self, beer_id: u64) -> Result<ApiResponse, UntappdError> {
        let beer_id = require_id(beer_id, "beerId")?;
        let params = QueryParams::new().set("bid", beer_id);
        self.request(Endpoint::AddToWish, params).await
    }

    /// Removes a beer from the authenticated user's wishlist.
    pub async fn remove_from_wishlist(&self, beer_id: u64) -> Result<ApiResponse, UntappdError> {
        let beer_id = require_id(beer_id, "beerId")?;
        let params = QueryParams::new().set("bid", beer_id);
        self.request(Endpoint::RemoveFromWish, params).await
    }

    /// Lists pending friend requests for the authenticated user.
    pub async fn pending_friends(&self) -> Result<ApiResponse, UntappdError> {
        self.request(Endpoint::FriendPending, QueryParams::new())
            .await
    }

    /// Sends a friend request to the given user.
    pub async fn request_friend(&self, user_id: u64) -> Result<ApiResponse, UntappdError> {
        let user_id = require_id(user_id, "userId")?;
        let params = QueryParams::new().set("target_id", user_id);
        self.request(Endpoint::FriendRequest, params).await
    }

    /// Accepts a friend request from the given user.
    pub async fn accept_friend_request(&self, user_id: u64) -> Result<ApiResponse, UntappdError> {
        let user_id = require_id(user_id, "requestingUserId")?;
        let params = QueryParams::new().set("target_id", user_id);
        self.request(Endpoint::FriendAccept, params).await
    }

    /// Rejects a friend request from the given user.
    pub async fn reject_friend_request(&self, user_id: u64) -> Result<ApiResponse, UntappdError> {
        let user_id = require_id(user_id, "requestingUserId")?;
        let params = QueryParams::new().set("target_id", user_id);
        self.request(Endpoint::FriendReject, params).await
    }

    /// Un-friends the given user.
    pub async fn remove_friend(&self, user_id: u64) -> Result<ApiResponse, UntappdError> {
        let user_id = require_id(user_id, "friendUserId")?;
        let params = QueryParams::new().set("target_id", user_id);
        self.request(Endpoint::FriendRevoke, params).await
    }

    /// Performs a live checkin.
    ///
    /// When a Foursquare venue is attached, the user's coordinates are
    /// required by the service; a rating, when given, must be 1 through 5.
    pub async fn checkin(&self, checkin: Checkin) -> Result<ApiResponse, UntappdError> {
        require_id(checkin.beer_id, "beerId")?;

        if checkin.foursquare_id.is_some()
            && (checkin.user_lat.is_none() || checkin.user_lng.is_none())
        {
            return Err(UntappdError::validation(
                "userLat and userLong parameters required since foursquareId is set",
            ));
        }

        if let Some(rating) = checkin.rating {
            if !(1..=5).contains(&rating) {
                return Err(UntappdError::validation(
                    "if set, rating must be an integer between 1 and 5",
                ));
            }
        }

        let params = QueryParams::new()
            .set("gmt_offset", checkin.gmt_offset)
            .set("bid", checkin.beer_id)
            .set_opt("foursquare_id", checkin.foursquare_id.as_deref())
            .set_opt("user_lat", checkin.user_lat)
            .set_opt("user_long", checkin.user_lng)
            .set_opt("shout", checkin.shout.as_deref())
            .set_flag("facebook", checkin.facebook)
            .set_flag("twitter", checkin.twitter)
            .set_flag("foursquare", checkin.foursquare)
            .set_opt("rating_value", checkin.rating);
        self.request(Endpoint::Checkin, params).await
    }

    /// Adds a comment to a checkin.
    pub async fn comment_on_checkin(
        &self,
        checkin_id: u64,
        comment: &str,
    ) -> Result<ApiResponse, UntappdError> {
        let checkin_id = require_id(checkin_id, "checkinId")?;
        let comment = require_text(comment, "comment")?;
        let params = QueryParams::new()
            .set("checkin_id", checkin_id)
            .set("comment", comment);
        self.request(Endpoint::AddComment, params).await
    }

    /// Removes a comment from a checkin.
    pub async fn remove_comment(&self, comment_id: u64) -> Result<ApiResponse, UntappdError> {
        let comment_id = require_id(comment_id, "commentId")?;
        let params = QueryParams::new().set("comment_id", comment_id);
        self.request(Endpoint::DeleteComment, params).await
    }

    /// Toasts a checkin.
    pub async fn toast_checkin(&self, checkin_id: u64) -> Result<ApiResponse, UntappdError> {
        let checkin_id = require_id(checkin_id, "checkinId")?;
        let params = QueryParams::new().set("checkin_id", checkin_id);
        self.request(Endpoint::Toast, params).await
    }

    /// Removes a toast from a checkin.
    pub async fn remove_toast(&self, comment_id: u64) -> Result<ApiResponse, UntappdError> {
        let comment_id = require_id(comment_id, "commentId")?;
        let params = QueryParams::new().set("comment_id", comment_id);
        self.request(Endpoint::DeleteToast, params).await
    }
}
