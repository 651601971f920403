use std::fmt;

/// The fixed catalog of remote operations exposed by the Untappd v3 API.
///
/// Each variant maps to the path segment appended to the base URL and knows
/// whether the service demands user authentication for it. New operations
/// are added here first; the client methods are thin wrappers over this
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// User profile lookup (`user`).
    User,
    /// A user's checkin feed (`user_feed`).
    UserFeed,
    /// A user's distinct beer list (`user_distinct`).
    UserDistinct,
    /// A user's friends list (`friends`).
    Friends,
    /// A user's wishlist (`wish_list`).
    WishList,
    /// A user's earned badges (`user_badge`).
    UserBadge,
    /// Beer details (`beer_info`).
    BeerInfo,
    /// Beer name search (`beer_search`).
    BeerSearch,
    /// Checkins for one beer (`beer_checkins`).
    BeerCheckins,
    /// Venue details (`venue_info`).
    VenueInfo,
    /// Checkins at one venue (`venue_checkins`).
    VenueCheckins,
    /// Brewery details (`brewery_info`).
    BreweryInfo,
    /// Checkins for one brewery's beers (`brewery_checkins`).
    BreweryCheckins,
    /// Brewery name search (`brewery_search`).
    BrewerySearch,
    /// The public checkin feed, aka "the pub" (`thepub`).
    ThePub,
    /// Trending beers by location (`trending`).
    Trending,
    /// Details of one checkin (`details`).
    CheckinDetails,
    /// The authenticated user's friend feed (`feed`).
    FriendFeed,
    /// Add a beer to the authenticated user's wishlist (`add_to_wish`).
    AddToWish,
    /// Remove a beer from the authenticated user's wishlist (`remove_from_wish`).
    RemoveFromWish,
    /// Pending friend requests (`friend_pending`).
    FriendPending,
    /// Send a friend request (`friend_request`).
    FriendRequest,
    /// Accept a friend request (`friend_accept`).
    FriendAccept,
    /// Reject a friend request (`friend_reject`).
    FriendReject,
    /// Un-friend a user (`friend_revoke`).
    FriendRevoke,
    /// Create a live checkin (`checkin`).
    Checkin,
    /// Comment on a checkin (`add_comment`).
    AddComment,
    /// Delete a comment (`delete_comment`).
    DeleteComment,
    /// Toast a checkin (`toast`).
    Toast,
    /// Remove a toast (`delete_toast`).
    DeleteToast,
}

impl Endpoint {
    /// The path segment appended to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::UserFeed => "user_feed",
            Self::UserDistinct => "user_distinct",
            Self::Friends => "friends",
            Self::WishList => "wish_list",
            Self::UserBadge => "user_badge",
            Self::BeerInfo => "beer_info",
            Self::BeerSearch => "beer_search",
            Self::BeerCheckins => "beer_checkins",
            Self::VenueInfo => "venue_info",
            Self::VenueCheckins => "venue_checkins",
            Self::BreweryInfo => "brewery_info",
            Self::BreweryCheckins => "brewery_checkins",
            Self::BrewerySearch => "brewery_search",
            Self::ThePub => "thepub",
            Self::Trending => "trending",
            Self::CheckinDetails => "details",
            Self::FriendFeed => "feed",
            Self::AddToWish => "add_to_wish",
            Self::RemoveFromWish => "remove_from_wish",
            Self::FriendPending => "friend_pending",
            Self::FriendRequest => "friend_request",
            Self::FriendAccept => "friend_accept",
            Self::FriendReject => "friend_reject",
            Self::FriendRevoke => "friend_revoke",
            Self::Checkin => "checkin",
            Self::AddComment => "add_comment",
            Self::DeleteComment => "delete_comment",
            Self::Toast => "toast",
            Self::DeleteToast => "delete_toast",
        }
    }

    /// Whether the service requires user credentials for this operation.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        match self {
            Self::FriendFeed
            | Self::AddToWish
            | Self::RemoveFromWish
            | Self::FriendPending
            | Self::FriendRequest
            | Self::FriendAccept
            | Self::FriendReject
            | Self::FriendRevoke
            | Self::BrewerySearch
            | Self::Checkin
            | Self::AddComment
            | Self::DeleteComment
            | Self::Toast
            | Self::DeleteToast => true,
            Self::User
            | Self::UserFeed
            | Self::UserDistinct
            | Self::Friends
            | Self::WishList
            | Self::UserBadge
            | Self::BeerInfo
            | Self::BeerSearch
            | Self::BeerCheckins
            | Self::VenueInfo
            | Self::VenueCheckins
            | Self::BreweryInfo
            | Self::BreweryCheckins
            | Self::ThePub
            | Self::Trending
            | Self::CheckinDetails => false,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
