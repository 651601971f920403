//! # untappd-client
//!
//! Typed async client for the [Untappd](https://untappd.com) v3 REST API:
//! beer, brewery, venue, user, and checkin data.
//!
//! Every operation shares one pipeline — local argument validation, an
//! authentication gate, query assembly with the API key, a single HTTP GET,
//! and status-envelope classification — and terminates in either an
//! [`ApiResponse`] or a typed [`UntappdError`]. There are no retries, no
//! caching, and no library-imposed timeout.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use untappd_client::{TrendingAge, TrendingKind, GeoFilter, UntappdClient};
//!
//! # async fn example() -> Result<(), untappd_client::UntappdError> {
//! let client = UntappdClient::builder("my-api-key").build()?;
//!
//! let trending = client
//!     .public_trending(
//!         TrendingKind::Micro,
//!         Some(5),
//!         TrendingAge::Weekly,
//!         GeoFilter::default(),
//!     )
//!     .await?;
//! println!("{}", trending.value()["results"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Operations acting on behalf of a user (checkins, wishlist, friends) need
//! credentials:
//!
//! ```rust,no_run
//! use untappd_client::{Checkin, UntappdClient};
//!
//! # async fn example() -> Result<(), untappd_client::UntappdError> {
//! let mut client = UntappdClient::builder("my-api-key").build()?;
//! client.set_authenticated_user("gregavola", "s3cret");
//!
//! client.checkin(Checkin::new(-5, 1234).rating(4)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Passing empty strings to
//! [`set_authenticated_user`](UntappdClient::set_authenticated_user) clears
//! the credentials again.
//!
//! ## Diagnostics
//!
//! Successful calls carry a debug echo — the raw reply body and the
//! dispatched URL — inside [`ApiResponse`]; failed calls carry the same
//! context inside the [`UntappdError`] variant where a request was actually
//! made. The client itself holds no per-call state, so clones can be shared
//! across concurrent tasks freely.

mod client;

pub use client::{
    ApiResponse, BadgeSort, Checkin, Credentials, Endpoint, GeoFilter, Paging, SearchSort,
    TrendingAge, TrendingKind, UntappdClient, UntappdClientBuilder, UntappdError,
};
