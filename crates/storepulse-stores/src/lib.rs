//! Store fetchers for the Apple App Store and Google Play.
//!
//! [`AppleClient`] and [`GooglePlayClient`] return typed results and
//! [`StoreError`]s. The [`collect`] functions sit on top of them and turn every
//! failure into an inline error marker so a collection run never aborts on a
//! single bad listing.

pub mod apple;
pub mod collect;
pub mod error;
pub mod google_play;

mod http;

pub use apple::AppleClient;
pub use collect::{collect_apple, collect_google_play};
pub use error::StoreError;
pub use google_play::GooglePlayClient;
