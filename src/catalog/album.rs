//! Wire models for the new-releases listing.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Envelope returned by the new-releases endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewReleasesPage {
	/// Paged album listing.
	pub albums: AlbumPage,
}

/// One page of albums; every field defaults when the provider omits it.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumPage {
	/// Link to this page.
	pub href: String,
	/// Page size requested.
	pub limit: u32,
	/// Offset of the first item.
	pub offset: u32,
	/// Total number of items available upstream.
	pub total: u32,
	/// Albums in provider order.
	pub items: Vec<Album>,
}

/// Catalog entry as returned by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Album {
	/// Provider identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Album type (`album`, `single`, `compilation`).
	#[serde(rename = "album_type")]
	pub kind: String,
	/// Credited artists in provider order.
	pub artists: Vec<Artist>,
	/// Cover art in provider order.
	pub images: Vec<Image>,
	/// Release date with provider-defined precision (`2024`, `2024-03`, `2024-03-08`).
	pub release_date: String,
	/// Number of tracks.
	pub total_tracks: u32,
	/// Links to the album outside the API.
	pub external_urls: ExternalUrls,
}

/// Credited artist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Artist {
	/// Provider identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Object type reported by the provider.
	#[serde(rename = "type")]
	pub kind: String,
}

/// Cover art variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Image {
	/// Height in pixels, when known.
	pub height: Option<u32>,
	/// Width in pixels, when known.
	pub width: Option<u32>,
	/// Image URL.
	pub url: String,
}

/// External links attached to an album.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExternalUrls {
	/// Spotify web player link.
	pub spotify: String,
}

/// Ordered albums committed by the last successful update.
///
/// Cloning is cheap; the albums are shared, never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing(Arc<[Album]>);
impl Listing {
	/// Albums in provider order.
	pub fn albums(&self) -> &[Album] {
		&self.0
	}
}
impl From<Vec<Album>> for Listing {
	fn from(albums: Vec<Album>) -> Self {
		Self(albums.into())
	}
}
impl Deref for Listing {
	type Target = [Album];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
