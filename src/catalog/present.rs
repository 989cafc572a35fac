//! Render-time reductions over a single album. Nothing here performs I/O.

// self
use crate::{
	_prelude::*,
	catalog::{Album, Artist, Image},
};

/// Display name used when an album credits no artists.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Picks the image whose width is closest to `preferred_width` and returns its URL.
///
/// Images are scanned left to right and a candidate only replaces the current best when its
/// distance is strictly smaller, so ties keep the earliest image. A missing width counts as
/// `0`. Returns `""` when `images` is empty.
pub fn select_image(images: &[Image], preferred_width: u32) -> &str {
	let mut candidates = images.iter();
	let Some(first) = candidates.next() else {
		return "";
	};
	let distance = |image: &Image| image.width.unwrap_or(0).abs_diff(preferred_width);
	let mut best = first;
	let mut best_distance = distance(first);

	for image in candidates {
		let candidate_distance = distance(image);

		if candidate_distance < best_distance {
			best = image;
			best_distance = candidate_distance;
		}
	}

	&best.url
}

/// Returns the first credited artist's name, or [`UNKNOWN_ARTIST`].
pub fn primary_artist(artists: &[Artist]) -> &str {
	artists.first().map_or(UNKNOWN_ARTIST, |artist| artist.name.as_str())
}

impl Album {
	/// URL of the cover image closest to `preferred_width`; see [`select_image`].
	pub fn image_url(&self, preferred_width: u32) -> &str {
		select_image(&self.images, preferred_width)
	}

	/// Name of the primary artist; see [`primary_artist`].
	pub fn main_artist(&self) -> &str {
		primary_artist(&self.artists)
	}
}

/// Render-ready projection of an [`Album`] for template engines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlbumView {
	/// Provider identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Album type.
	pub kind: String,
	/// Primary artist or [`UNKNOWN_ARTIST`].
	pub artist: String,
	/// Best-fit cover URL, empty when the album has no images.
	pub image_url: String,
	/// Release date as reported.
	pub release_date: String,
	/// Number of tracks.
	pub total_tracks: u32,
	/// External link.
	pub url: String,
}
impl AlbumView {
	/// Projects `album`, selecting the cover closest to `preferred_width`.
	pub fn new(album: &Album, preferred_width: u32) -> Self {
		Self {
			id: album.id.clone(),
			name: album.name.clone(),
			kind: album.kind.clone(),
			artist: album.main_artist().to_owned(),
			image_url: album.image_url(preferred_width).to_owned(),
			release_date: album.release_date.clone(),
			total_tracks: album.total_tracks,
			url: album.external_urls.spotify.clone(),
		}
	}
}
