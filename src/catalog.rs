//! Catalog models returned by the browse endpoint and the pure presenters rendering reads them
//! through.
//!
//! `album` mirrors the wire shape of `GET /v1/browse/new-releases`, keeping source order for
//! artists and images. `present` holds the render-time reductions (best-fit image, primary
//! artist) and the serializable [`AlbumView`] projection handed to template engines.

pub mod album;
pub mod present;

pub use album::*;
pub use present::*;
