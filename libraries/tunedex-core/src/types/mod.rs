mod album;
mod musician;

pub use album::{Album, AlbumInput, MAX_PRICE, MIN_ALBUM_NAME_LEN, MIN_PRICE};
pub use musician::{Musician, MIN_MUSICIAN_NAME_LEN};
