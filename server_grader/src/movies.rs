//! The movie dataset every student server is expected to serve.
//!
//! Listing and search results are rows matching [`ROW_SELECTOR`] on [`LISTING_PATH`];
//! movie `i` of [`TITLES`] lives at `/movies/<i + 1>` and names itself in its `h1`.

pub const LISTING_PATH: &str = "/movies";
pub const ROW_SELECTOR: &str = ".movie";
pub const HEADING_SELECTOR: &str = "h1";
pub const SEARCH_PARAM: &str = "q";

/// Rows on the unfiltered listing.
pub const MOVIE_COUNT: usize = 499;

/// A search query and the exact number of rows it must return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCase {
    pub query: &'static str,
    pub expected: usize,
}

pub static SEARCH_CASES: &[SearchCase] = &[
    SearchCase { query: "star", expected: 11 },
    SearchCase { query: "love", expected: 9 },
    SearchCase { query: "night", expected: 6 },
    SearchCase { query: "king", expected: 5 },
    SearchCase { query: "war", expected: 17 },
    SearchCase { query: "godfather", expected: 3 },
    SearchCase { query: "zzyzx", expected: 0 },
];

/// Titles in dataset order.
pub static TITLES: &[&str] = &[
    "The Shawshank Redemption",
    "The Godfather",
    "The Godfather: Part II",
    "The Dark Knight",
    "12 Angry Men",
    "Schindler's List",
    "The Lord of the Rings: The Return of the King",
    "Pulp Fiction",
    "The Good, the Bad and the Ugly",
    "Fight Club",
    "The Lord of the Rings: The Fellowship of the Ring",
    "Forrest Gump",
    "Star Wars: Episode V - The Empire Strikes Back",
    "Inception",
    "The Lord of the Rings: The Two Towers",
    "One Flew Over the Cuckoo's Nest",
    "Goodfellas",
    "The Matrix",
    "Seven Samurai",
    "Star Wars",
    "City of God",
    "Se7en",
    "The Silence of the Lambs",
    "It's a Wonderful Life",
    "Life Is Beautiful",
];

/// Path of the detail page for the movie at `index` in [`TITLES`].
pub fn detail_path(index: usize) -> String {
    format!("{LISTING_PATH}/{}", index + 1)
}
