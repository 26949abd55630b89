//! Challenge catalogues for the freeCodeCamp tracks a learner may complete.
//!
//! A challenge counts as completed when its identifier appears anywhere in the
//! learner's public profile payload. Learners are graded on whichever track
//! they completed the largest share of.

/// Basic JavaScript, in curriculum order.
pub static BASIC_JAVASCRIPT: &[&str] = &[
    "bd7123c9c441eddfaeb4bdef",
    "bd7123c9c443eddfaeb5bdef",
    "56533eb9ac21ba0edf2244a8",
    "56533eb9ac21ba0edf2244a9",
    "56533eb9ac21ba0edf2244aa",
    "56533eb9ac21ba0edf2244ab",
    "cf1111c1c11feddfaeb3bdef",
    "cf1111c1c11feddfaeb4bdef",
    "cf1231c1c11feddfaeb5bdef",
    "cf1111c1c11feddfaeb6bdef",
    "56533eb9ac21ba0edf2244ac",
    "56533eb9ac21ba0edf2244ad",
    "cf1391c1c11feddfaeb4bdef",
    "bd7993c9c69feddfaeb7bdef",
    "bd7993c9ca9feddfaeb7bdef",
    "56533eb9ac21ba0edf2244ae",
    "56533eb9ac21ba0edf2244af",
    "56533eb9ac21ba0edf2244b0",
    "56533eb9ac21ba0edf2244b1",
    "56533eb9ac21ba0edf2244b2",
    "bd7123c9c444eddfaeb5bdef",
    "56533eb9ac21ba0edf2244b5",
    "56533eb9ac21ba0edf2244b4",
    "56533eb9ac21ba0edf2244b6",
    "56533eb9ac21ba0edf2244b7",
    "56533eb9ac21ba0edf2244b8",
    "56533eb9ac21ba0edf2244b9",
    "56533eb9ac21ba0edf2244ed",
    "bd7123c9c448eddfaeb5bdef",
    "bd7123c9c549eddfaeb5bdef",
    "56533eb9ac21ba0edf2244ba",
    "bd7123c9c450eddfaeb5bdef",
    "bd7123c9c451eddfaeb5bdef",
    "bd7123c9c452eddfaeb5bdef",
    "56533eb9ac21ba0edf2244bb",
    "bd7993c9c69feddfaeb8bdef",
    "cf1111c1c11feddfaeb7bdef",
    "56bbb991ad1ed5201cd392ca",
    "cf1111c1c11feddfaeb8bdef",
    "56592a60ddddeae28f7aa8e1",
    "56bbb991ad1ed5201cd392cb",
    "56bbb991ad1ed5201cd392cc",
    "56bbb991ad1ed5201cd392cd",
    "56bbb991ad1ed5201cd392ce",
    "56533eb9ac21ba0edf2244bc",
    "56bbb991ad1ed5201cd392cf",
    "56533eb9ac21ba0edf2244bd",
    "56533eb9ac21ba0edf2244be",
    "56533eb9ac21ba0edf2244bf",
    "56533eb9ac21ba0edf2244c0",
    "56533eb9ac21ba0edf2244c2",
    "598e8944f009e646fc236146",
    "56533eb9ac21ba0edf2244c3",
    "56533eb9ac21ba0edf2244c6",
    "bd7123c9c441eddfaeb5bdef",
    "cf1111c1c12feddfaeb3bdef",
    "56533eb9ac21ba0edf2244d0",
    "56533eb9ac21ba0edf2244d1",
    "599a789b454f2bbd91a3ff4d",
    "56533eb9ac21ba0edf2244d2",
    "56533eb9ac21ba0edf2244d3",
    "56533eb9ac21ba0edf2244d4",
    "56533eb9ac21ba0edf2244d5",
    "56533eb9ac21ba0edf2244d6",
    "56533eb9ac21ba0edf2244d7",
    "56533eb9ac21ba0edf2244d8",
    "56533eb9ac21ba0edf2244d9",
    "56533eb9ac21ba0edf2244da",
    "56533eb9ac21ba0edf2244db",
    "5690307fddb111c6084545d7",
    "56533eb9ac21ba0edf2244dc",
    "5664820f61c48e80c9fa476c",
    "56533eb9ac21ba0edf2244dd",
    "56533eb9ac21ba0edf2244de",
    "56533eb9ac21ba0edf2244df",
    "56533eb9ac21ba0edf2244e0",
    "5679ceb97cbaa8c51670a16b",
    "56533eb9ac21ba0edf2244c4",
    "565bbe00e9cc8ac0725390f4",
    "56bbb991ad1ed5201cd392d0",
    "56533eb9ac21ba0edf2244c7",
    "56533eb9ac21ba0edf2244c8",
    "56533eb9ac21ba0edf2244c9",
    "56bbb991ad1ed5201cd392d1",
    "56bbb991ad1ed5201cd392d2",
    "56bbb991ad1ed5201cd392d3",
    "56533eb9ac21ba0edf2244ca",
    "567af2437cbaa8c51670a16c",
    "56533eb9ac21ba0edf2244cb",
    "56533eb9ac21ba0edf2244cc",
    "56533eb9ac21ba0edf2244cd",
    "56533eb9ac21ba0edf2244cf",
    "cf1111c1c11feddfaeb1bdef",
    "cf1111c1c11feddfaeb5bdef",
    "56104e9e514f539506016a5c",
    "56105e7b514f539506016a5e",
    "5675e877dbd60be8ad28edc6",
    "56533eb9ac21ba0edf2244e1",
    "5a2efd662fb457916e1fe604",
    "5688e62ea601b2482ff8422b",
    "cf1111c1c11feddfaeb9bdef",
    "cf1111c1c12feddfaeb1bdef",
    "cf1111c1c12feddfaeb2bdef",
    "587d7b7e367417b2b2512b23",
    "587d7b7e367417b2b2512b22",
    "587d7b7e367417b2b2512b24",
    "587d7b7e367417b2b2512b21",
];

/// React, in curriculum order.
pub static REACT: &[&str] = &[
    "587d7dbc367417b2b2512bb1",
    "5a24bbe0dba28a8d3cbd4c5d",
    "5a24bbe0dba28a8d3cbd4c5e",
    "5a24bbe0dba28a8d3cbd4c5f",
    "5a24c314108439a4d4036160",
    "5a24c314108439a4d4036161",
    "5a24c314108439a4d4036162",
    "5a24c314108439a4d4036163",
    "5a24c314108439a4d4036164",
    "5a24c314108439a4d4036165",
    "5a24c314108439a4d4036166",
    "5a24c314108439a4d4036167",
    "5a24c314108439a4d4036168",
    "5a24c314108439a4d4036169",
    "5a24c314108439a4d403616a",
    "5a24c314108439a4d403616b",
    "5a24c314108439a4d403616c",
    "5a24c314108439a4d403616d",
    "5a24c314108439a4d403616e",
    "5a24c314108439a4d403616f",
    "5a24c314108439a4d4036170",
    "5a24c314108439a4d4036171",
    "5a24c314108439a4d4036172",
    "5a24c314108439a4d4036173",
    "5a24c314108439a4d4036174",
    "5a24c314108439a4d4036176",
    "5a24c314108439a4d4036177",
    "5a24c314108439a4d4036178",
    "5a24c314108439a4d4036179",
    "5a24c314108439a4d403617a",
    "5a24c314108439a4d403617b",
    "5a24c314108439a4d403617c",
    "5a24c314108439a4d403617d",
    "5a24c314108439a4d403617e",
    "5a24c314108439a4d403617f",
    "5a24c314108439a4d4036180",
    "5a24c314108439a4d4036181",
    "5a24c314108439a4d4036182",
    "5a24c314108439a4d4036183",
    "5a24c314108439a4d4036184",
    "5a24c314108439a4d4036185",
    "5a24c314108439a4d4036187",
    "5a24c314108439a4d4036188",
    "5a24c314108439a4d4036189",
    "5a24c314108439a4d403618a",
    "5a24c314108439a4d403618b",
    "5a24c314108439a4d403618c",
    "5a24c314108439a4d403618d",
];

/// Every catalogue a profile is graded against.
pub static TRACKS: &[&[&str]] = &[BASIC_JAVASCRIPT, REACT];

/// Number of distinct catalogue identifiers present in `body`.
pub fn count_completed(body: &str, catalogue: &[&str]) -> usize {
    catalogue.iter().filter(|id| body.contains(*id)).count()
}

/// `completed / catalogue size`; an empty catalogue counts as nothing completed.
pub fn fraction_completed(body: &str, catalogue: &[&str]) -> f64 {
    if catalogue.is_empty() {
        return 0.0;
    }
    count_completed(body, catalogue) as f64 / catalogue.len() as f64
}

/// The largest completion fraction over `catalogues`.
pub fn best_fraction(body: &str, catalogues: &[&[&str]]) -> f64 {
    catalogues
        .iter()
        .map(|c| fraction_completed(body, c))
        .fold(0.0, f64::max)
}
