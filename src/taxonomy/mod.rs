pub mod languages;

pub use languages::{canonical_language, normalize_languages};
