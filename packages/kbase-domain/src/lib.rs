pub mod scorer;
pub mod searcher;
pub mod selection;

pub use scorer::score;
pub use searcher::{SearchHit, search};
pub use selection::{Selection, parse_selection};
