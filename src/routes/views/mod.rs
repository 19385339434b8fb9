mod index;

pub use index::router;
