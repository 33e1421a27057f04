pub mod index;

pub use index::index;
