//! Hash collections with the Fx hasher. Keys here are small enums and ids.

pub use rustc_hash::FxHashMap;
