pub mod justwatch;

pub use justwatch::{JustWatchAdapter, JustWatchMapper};
