pub mod adapter;
pub mod mapper;
pub mod models;
pub mod queries;

pub use adapter::JustWatchAdapter;
pub use mapper::JustWatchMapper;
