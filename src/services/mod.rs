pub mod twitter;

pub use twitter::TwitterService;
