pub mod client;
pub mod rate_limiter;
pub mod paginator;

pub use client::{GitHubClient, PER_PAGE};
pub use rate_limiter::RateLimiter;
pub use paginator::Paginator;
