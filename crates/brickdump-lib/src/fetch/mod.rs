mod client;

pub use client::Fetcher;
