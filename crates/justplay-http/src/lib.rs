pub mod client;
pub mod error;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ClientError, Result};

pub use reqwest::{Method, StatusCode, Url};
