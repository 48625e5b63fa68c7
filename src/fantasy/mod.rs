//! FantasyData API access: the client, request building, endpoints and models.

pub mod http;
pub mod nba;
pub mod nfl;
pub mod request;
pub mod types;

pub use http::{classify_response, FantasyData};
pub use nba::Nba;
pub use nfl::Nfl;
pub use request::ApiRequest;
