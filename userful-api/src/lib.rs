//! Client for the Userful digital-signage management REST API
//!
//! This crate authenticates a session against a Userful server and exposes
//! thin, typed request builders for configuring sources and commanding
//! zones, mirrorgroups and displays. It uses the private `rest-client`
//! crate for the blocking HTTP communication.
//!
//! Every call is one synchronous request; responses come back raw for the
//! caller to interpret. There is no retry, caching or session-refresh
//! machinery — a lapsed session surfaces as a transport error and the
//! caller re-authenticates.
//!
//! ```no_run
//! use userful_api::{ClientConfig, PlayOptions, SessionClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SessionClient::connect(ClientConfig::from_env()?)?;
//!
//! let options = PlayOptions::new().repeat(true);
//! client.play_videolist_by_name(
//!     &["/media/promo.mp4", "/media/schedule.mp4"],
//!     "zones",
//!     "Lobby",
//!     &options,
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod target;

pub use client::{Connection, SessionClient, SessionCookie};
pub use config::{ClientConfig, ConfigError, DEFAULT_PORT};
pub use error::{ApiError, Result};
pub use rest_client::{RestError, RestResponse};
pub use target::{PlayOptions, ID_ADDRESSABLE, NAME_ADDRESSABLE};
