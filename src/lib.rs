//! Signing SolarNetwork API requests without effort.
//!
//! This crate implements the client side of the SNWS2 authorization scheme:
//! it derives a deterministic signature from the HTTP method, path, query
//! parameters, a selected set of headers and the body digest, and formats the
//! final `Authorization` header value. It never issues network calls; hand
//! the produced header to whatever HTTP client the application uses.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use http::uri::Scheme;
//! use snsign::AuthorizationBuilder;
//! use snsign::Environment;
//!
//! let env = Arc::new(Environment::new(Scheme::HTTPS, "data.solarnetwork.net", None));
//!
//! let mut builder = AuthorizationBuilder::new("my-token", env);
//! builder
//!     .path("/solarquery/api/v1/sec/datum/list")
//!     .set_use_sn_date(true)
//!     .query_param("nodeId", "123");
//!
//! let authorization = builder.build("my-token-secret");
//! assert!(authorization.starts_with("SNWS2 Credential=my-token,SignedHeaders="));
//! ```
//!
//! # Signing keys
//!
//! Signatures are computed with a key derived from the token secret and the
//! signing date, valid for 7 whole UTC days. [`AuthorizationBuilder::save_signing_key`]
//! keeps the derived key (never the secret) so follow-up requests can be
//! signed with [`AuthorizationBuilder::build_with_saved_key`] until
//! [`SigningKey::is_valid`] turns false.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod builder;
pub use builder::AuthorizationBuilder;

mod canonical;

mod constants;
pub use constants::EMPTY_STRING_SHA256_HEX;

mod environment;
pub use environment::Environment;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

mod key;
pub use key::SigningKey;

pub mod hash;
pub mod time;
pub mod utils;
