//! SNWS2 authorization builder.

use std::sync::Arc;

use http::header;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use http::Method;
use http::Uri;
use log::debug;

use crate::canonical::canonical_query_string;
use crate::canonical::CanonicalRequest;
use crate::constants::CONTENT_MD5;
use crate::constants::DIGEST;
use crate::constants::EMPTY_STRING_SHA256_HEX;
use crate::constants::SNWS2_ALGORITHM;
use crate::constants::SNWS2_SCHEME;
use crate::constants::X_SN_DATE;
use crate::environment::Environment;
use crate::error::Error;
use crate::error::Result;
use crate::hash::base64_encode;
use crate::hash::hex_hmac_sha256;
use crate::hash::hex_sha256;
use crate::hash::sha256;
use crate::key::SigningKey;
use crate::time;
use crate::time::format_http_date;
use crate::time::format_iso8601;
use crate::time::DateTime;

/// Builder for SNWS2 `Authorization` header values.
///
/// The builder is a single-threaded value object: configuration methods
/// mutate it in place and return `&mut Self` for chaining, and
/// [`build`][Self::build] is a pure read of the accumulated state. Prepare
/// concurrent requests with one builder each (or [`reset`][Self::reset]
/// between uses); sharing one instance across threads without external
/// locking is a caller error, not something the builder guards against.
///
/// - [SNWS2 authentication scheme](https://github.com/SolarNetwork/solarnetwork/wiki/SolarNet-API-authentication-scheme-V2)
#[derive(Clone, Debug)]
pub struct AuthorizationBuilder {
    token_id: String,
    env: Arc<Environment>,
    force_host_port: bool,

    method: Method,
    path: String,
    date: DateTime,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    content_sha256: Option<Vec<u8>>,
    signed_header_names: Vec<String>,
    signing_key: Option<SigningKey>,
}

impl AuthorizationBuilder {
    /// Create a builder for the given token id against an environment.
    ///
    /// The new builder starts out reset: method `GET`, path `/`, signing date
    /// now, and a `Host` header derived from the environment.
    pub fn new(token_id: impl Into<String>, env: Arc<Environment>) -> Self {
        let mut builder = Self {
            token_id: token_id.into(),
            env,
            force_host_port: false,
            method: Method::GET,
            path: "/".to_string(),
            date: time::now(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            content_sha256: None,
            signed_header_names: Vec::new(),
            signing_key: None,
        };
        builder.reset();
        builder
    }

    /// The token id this builder signs for.
    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    /// The environment this builder derives its default `Host` header from.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Restore the builder to its just-constructed state.
    ///
    /// Clears the headers, query parameters, content digest,
    /// additional-signed-header list and any saved signing key, then sets
    /// method `GET`, path `/`, signing date now, and the default `Host`
    /// header from the environment.
    pub fn reset(&mut self) -> &mut Self {
        self.method = Method::GET;
        self.path = "/".to_string();
        self.date = time::now();
        self.headers = HeaderMap::new();
        self.query.clear();
        self.content_sha256 = None;
        self.signed_header_names.clear();
        self.signing_key = None;

        let host = self.env.host_header(self.force_host_port);
        self.headers.insert(
            header::HOST,
            host.parse().expect("host must be valid header value"),
        );

        self
    }

    /// Always include the environment's explicit port in the `Host` header,
    /// even when it matches the scheme default.
    ///
    /// Re-derives the default `Host` header immediately; set this before
    /// configuring a custom host via [`url`][Self::url].
    pub fn force_host_port(&mut self, enabled: bool) -> &mut Self {
        self.force_host_port = enabled;
        let host = self.env.host_header(enabled);
        self.headers.insert(
            header::HOST,
            host.parse().expect("host must be valid header value"),
        );
        self
    }

    /// Specify the HTTP method.
    pub fn method(&mut self, method: Method) -> &mut Self {
        self.method = method;
        self
    }

    /// Specify the request path, used in the canonical request exactly as
    /// given (no dot-segment normalization).
    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }

    /// Specify the signing date.
    pub fn date(&mut self, date: DateTime) -> &mut Self {
        self.date = date;
        self
    }

    /// Specify the signing date from its RFC 2822 or RFC 3339 rendering.
    ///
    /// # Notes
    ///
    /// Input that cannot be interpreted as a date resets the signing date to
    /// the current time instead of failing, matching the reference
    /// implementation. Check [`signing_date`][Self::signing_date] when the
    /// input is untrusted.
    pub fn date_str(&mut self, date: &str) -> &mut Self {
        self.date = time::parse_date(date).unwrap_or_else(|_| time::now());
        self
    }

    /// The configured signing date.
    pub fn signing_date(&self) -> DateTime {
        self.date
    }

    /// Set a header value.
    ///
    /// Headers outside the mandatory signed set only become part of the
    /// signature when also named via [`signed_header`][Self::signed_header].
    pub fn header(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self {
        self.headers.insert(name, value);
        self
    }

    /// Append a query parameter. Repeated keys accumulate values in
    /// insertion order.
    pub fn query_param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Require a header beyond the mandatory set to be included in the
    /// signature.
    pub fn signed_header(&mut self, name: &str) -> &mut Self {
        let name = name.to_ascii_lowercase();
        if !self.signed_header_names.contains(&name) {
            self.signed_header_names.push(name);
        }
        self
    }

    /// Configure host, path and query parameters from a full URL.
    ///
    /// Query parameters are merged into the existing collection and the path
    /// replaces the configured one. The `Host` header is rewritten from the
    /// URL's authority (with the port included only when non-default for the
    /// URL scheme, or always under [`force_host_port`][Self::force_host_port])
    /// unless `ignore_host` is set, in which case the previously configured
    /// host is kept.
    pub fn url(&mut self, url: &str, ignore_host: bool) -> Result<&mut Self> {
        let uri: Uri = url.parse()?;

        if let Some(query) = uri.query() {
            for (k, v) in form_urlencoded::parse(query.as_bytes()) {
                self.query.push((k.into_owned(), v.into_owned()));
            }
        }

        let path = uri.path();
        if !path.is_empty() {
            self.path = path.to_string();
        }

        if !ignore_host {
            if let Some(authority) = uri.authority() {
                let scheme = uri.scheme().cloned().unwrap_or(Scheme::HTTPS);
                let default_port = if scheme == Scheme::HTTPS { 443 } else { 80 };
                let host = match authority.port_u16() {
                    Some(port) if self.force_host_port || port != default_port => {
                        format!("{}:{}", authority.host(), port)
                    }
                    _ => authority.host().to_string(),
                };
                self.headers.insert(header::HOST, HeaderValue::from_str(&host)?);
            }
        }

        Ok(self)
    }

    /// Whether signing uses the `X-SN-Date` header instead of `Date`.
    ///
    /// Derived: true when `X-SN-Date` appears in the additional-signed-header
    /// list or in the header collection.
    pub fn use_sn_date(&self) -> bool {
        self.signed_header_names
            .iter()
            .any(|name| name == X_SN_DATE)
            || self.headers.contains_key(X_SN_DATE)
    }

    /// Switch between `X-SN-Date` and `Date` based signing.
    ///
    /// Any literal `X-SN-Date` header value is removed either way; the
    /// configured signing date is authoritative for the date header, so a
    /// stored literal could only go stale.
    pub fn set_use_sn_date(&mut self, enabled: bool) -> &mut Self {
        self.signed_header_names.retain(|name| name != X_SN_DATE);
        if enabled {
            self.signed_header_names.push(X_SN_DATE.to_string());
        }
        self.headers.remove(X_SN_DATE);
        self
    }

    /// Set the SHA-256 digest of the request body from its raw bytes.
    pub fn content_sha256(&mut self, digest: impl Into<Vec<u8>>) -> &mut Self {
        self.content_sha256 = Some(digest.into());
        self
    }

    /// Compute the SHA-256 digest of the given request body.
    ///
    /// Stores the raw digest for the canonical request (hex encoded there)
    /// and sets a `Digest: sha-256=<base64>` header; the server expects the
    /// two encodings of the same bytes.
    pub fn compute_content_digest(&mut self, content: &[u8]) -> &mut Self {
        let digest = sha256(content);
        let value = format!("sha-256={}", base64_encode(&digest));
        self.headers.insert(
            DIGEST,
            value.parse().expect("digest must be valid header value"),
        );
        self.content_sha256 = Some(digest);
        self
    }

    /// Derive and save a signing key from the token secret, scoped to the
    /// currently configured signing date.
    ///
    /// The secret itself is not retained; subsequent
    /// [`build_with_saved_key`][Self::build_with_saved_key] calls reuse the
    /// derived key until [`reset`][Self::reset].
    pub fn save_signing_key(&mut self, secret: &str) -> &mut Self {
        self.signing_key = Some(SigningKey::derive(secret, self.date));
        self
    }

    /// Assign an externally restored signing key.
    pub fn set_signing_key(&mut self, key: SigningKey) -> &mut Self {
        self.signing_key = Some(key);
        self
    }

    /// The saved signing key, if any.
    pub fn signing_key(&self) -> Option<&SigningKey> {
        self.signing_key.as_ref()
    }

    /// Whether a signing key is saved and currently within its 7-day window.
    pub fn signing_key_valid(&self) -> bool {
        self.signing_key.as_ref().is_some_and(SigningKey::is_valid)
    }

    /// The instant the saved signing key stops being valid, if a key is
    /// saved. Callers can refresh keys ahead of this.
    pub fn signing_key_expiration(&self) -> Option<DateTime> {
        self.signing_key.as_ref().map(SigningKey::expires_at)
    }

    /// The sorted lower-case header names that will be signed.
    pub fn canonical_signed_header_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(4 + self.signed_header_names.len());
        names.push(header::HOST.as_str().to_string());
        names.push(if self.use_sn_date() {
            X_SN_DATE.to_string()
        } else {
            header::DATE.as_str().to_string()
        });
        for name in [CONTENT_MD5, header::CONTENT_TYPE.as_str(), DIGEST] {
            if self.headers.contains_key(name) {
                names.push(name.to_string());
            }
        }
        names.extend(self.signed_header_names.iter().cloned());

        names.sort_unstable();
        names.dedup();
        names
    }

    /// The canonical request text for the current builder state.
    ///
    /// Recomputed on every call; it is a pure function of the mutable state
    /// and is never cached.
    pub fn canonical_request(&self) -> String {
        self.canonical_request_parts().to_string()
    }

    /// Compute the final `Authorization` header value, deriving a signing
    /// key from the given token secret.
    ///
    /// Each call derives a fresh key; the saved-key cache is neither read
    /// nor updated.
    pub fn build(&self, secret: &str) -> String {
        self.sign(&SigningKey::derive(secret, self.date))
    }

    /// Compute the final `Authorization` header value with the saved signing
    /// key.
    ///
    /// Fails with [`ErrorKind::MissingSigningKey`][crate::ErrorKind] when no
    /// key has been derived via [`save_signing_key`][Self::save_signing_key]
    /// or assigned via [`set_signing_key`][Self::set_signing_key]; no secret
    /// is available at this point to fall back to.
    pub fn build_with_saved_key(&self) -> Result<String> {
        let key = self.signing_key.as_ref().ok_or_else(|| {
            Error::missing_signing_key("no signing key has been derived or assigned")
        })?;
        if !key.is_valid() {
            debug!(
                "signing key expired at {}; the server will reject this signature",
                key.expires_at()
            );
        }

        Ok(self.sign(key))
    }

    fn sign(&self, key: &SigningKey) -> String {
        let creq = self.canonical_request_parts();
        let creq_text = creq.to_string();
        debug!("calculated canonical request: {creq_text}");

        // Signature payload:
        //
        // SNWS2-HMAC-SHA256
        // 20170425T143000Z
        // <hashed_canonical_request>
        let signature_data = format!(
            "{SNWS2_ALGORITHM}\n{}\n{}",
            format_iso8601(self.date),
            hex_sha256(creq_text.as_bytes())
        );
        debug!("calculated signature data: {signature_data}");

        let signature = hex_hmac_sha256(key.as_bytes(), signature_data.as_bytes());

        format!(
            "{SNWS2_SCHEME} Credential={},SignedHeaders={},Signature={}",
            self.token_id,
            creq.signed_header_names().join(";"),
            signature
        )
    }

    fn canonical_request_parts(&self) -> CanonicalRequest {
        let names = self.canonical_signed_header_names();
        let headers = names
            .iter()
            .map(|name| (name.clone(), self.canonical_header_value(name)))
            .collect();

        CanonicalRequest {
            method: self.method.clone(),
            path: self.path.clone(),
            query: canonical_query_string(&self.query),
            headers,
            content_sha256: match &self.content_sha256 {
                Some(digest) => hex::encode(digest),
                None => EMPTY_STRING_SHA256_HEX.to_string(),
            },
        }
    }

    fn canonical_header_value(&self, name: &str) -> String {
        // The signing date is authoritative for the date header; a literal
        // stored value may be stale or absent.
        if name == header::DATE.as_str() || name == X_SN_DATE {
            return format_http_date(self.date);
        }

        match self.headers.get(name) {
            Some(value) => value
                .to_str()
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            None if name == header::HOST.as_str() => {
                self.env.host_header(self.force_host_port)
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ErrorKind;

    const TEST_SECRET: &str = "test-token-secret";

    fn test_env() -> Arc<Environment> {
        Arc::new(Environment::new(Scheme::HTTP, "localhost", None))
    }

    fn test_date() -> DateTime {
        Utc.with_ymd_and_hms(2017, 4, 25, 14, 30, 0).unwrap()
    }

    fn test_builder() -> AuthorizationBuilder {
        let mut builder = AuthorizationBuilder::new("test-token-id", test_env());
        builder.path("/api/test").date(test_date());
        builder
    }

    #[test]
    fn test_canonical_request_reference_vector() {
        let builder = test_builder();

        assert_eq!(
            builder.canonical_request(),
            "GET\n\
             /api/test\n\
             \n\
             date:Tue, 25 Apr 2017 14:30:00 GMT\n\
             host:localhost\n\
             date;host\n\
             e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_build_reference_vector() {
        let _ = env_logger::builder().is_test(true).try_init();

        let builder = test_builder();
        assert_eq!(
            builder.build(TEST_SECRET),
            "SNWS2 Credential=test-token-id,SignedHeaders=date;host,\
             Signature=4739139d3d370f147b6585795c309b1c6d7d7f59943081f7dd943f689cfa59a3"
        );
    }

    #[test]
    fn test_build_with_sn_date() {
        let mut builder = test_builder();
        builder.set_use_sn_date(true);

        assert_eq!(
            builder.canonical_request(),
            "GET\n\
             /api/test\n\
             \n\
             host:localhost\n\
             x-sn-date:Tue, 25 Apr 2017 14:30:00 GMT\n\
             host;x-sn-date\n\
             e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            builder.build(TEST_SECRET),
            "SNWS2 Credential=test-token-id,SignedHeaders=host;x-sn-date,\
             Signature=c14fe9f67560fb9a37d2aa7c40b40c260a5936f999877e2469b8ddb1da7c0eb9"
        );
    }

    #[test]
    fn test_build_with_query_parameters() {
        let mut builder = test_builder();
        builder.set_use_sn_date(true).query_param("foo", "/path/*");

        let creq = builder.canonical_request();
        assert_eq!(creq.lines().nth(2), Some("foo=%2Fpath%2F%2A"));
        assert_eq!(
            builder.build(TEST_SECRET),
            "SNWS2 Credential=test-token-id,SignedHeaders=host;x-sn-date,\
             Signature=c61f94cde70dc0154bb5c0b85f68f940fb6b3d52863ed32c8edec6462230b1bd"
        );
    }

    #[test]
    fn test_build_with_content_digest() {
        let _ = env_logger::builder().is_test(true).try_init();

        let body = br#"{"hello":"world"}"#;
        let mut builder = test_builder();
        builder
            .method(Method::POST)
            .path("/api/post")
            .set_use_sn_date(true)
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json;charset=UTF-8"),
            )
            .compute_content_digest(body);

        assert_eq!(
            builder.headers.get(DIGEST).unwrap(),
            "sha-256=k6I5cakU5erL8KjSUVTNownDwccvu5kU1Hxg88toFYg="
        );
        assert_eq!(
            builder.canonical_request(),
            "POST\n\
             /api/post\n\
             \n\
             content-type:application/json;charset=UTF-8\n\
             digest:sha-256=k6I5cakU5erL8KjSUVTNownDwccvu5kU1Hxg88toFYg=\n\
             host:localhost\n\
             x-sn-date:Tue, 25 Apr 2017 14:30:00 GMT\n\
             content-type;digest;host;x-sn-date\n\
             93a23971a914e5eacbf0a8d25154cda309c3c1c72fbb9914d47c60f3cb681588"
        );
        assert_eq!(
            builder.build(TEST_SECRET),
            "SNWS2 Credential=test-token-id,SignedHeaders=content-type;digest;host;x-sn-date,\
             Signature=e83275dedaeda3bc1934418a3008f69f03e05733fb544a3fa9ce7d23ad2ece7d"
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = test_builder();
        assert_eq!(builder.build(TEST_SECRET), builder.build(TEST_SECRET));
    }

    #[test]
    fn test_unsigned_header_does_not_affect_signature() {
        let mut builder = test_builder();
        let baseline = builder.build(TEST_SECRET);

        builder.header(
            HeaderName::from_static("x-custom"),
            HeaderValue::from_static("anything"),
        );
        assert_eq!(builder.build(TEST_SECRET), baseline);

        // Naming it makes it part of the signature.
        builder.signed_header("X-Custom");
        assert_ne!(builder.build(TEST_SECRET), baseline);
    }

    #[test]
    fn test_signed_header_value_affects_signature() {
        let mut builder = test_builder();
        builder.header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain"),
        );
        let first = builder.build(TEST_SECRET);

        builder.header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        assert_ne!(builder.build(TEST_SECRET), first);
    }

    #[test]
    fn test_date_header_literal_is_overridden() {
        let mut builder = test_builder();
        builder.header(
            header::DATE,
            HeaderValue::from_static("Mon, 01 Jan 2001 00:00:00 GMT"),
        );

        // The configured signing date wins over the stored literal.
        assert_eq!(builder.build(TEST_SECRET), test_builder().build(TEST_SECRET));
    }

    #[test]
    fn test_use_sn_date_round_trip() {
        let mut builder = test_builder();
        assert!(!builder.use_sn_date());

        builder.header(
            HeaderName::from_static(X_SN_DATE),
            HeaderValue::from_static("Mon, 01 Jan 2001 00:00:00 GMT"),
        );
        assert!(builder.use_sn_date());

        builder.set_use_sn_date(true);
        assert!(builder.use_sn_date());
        assert!(builder.headers.get(X_SN_DATE).is_none());

        builder.set_use_sn_date(false);
        assert!(!builder.use_sn_date());
        assert!(builder.headers.get(X_SN_DATE).is_none());
        assert_eq!(builder.canonical_signed_header_names(), ["date", "host"]);
    }

    #[test]
    fn test_build_with_saved_key_missing() {
        let builder = test_builder();
        let err = builder.build_with_saved_key().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingSigningKey);
    }

    #[test]
    fn test_build_with_saved_key_matches_fresh_build() {
        let mut builder = test_builder();
        builder.save_signing_key(TEST_SECRET);

        assert_eq!(
            builder.build_with_saved_key().unwrap(),
            builder.build(TEST_SECRET)
        );
    }

    #[test]
    fn test_set_signing_key_restores_saved_key() {
        let mut builder = test_builder();
        builder.save_signing_key(TEST_SECRET);
        let saved = builder.signing_key().unwrap().as_bytes().to_vec();
        let expected = builder.build_with_saved_key().unwrap();

        let mut restored = test_builder();
        restored.set_signing_key(SigningKey::new(saved, test_date()));
        assert_eq!(restored.build_with_saved_key().unwrap(), expected);
    }

    #[test]
    fn test_signing_key_validity_and_expiration() {
        let mut builder = test_builder();
        assert!(!builder.signing_key_valid());
        assert_eq!(builder.signing_key_expiration(), None);

        // A key derived for 2017 is long expired by the time tests run.
        builder.save_signing_key(TEST_SECRET);
        assert!(!builder.signing_key_valid());
        assert_eq!(
            builder.signing_key_expiration(),
            Some(Utc.with_ymd_and_hms(2017, 5, 2, 0, 0, 0).unwrap())
        );

        builder.date(time::now()).save_signing_key(TEST_SECRET);
        assert!(builder.signing_key_valid());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut builder = test_builder();
        builder
            .method(Method::POST)
            .set_use_sn_date(true)
            .query_param("foo", "bar")
            .compute_content_digest(b"body")
            .save_signing_key(TEST_SECRET);

        builder.reset();

        assert!(builder.signing_key().is_none());
        assert!(!builder.use_sn_date());
        assert_eq!(builder.canonical_signed_header_names(), ["date", "host"]);
        assert!(builder.canonical_request().starts_with("GET\n/\n\n"));
        assert!(builder
            .canonical_request()
            .ends_with(EMPTY_STRING_SHA256_HEX));
    }

    #[test]
    fn test_url_sets_host_path_and_query() {
        let mut builder = test_builder();
        builder
            .url("http://example.com/api/other?foo=bar&foo=baz", false)
            .unwrap();

        let creq = builder.canonical_request();
        assert_eq!(creq.lines().nth(1), Some("/api/other"));
        assert_eq!(creq.lines().nth(2), Some("foo=bar&foo=baz"));
        assert!(creq.contains("host:example.com\n"));
    }

    #[test]
    fn test_url_port_handling() {
        let mut builder = test_builder();
        builder.url("http://example.com:8080/api/test", false).unwrap();
        assert!(builder.canonical_request().contains("host:example.com:8080\n"));

        builder.url("http://example.com:80/api/test", false).unwrap();
        assert!(builder.canonical_request().contains("host:example.com\n"));

        builder.force_host_port(true);
        builder.url("http://example.com:80/api/test", false).unwrap();
        assert!(builder.canonical_request().contains("host:example.com:80\n"));
    }

    #[test]
    fn test_url_ignore_host_keeps_configured_host() {
        let mut builder = test_builder();
        builder.url("http://example.com/api/other", true).unwrap();

        let creq = builder.canonical_request();
        assert_eq!(creq.lines().nth(1), Some("/api/other"));
        assert!(creq.contains("host:localhost\n"));
    }

    #[test]
    fn test_url_malformed_input_propagates() {
        let mut builder = test_builder();
        let err = builder.url("http://exa mple.com/", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_date_str_valid_input() {
        let mut builder = test_builder();
        builder.date_str("Tue, 25 Apr 2017 14:30:00 GMT");
        assert_eq!(builder.signing_date(), test_date());
    }

    #[test]
    fn test_date_str_invalid_input_resets_to_now() {
        let mut builder = test_builder();
        let before = time::now();
        builder.date_str("not a date");

        assert!(builder.signing_date() >= before);
        assert_ne!(builder.signing_date(), test_date());
    }

    #[test]
    fn test_environment_port_in_host_header() {
        let env = Arc::new(Environment::new(Scheme::HTTP, "localhost", Some(8080)));
        let mut builder = AuthorizationBuilder::new("test-token-id", env);
        builder.date(test_date());

        assert!(builder.canonical_request().contains("host:localhost:8080\n"));
    }

    #[test]
    fn test_header_value_is_trimmed() {
        let mut builder = test_builder();
        builder.header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("  text/plain  "),
        );

        assert!(builder
            .canonical_request()
            .contains("content-type:text/plain\n"));
    }
}
