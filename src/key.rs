use std::fmt::Debug;
use std::fmt::Formatter;

use chrono::TimeDelta;

use crate::constants::SNWS2_REQUEST;
use crate::constants::SNWS2_SECRET_PREFIX;
use crate::hash::hmac_sha256;
use crate::time;
use crate::time::floor_to_day;
use crate::time::format_date;
use crate::time::DateTime;

/// Number of whole UTC days a derived signing key may be used for.
const VALID_DAYS: i64 = 7;

/// A derived HMAC signing key, scoped to a secret and a UTC calendar day.
///
/// A key derived for day `D` is accepted by the server from the start of `D`
/// through the end of `D + 6`, a rolling window of 7 whole UTC days. Callers
/// may hold on to a key (or its bytes) and keep signing with it until
/// [`is_valid`][Self::is_valid] turns false, avoiding re-entry of the token
/// secret for every request.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    key: Vec<u8>,
    date: DateTime,
}

impl SigningKey {
    /// Derive a signing key from a token secret for the given signing date.
    ///
    /// The derivation chains two HMAC-SHA256 operations: the prefixed secret
    /// keyed over the `yyyyMMdd` date, then the result keyed over the scheme
    /// terminator. The output is scoped to both the secret and the calendar
    /// day, which bounds exposure if a derived key leaks.
    pub fn derive(secret: &str, date: DateTime) -> Self {
        let secret = format!("{SNWS2_SECRET_PREFIX}{secret}");
        let day_key = hmac_sha256(secret.as_bytes(), format_date(date).as_bytes());
        let key = hmac_sha256(day_key.as_slice(), SNWS2_REQUEST.as_bytes());

        Self { key, date }
    }

    /// Restore a previously derived key from its raw bytes and the date it
    /// was derived for.
    ///
    /// Callers restoring a key without a recorded derivation date can pass
    /// [`time::now()`][crate::time::now], at the cost of a validity window
    /// that may end earlier than the key's true one.
    pub fn new(key: impl Into<Vec<u8>>, date: DateTime) -> Self {
        Self {
            key: key.into(),
            date,
        }
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// The date this key was derived for.
    pub fn date(&self) -> DateTime {
        self.date
    }

    /// The first instant at which this key is no longer valid.
    pub fn expires_at(&self) -> DateTime {
        floor_to_day(self.date) + TimeDelta::try_days(VALID_DAYS).expect("in bounds")
    }

    /// Whether this key is valid at the given instant.
    pub fn is_valid_at(&self, t: DateTime) -> bool {
        t >= floor_to_day(self.date) && t < self.expires_at()
    }

    /// Whether this key is valid at the current instant.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(time::now())
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let key = hex::encode(&self.key);
        f.debug_struct("SigningKey")
            .field("key", &crate::utils::Redact::from(key.as_str()))
            .field("date", &self.date)
            .finish()
    }
}
