use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in SNWS2 signing.
pub const X_SN_DATE: &str = "x-sn-date";
pub const DIGEST: &str = "digest";
pub const CONTENT_MD5: &str = "content-md5";

// Tokens of the SNWS2 scheme grammar.
pub const SNWS2_SCHEME: &str = "SNWS2";
pub const SNWS2_ALGORITHM: &str = "SNWS2-HMAC-SHA256";
pub const SNWS2_SECRET_PREFIX: &str = "SNWS2";
pub const SNWS2_REQUEST: &str = "snws2_request";

/// Hex encoded SHA-256 of zero bytes, used as the content digest line when no
/// body digest has been configured.
pub const EMPTY_STRING_SHA256_HEX: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// AsciiSet for SNWS2 canonical query encoding.
///
/// Every byte is escaped except the RFC 3986 unreserved characters 'A'-'Z',
/// 'a'-'z', '0'-'9', '-', '.', '_' and '~'. In particular `!`, `'`, `(`, `)`
/// and `*` are escaped, which the generic component encoders of many runtimes
/// leave alone; the server canonicalizes them, so this side must too.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
