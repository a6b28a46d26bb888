//! Packing a comparison into URL query parameters.
//!
//! Each text is lz-string compressed into the URI-safe alphabet and stored in
//! its own parameter (`l` for the original, `r` for the modified text), the
//! same encoding the web app's share links use. The split view adds
//! `mode=split`. An encoded text longer than the limit is left out of the URL
//! instead of being cut short.

use crate::error::{DifflyError, Result};
use crate::types::ViewMode;
use log::{debug, warn};
use url::form_urlencoded;

/// Longest encoded value a single parameter may carry.
pub const MAX_PARAM_LENGTH: usize = 4000;

/// Upper bound on a decoded text in UTF-16 units, so a crafted link cannot
/// expand without end.
pub const MAX_DECODED_LENGTH: usize = 16 * 1024 * 1024;

pub const LEFT_PARAM: &str = "l";
pub const RIGHT_PARAM: &str = "r";
pub const MODE_PARAM: &str = "mode";

/// Shown when a text had to be left out of the URL.
pub const TRUNCATION_WARNING: &str =
    "Inputs are too large to sync to the URL. Your diff still works locally.";

/// The outcome of encoding one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedParam {
    /// `None` for an empty text, or when the encoding exceeded the limit.
    pub value: Option<String>,
    /// Set when the text was dropped for being too large.
    pub truncated: bool,
}

/// Encodes one text with the default [`MAX_PARAM_LENGTH`].
pub fn encode_param(value: &str) -> EncodedParam {
    encode_param_with_limit(value, MAX_PARAM_LENGTH)
}

pub fn encode_param_with_limit(value: &str, limit: usize) -> EncodedParam {
    if value.is_empty() {
        return EncodedParam::default();
    }

    let encoded = lz_str::compress_to_encoded_uri_component(value);
    if encoded.len() > limit {
        warn!(
            "encoded value is {} characters, over the {} character limit; leaving it out of the URL",
            encoded.len(),
            limit
        );
        return EncodedParam {
            value: None,
            truncated: true,
        };
    }

    EncodedParam {
        value: Some(encoded),
        truncated: false,
    }
}

/// Decodes one text, failing on anything that is not a valid lz-string payload.
pub fn try_decode_param(value: &str) -> Result<String> {
    // Form decoding turns an unescaped `+` into a space.
    let value = value.replace(' ', "+");
    let decoded = lz_str::decompress_from_encoded_uri_component(value.as_str())
        .ok_or_else(|| DifflyError::Decode("not an lz-string payload".to_string()))?;
    if decoded.len() > MAX_DECODED_LENGTH {
        return Err(DifflyError::Decode(format!(
            "decoded value exceeds {} characters",
            MAX_DECODED_LENGTH
        )));
    }
    String::from_utf16(&decoded).map_err(|err| DifflyError::Decode(err.to_string()))
}

/// Decodes one text; a missing or undecodable parameter reads as an empty text.
pub fn decode_param(value: Option<&str>) -> String {
    match value {
        None | Some("") => String::new(),
        Some(value) => try_decode_param(value).unwrap_or_else(|err| {
            debug!("ignoring undecodable parameter: {}", err);
            String::new()
        }),
    }
}

/// Everything a shared link restores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareState {
    pub left: String,
    pub right: String,
    pub mode: ViewMode,
}

/// A query string for a [`ShareState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Without the leading `?`; empty when there is nothing to share.
    pub query: String,
    /// Set when one of the texts was left out for being too large.
    pub truncated: bool,
}

impl ShareLink {
    pub fn warning(&self) -> Option<&'static str> {
        self.truncated.then_some(TRUNCATION_WARNING)
    }
}

impl ShareState {
    pub fn new(left: impl Into<String>, right: impl Into<String>, mode: ViewMode) -> Self {
        ShareState {
            left: left.into(),
            right: right.into(),
            mode,
        }
    }

    pub fn to_query(&self) -> ShareLink {
        self.to_query_with_limit(MAX_PARAM_LENGTH)
    }

    /// Builds the query string. The texts themselves are never modified, even
    /// when one of them is too large to be part of it.
    pub fn to_query_with_limit(&self, limit: usize) -> ShareLink {
        let left = encode_param_with_limit(&self.left, limit);
        let right = encode_param_with_limit(&self.right, limit);

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(value) = &left.value {
            serializer.append_pair(LEFT_PARAM, value);
        }
        if let Some(value) = &right.value {
            serializer.append_pair(RIGHT_PARAM, value);
        }
        if self.mode == ViewMode::Split {
            serializer.append_pair(MODE_PARAM, ViewMode::Split.as_str());
        }

        ShareLink {
            query: serializer.finish(),
            truncated: left.truncated || right.truncated,
        }
    }

    /// Restores a state from a query string, with or without its leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut left = None;
        let mut right = None;
        let mut mode = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                LEFT_PARAM => left = Some(value.into_owned()),
                RIGHT_PARAM => right = Some(value.into_owned()),
                MODE_PARAM => mode = Some(value.into_owned()),
                _ => {}
            }
        }

        ShareState {
            left: decode_param(left.as_deref()),
            right: decode_param(right.as_deref()),
            mode: ViewMode::from_param(mode.as_deref()),
        }
    }
}
