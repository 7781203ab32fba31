//! One-shot status messages carried across a redirect in a cookie.
//!
//! The cookie holds the hex-encoded JSON of the message queue. The page that
//! renders the messages expires the cookie, so each message is seen once.

use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const COOKIE_NAME: &str = "flash";

const CLEAR_COOKIE: &str = "flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

/// Older messages are dropped beyond this many, keeping the cookie well under 4 KB.
pub const MAX_QUEUED: usize = 3;

const MAX_MESSAGE_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

pub fn encode(flashes: &[Flash]) -> String {
    // serializing plain strings and unit variants cannot fail
    let json = serde_json::to_vec(flashes).unwrap_or_default();
    hex::encode(json)
}

pub fn decode(value: &str) -> Option<Vec<Flash>> {
    let bytes = hex::decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Reads the queued messages from the request cookies. Unreadable cookies yield nothing.
pub fn take(headers: &HeaderMap) -> Vec<Flash> {
    let Some(raw) = cookie_value(headers, COOKIE_NAME) else {
        return Vec::new();
    };
    if raw.is_empty() {
        return Vec::new();
    }

    decode(raw).unwrap_or_else(|| {
        debug!("ignoring malformed flash cookie");
        Vec::new()
    })
}

/// Expires the flash cookie on `response`.
pub fn clear(response: &mut Response) {
    response
        .headers_mut()
        .append(header::SET_COOKIE, HeaderValue::from_static(CLEAR_COOKIE));
}

/// 303 redirect to `to`, queueing `flash` after any message still pending in `headers`.
/// Only the newest [`MAX_QUEUED`] messages survive.
pub fn redirect_with(headers: &HeaderMap, mut flash: Flash, to: &str) -> Response {
    if flash.message.chars().count() > MAX_MESSAGE_CHARS {
        flash.message = flash.message.chars().take(MAX_MESSAGE_CHARS).collect();
    }

    let mut queue = take(headers);
    queue.push(flash);
    if queue.len() > MAX_QUEUED {
        let excess = queue.len() - MAX_QUEUED;
        queue.drain(..excess);
    }

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        COOKIE_NAME,
        encode(&queue)
    );
    ([(header::SET_COOKIE, cookie)], Redirect::to(to)).into_response()
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
