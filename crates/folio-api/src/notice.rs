//! One-shot status notices carried from `POST /contact` to the next `GET /`
//! in a cookie signed with the application's secret key.

use axum::http::{HeaderMap, header};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const COOKIE_NAME: &str = "folio_notice";

/// Expires the notice cookie after it has been shown once.
pub const CLEAR_COOKIE: &str = "folio_notice=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    MissingFields,
    Failed,
}

impl Notice {
    fn code(self) -> &'static str {
        match self {
            Notice::Sent => "sent",
            Notice::MissingFields => "missing",
            Notice::Failed => "failed",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "sent" => Some(Notice::Sent),
            "missing" => Some(Notice::MissingFields),
            "failed" => Some(Notice::Failed),
            _ => None,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Notice::Sent => "Thanks! Your message has been sent.",
            Notice::MissingFields => "Please fill in all fields.",
            Notice::Failed => "Something went wrong. Please try again later.",
        }
    }

    /// CSS category, `success` or `error`.
    pub fn category(self) -> &'static str {
        match self {
            Notice::Sent => "success",
            Notice::MissingFields | Notice::Failed => "error",
        }
    }

    /// `Set-Cookie` value holding this notice and its signature.
    pub fn to_cookie(self, secret: &str) -> String {
        format!(
            "{}={}.{}; Path=/; HttpOnly; SameSite=Lax; Max-Age=300",
            COOKIE_NAME,
            self.code(),
            sign(secret, self.code())
        )
    }

    /// Reads the notice cookie from a request. Unknown codes and bad
    /// signatures yield `None`.
    pub fn from_headers(headers: &HeaderMap, secret: &str) -> Option<Self> {
        let value = cookie_value(headers)?;
        let (code, signature) = value.split_once('.')?;
        if !verify(secret, code, signature) {
            return None;
        }
        Self::from_code(code)
    }
}

/// Raw value of the notice cookie, if the request carries one.
pub fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

fn mac(secret: &str, payload: &str) -> Option<HmacSha256> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload.as_bytes());
    Some(mac)
}

fn sign(secret: &str, payload: &str) -> String {
    mac(secret, payload)
        .map(|mac| hex::encode(mac.finalize().into_bytes()))
        .unwrap_or_default()
}

fn verify(secret: &str, payload: &str, signature: &str) -> bool {
    let Ok(bytes) = hex::decode(signature) else {
        return false;
    };
    mac(secret, payload).is_some_and(|mac| mac.verify_slice(&bytes).is_ok())
}
