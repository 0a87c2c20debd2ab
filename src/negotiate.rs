use http::header::ACCEPT;
use http::HeaderMap;
use parking_lot::Mutex;

use crate::cache::MatchCache;
use crate::error::ParseResult;
use crate::parser;
use crate::range::{sort_by_precedence, MediaRange};

/// One media type the server can produce, digested at construction.
///
/// The digest is lax: offers come from the server's own code, not from the
/// wire, so malformed input is the caller's problem. `raw` is handed back
/// verbatim when the offer is selected.
#[derive(Debug, Clone)]
pub struct Offer {
    main_type: String,
    subtype: String,
    params: Vec<(String, String)>,
    raw: String,
}

impl Offer {
    fn digest(raw: String) -> Offer {
        let (essence, rest) = match raw.split_once(';') {
            Some((essence, rest)) => (essence, Some(rest)),
            None => (raw.as_str(), None),
        };
        let (main_type, subtype) = match essence.split_once('/') {
            Some((main_type, subtype)) => (main_type, subtype),
            None => (essence, ""),
        };
        let main_type = main_type.trim().to_owned();
        let subtype = subtype.trim().to_owned();
        let params = rest
            .map(|rest| {
                rest.split(';')
                    .filter_map(|part| {
                        let (name, value) = match part.split_once('=') {
                            Some((name, value)) => (name.trim(), value.trim()),
                            None => (part.trim(), ""),
                        };
                        (!name.is_empty()).then(|| (name.to_owned(), value.to_owned()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        Offer {
            main_type,
            subtype,
            params,
            raw,
        }
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a client range accepts this offer. Every parameter the client
    /// names must be present on the offer with an equal value; the offer may
    /// carry extra parameters the client did not ask about.
    fn matches(&self, range: &MediaRange) -> bool {
        if range.main_type == "*" {
            return true;
        }
        if range.main_type != self.main_type {
            return false;
        }
        if range.subtype == "*" {
            return true;
        }
        if range.subtype != self.subtype {
            return false;
        }
        range
            .params
            .iter()
            .all(|(name, value)| self.param(name) == Some(value.as_str()))
    }
}

/// Picks the server media type to respond with for a given `Accept` header.
///
/// Offers are ranked by the client's quality values; ties go to the offer
/// registered first, and a missing header means the first offer outright.
/// Results are cached per header value.
#[derive(Debug)]
pub struct Negotiator {
    offers: Vec<Offer>,
    cache: Mutex<MatchCache>,
}

impl Negotiator {
    pub fn new<I, T>(types: I) -> Negotiator
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Negotiator {
            offers: types.into_iter().map(|t| Offer::digest(t.into())).collect(),
            cache: Mutex::new(MatchCache::default()),
        }
    }

    pub fn with_cache_capacity(self, capacity: usize) -> Negotiator {
        Negotiator {
            offers: self.offers,
            cache: Mutex::new(MatchCache::new(capacity)),
        }
    }

    /// The registered media types, in registration order.
    pub fn offers(&self) -> impl Iterator<Item = &str> {
        self.offers.iter().map(|o| o.raw.as_str())
    }

    /// Selects the offer to respond with, `None` meaning no acceptable
    /// representation exists. A missing header selects the first offer.
    ///
    /// Malformed headers surface a [`ParseError`](crate::ParseError) and are
    /// never cached.
    pub fn select(&self, header: Option<&str>) -> ParseResult<Option<String>> {
        let Some(header) = header else {
            return Ok(self.offers.first().map(|o| o.raw.clone()));
        };
        if let Some(cached) = self.cache.lock().get(header) {
            return Ok(cached);
        }
        let mut ranges = match parser::parse(header) {
            Ok(ranges) => ranges,
            Err(err) => {
                tracing::warn!(header, %err, "rejecting malformed accept header");
                return Err(err);
            }
        };
        sort_by_precedence(&mut ranges);

        let mut best: Option<(f32, &Offer)> = None;
        for offer in &self.offers {
            // The first range in precedence order decides this offer's q.
            if let Some(range) = ranges.iter().find(|r| offer.matches(r)) {
                match best {
                    Some((q, _)) if range.q <= q => {}
                    _ => best = Some((range.q, offer)),
                }
            }
        }
        let chosen = best.map(|(_, offer)| offer.raw.clone());
        self.cache.lock().insert(header.to_owned(), chosen.clone());
        Ok(chosen)
    }

    /// Reads `Accept` out of a header map and negotiates on it. A value that
    /// is not valid UTF-8 counts as no header at all.
    pub fn select_from_headers(&self, headers: &HeaderMap) -> ParseResult<Option<String>> {
        let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok());
        self.select(accept)
    }
}
