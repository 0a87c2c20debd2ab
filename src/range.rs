use std::fmt;

/// One media range from an `Accept` header, e.g. `text/html;level=1;q=0.8`.
///
/// Parameters keep their insertion order; a repeated name overwrites the
/// value in place. The `q` parameter is never stored here, it is lifted
/// into [`MediaRange::q`] when the range is committed by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
    pub main_type: String,
    pub subtype: String,
    pub params: Vec<(String, String)>,
    pub q: f32,
}

impl MediaRange {
    pub fn new(main_type: impl Into<String>, subtype: impl Into<String>) -> MediaRange {
        MediaRange {
            main_type: main_type.into(),
            subtype: subtype.into(),
            params: Vec::new(),
            q: 1.0,
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
    }

    /// How specific this range is. Concrete subtypes outrank `a/*`, which
    /// outranks `*/*`; among equals, more parameters rank higher. `q` is
    /// not part of precedence, it only decides between matched offers.
    pub fn precedence(&self) -> u32 {
        let mut score = self.params.len() as u32;
        if self.subtype != "*" {
            score += 1_000_000;
        }
        if self.main_type != "*" {
            score += 1_000;
        }
        score
    }
}

/// Sorts descending by precedence, keeping parse order among equals.
pub fn sort_by_precedence(ranges: &mut [MediaRange]) {
    ranges.sort_by(|a, b| b.precedence().cmp(&a.precedence()));
}

impl fmt::Display for MediaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.main_type, self.subtype)?;
        for (name, value) in &self.params {
            write!(f, ";{}={}", name, value)?;
        }
        if self.q != 1.0 {
            write!(f, ";q={}", self.q)?;
        }
        Ok(())
    }
}
