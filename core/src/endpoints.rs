//! Backend URL layout.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::dashboard::PartsQuery;

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Builds endpoint URLs under one API base (e.g. `http://localhost:8000/api`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `POST` multipart, one `file` field per archive.
    pub fn upload(&self) -> String {
        format!("{}/upload/", self.base)
    }

    pub fn stats(&self) -> String {
        format!("{}/dashboard/stats/", self.base)
    }

    /// Listing path; query parameters come from [`PartsQuery::params`].
    pub fn parts(&self) -> String {
        format!("{}/dashboard/pecas/", self.base)
    }

    pub fn part_detail(&self, codigo: &str) -> String {
        format!("{}/dashboard/pecas/{}/", self.base, segment(codigo))
    }

    pub fn upload_history(&self) -> String {
        format!("{}/uploads/", self.base)
    }

    pub fn upload_details(&self, upload_id: &str) -> String {
        format!("{}/uploads/{}/", self.base, segment(upload_id))
    }
}

impl PartsQuery {
    /// `page`, `page_size` and `search` as sent to the listing endpoint.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
            ("search", self.search.clone()),
        ]
    }
}
