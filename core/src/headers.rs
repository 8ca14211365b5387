//! Request headers derived from query state.

use crate::options::ClientOptions;
use crate::query::{QueryState, ReturnPreference};

/// Ordered `(name, value)` headers
pub type HeaderPairs = Vec<(String, String)>;

/// Accept type asking PostgREST for a single JSON object instead of an array
pub const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Compiles the headers for `state`.
///
/// Static client headers come first, then profile, `Accept`, `Prefer` and
/// row range headers.
pub fn compile_headers(state: &QueryState, options: &ClientOptions) -> HeaderPairs {
    let mut headers: HeaderPairs = options
        .headers
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    if let Some(schema) = options.profile() {
        let name = if state.method.is_read() {
            "Accept-Profile"
        } else {
            "Content-Profile"
        };
        headers.push((name.to_owned(), schema.to_owned()));
    }

    if state.single {
        headers.push(("Accept".to_owned(), SINGLE_OBJECT.to_owned()));
    }

    if let Some(prefer) = prefer(state) {
        headers.push(("Prefer".to_owned(), prefer));
    }

    if let Some((from, to)) = state.rows {
        headers.push(("Range-Unit".to_owned(), "items".to_owned()));
        headers.push(("Range".to_owned(), format!("{from}-{to}")));
    }

    headers
}

fn prefer(state: &QueryState) -> Option<String> {
    let mut parts = Vec::new();

    if !state.method.is_read() {
        let returning = state.returning.or(state
            .projection
            .as_ref()
            .map(|_| ReturnPreference::Representation));
        if let Some(returning) = returning {
            parts.push(format!("return={}", returning.as_str()));
        }
    }
    if let Some(count) = state.count {
        parts.push(format!("count={}", count.as_str()));
    }
    if state.upsert {
        parts.push("resolution=merge-duplicates".to_owned());
    }

    (!parts.is_empty()).then(|| parts.join(","))
}
