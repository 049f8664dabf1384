//! Client for the occupied-slots endpoint.

use agenda_rs::{parse_occupied, slots_path};
use chrono::NaiveDate;
use gloo::net::http::Request;

/// Fetch the occupied times for `date`.
pub async fn fetch_occupied(base: &str, date: NaiveDate) -> Result<Vec<String>, String> {
    let url = slots_path(base, date);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("GET {url}: {e}"))?;

    if !response.ok() {
        return Err(format!("GET {url}: HTTP {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("GET {url}: {e}"))?;

    parse_occupied(&body).map_err(|e| format!("GET {url}: {e}"))
}
