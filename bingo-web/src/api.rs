//! HTTP clients: board persistence, hiscores lookup, wiki search.
//!
//! Each user action issues at most one outstanding request and nothing is
//! retried; failures map onto [`BoardError`] and surface inline next to
//! the control that triggered them.

use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::Response;

use bingo_core::{
    BoardError, BoardRecord, CreateBoardRequest, ErrorBody, PlayerStats, SaveOutcome,
    UpdateBoardRequest,
};

use crate::dom;

/// Persistence service base URL, compiled in the way the deployment base
/// path is: `API_URL` at build time, local default otherwise.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("API_URL").unwrap_or("http://localhost:5001")
}

/// Hiscores feed endpoint; takes a `player` query parameter.
#[must_use]
pub fn hiscores_base() -> &'static str {
    option_env!("HISCORES_URL")
        .unwrap_or("https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws")
}

/// Wiki search API endpoint.
#[must_use]
pub fn wiki_base() -> &'static str {
    option_env!("WIKI_URL").unwrap_or("https://oldschool.runescape.wiki/api.php")
}

fn upstream(err: &JsValue) -> BoardError {
    BoardError::upstream(dom::js_error_message(err))
}

/// Map a non-success persistence response onto the shared taxonomy,
/// preferring the service's own `{error}` message for the fallback case.
fn status_error(status: u16, body: &str) -> BoardError {
    match status {
        401 => BoardError::Unauthorized,
        404 => BoardError::NotFound,
        409 => BoardError::Conflict,
        _ => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .map_or_else(|_| format!("HTTP {status}"), |parsed| parsed.error);
            BoardError::upstream(message)
        }
    }
}

#[allow(clippy::future_not_send)]
async fn read_body(response: &Response) -> Result<String, BoardError> {
    dom::response_text(response).await.map_err(|e| upstream(&e))
}

/// Client for the board persistence service.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardApi;

impl BoardApi {
    /// `POST /solo-board`.
    ///
    /// # Errors
    ///
    /// `Conflict` when the name is taken, `Upstream` for transport or
    /// server failures.
    #[allow(clippy::future_not_send)]
    pub async fn create(request: &CreateBoardRequest) -> Result<SaveOutcome, BoardError> {
        let body = serde_json::to_string(request)
            .map_err(|e| BoardError::validation(e.to_string()))?;
        let url = format!("{}/solo-board", api_base());
        let response = dom::fetch_with_body("POST", &url, Some(&body))
            .await
            .map_err(|e| upstream(&e))?;
        Self::parse_save_outcome(&response).await
    }

    /// `GET /solo-board/:name`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no board has that name.
    #[allow(clippy::future_not_send)]
    pub async fn fetch(name: &str) -> Result<BoardRecord, BoardError> {
        let url = format!("{}/solo-board/{}", api_base(), encode_segment(name));
        let response = dom::fetch_response(&url).await.map_err(|e| upstream(&e))?;
        let text = read_body(&response).await?;
        if !response.ok() {
            return Err(status_error(response.status(), &text));
        }
        serde_json::from_str(&text).map_err(|e| BoardError::upstream(e.to_string()))
    }

    /// `PUT /solo-board/:name`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on password mismatch, `NotFound` for an unknown
    /// name.
    #[allow(clippy::future_not_send)]
    pub async fn update(name: &str, request: &UpdateBoardRequest) -> Result<SaveOutcome, BoardError> {
        let body = serde_json::to_string(request)
            .map_err(|e| BoardError::validation(e.to_string()))?;
        let url = format!("{}/solo-board/{}", api_base(), encode_segment(name));
        let response = dom::fetch_with_body("PUT", &url, Some(&body))
            .await
            .map_err(|e| upstream(&e))?;
        Self::parse_save_outcome(&response).await
    }

    #[allow(clippy::future_not_send)]
    async fn parse_save_outcome(response: &Response) -> Result<SaveOutcome, BoardError> {
        let text = read_body(response).await?;
        if !response.ok() {
            return Err(status_error(response.status(), &text));
        }
        serde_json::from_str(&text).map_err(|e| BoardError::upstream(e.to_string()))
    }
}

/// Client for the external statistics feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiscoresApi;

impl HiscoresApi {
    /// Look up an account's per-skill experience totals.
    ///
    /// A non-2xx answer or a short payload is an unknown username as far
    /// as the feed is concerned.
    ///
    /// # Errors
    ///
    /// `InvalidExternalAccount` or `Upstream`.
    #[allow(clippy::future_not_send)]
    pub async fn lookup(username: &str) -> Result<PlayerStats, BoardError> {
        let url = format!("{}?player={}", hiscores_base(), encode_segment(username));
        let response = dom::fetch_response(&url).await.map_err(|e| upstream(&e))?;
        if !response.ok() {
            return Err(BoardError::InvalidExternalAccount);
        }
        let text = read_body(&response).await?;
        let stats = PlayerStats::parse(username, &text)?;
        if stats.is_unranked() {
            return Err(BoardError::InvalidExternalAccount);
        }
        Ok(stats)
    }
}

/// One page hit from the wiki search API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WikiHit {
    pub title: String,
}

impl WikiHit {
    /// Conventional icon URL for a wiki page title.
    #[must_use]
    pub fn image_url(&self) -> String {
        let file = self.title.replace(' ', "_");
        format!("https://oldschool.runescape.wiki/images/{file}.png")
    }
}

#[derive(Debug, Deserialize)]
struct WikiQuery {
    #[serde(default)]
    search: Vec<WikiHit>,
}

#[derive(Debug, Deserialize)]
struct WikiSearchResponse {
    #[serde(default)]
    query: Option<WikiQuery>,
}

/// Client for the wiki page-search API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiApi;

impl WikiApi {
    /// Full-text page search; returns hits in relevance order.
    ///
    /// # Errors
    ///
    /// `Upstream` for transport failures or an unparseable payload.
    #[allow(clippy::future_not_send)]
    pub async fn search(query: &str) -> Result<Vec<WikiHit>, BoardError> {
        let url = format!(
            "{}?action=query&list=search&srsearch={}&srlimit=10&format=json&origin=*",
            wiki_base(),
            encode_segment(query)
        );
        let response = dom::fetch_response(&url).await.map_err(|e| upstream(&e))?;
        if !response.ok() {
            return Err(BoardError::upstream(format!("HTTP {}", response.status())));
        }
        let json = dom::response_json(&response).await.map_err(|e| upstream(&e))?;
        let parsed: WikiSearchResponse =
            serde_wasm_bindgen::from_value(json).map_err(|e| BoardError::upstream(e.to_string()))?;
        Ok(parsed.query.map(|q| q.search).unwrap_or_default())
    }
}

fn encode_segment(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}
