//! Zotero web API client
//!
//! `ZoteroClient` speaks the Zotero v3 HTTP API with a blocking reqwest
//! client; the tool is strictly sequential, so no async runtime is involved.
//! Pagination (`limit`/`start` offsets, pages of 100) is hidden behind the
//! `Library` trait: callers see the full tag universe or a lazy item stream
//! and never the transport. The stream is finite and not restartable.

use crate::domain::Item;
use crate::error::{Result, ZotmetaError};
use crate::infrastructure::config::Settings;
use serde::Deserialize;
use std::collections::VecDeque;
use std::time::Duration;

const PAGE_SIZE: usize = 100;
const API_VERSION: &str = "3";

/// Lazy, finite, non-restartable stream of items
pub type ItemStream<'a> = Box<dyn Iterator<Item = Result<Item>> + 'a>;

/// The narrow seam between reports and the remote library.
///
/// Implemented by `ZoteroClient` for real use and by in-memory fakes in
/// service unit tests.
pub trait Library {
    /// Fetch the full tag universe
    fn tags(&self) -> Result<Vec<String>>;

    /// Stream all items, optionally restricted to one item type
    fn items(&self, item_type: Option<&str>) -> ItemStream<'_>;

    /// Add one tag to one item. The caller skips items that already carry
    /// the tag, so this always sends an update.
    fn add_tag(&self, item: &Item, tag: &str) -> Result<()>;
}

/// Wire form of a tag listing entry
#[derive(Debug, Deserialize)]
struct TagEnvelope {
    tag: String,
}

/// Wire form of an item: the fields we use live in `data`
#[derive(Debug, Deserialize)]
struct ItemEnvelope {
    data: Item,
}

/// Blocking client for one Zotero library
pub struct ZoteroClient {
    http: reqwest::blocking::Client,
    base: String,
    key: Option<String>,
}

impl ZoteroClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(ZoteroClient {
            http,
            base: library_base(settings),
            key: settings.key.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let mut request = self.http.get(url).header("Zotero-API-Version", API_VERSION);
        if let Some(key) = &self.key {
            request = request.header("Zotero-API-Key", key);
        }
        check_status(request.send()?)
    }

    fn tag_page(&self, start: usize) -> Result<Vec<String>> {
        let url = format!("{}/tags?limit={}&start={}", self.base, PAGE_SIZE, start);
        let entries: Vec<TagEnvelope> = self.get(&url)?.json()?;
        Ok(entries.into_iter().map(|e| e.tag).collect())
    }

    fn item_page(&self, item_type: Option<&str>, start: usize) -> Result<Vec<Item>> {
        let mut url = format!(
            "{}/items?format=json&limit={}&start={}",
            self.base, PAGE_SIZE, start
        );
        if let Some(item_type) = item_type {
            url.push_str("&itemType=");
            url.push_str(item_type);
        }
        let entries: Vec<ItemEnvelope> = self.get(&url)?.json()?;
        Ok(entries.into_iter().map(|e| e.data).collect())
    }
}

impl Library for ZoteroClient {
    fn tags(&self) -> Result<Vec<String>> {
        let mut tags = Vec::new();
        let mut start = 0;
        loop {
            let page = self.tag_page(start)?;
            let len = page.len();
            tags.extend(page);
            if len < PAGE_SIZE {
                return Ok(tags);
            }
            start += len;
        }
    }

    fn items(&self, item_type: Option<&str>) -> ItemStream<'_> {
        Box::new(ItemPager {
            client: self,
            item_type: item_type.map(str::to_string),
            start: 0,
            buffer: VecDeque::new(),
            done: false,
        })
    }

    fn add_tag(&self, item: &Item, tag: &str) -> Result<()> {
        let key = self.key.as_ref().ok_or_else(|| {
            ZotmetaError::Authentication("write operations require an API key".to_string())
        })?;

        let mut tags: Vec<serde_json::Value> = item
            .tags
            .iter()
            .map(|t| serde_json::json!({ "tag": t }))
            .collect();
        tags.push(serde_json::json!({ "tag": tag }));

        let url = format!("{}/items/{}", self.base, item.key);
        let response = self
            .http
            .patch(&url)
            .header("Zotero-API-Version", API_VERSION)
            .header("Zotero-API-Key", key)
            .header("If-Unmodified-Since-Version", item.version)
            .json(&serde_json::json!({ "tags": tags }))
            .send()?;

        check_status(response).map(|_| ())
    }
}

/// Lazily pages through `/items`, one page ahead of the consumer
struct ItemPager<'a> {
    client: &'a ZoteroClient,
    item_type: Option<String>,
    start: usize,
    buffer: VecDeque<Item>,
    done: bool,
}

impl Iterator for ItemPager<'_> {
    type Item = Result<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }
            match self.client.item_page(self.item_type.as_deref(), self.start) {
                Ok(page) => {
                    if page.len() < PAGE_SIZE {
                        self.done = true;
                    }
                    self.start += page.len();
                    self.buffer.extend(page);
                    if self.buffer.is_empty() {
                        return None;
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Base URL for one library, e.g. `https://api.zotero.org/users/12345`
fn library_base(settings: &Settings) -> String {
    format!(
        "{}/{}/{}",
        settings.api_base.trim_end_matches('/'),
        settings.library_type.path_prefix(),
        settings.library_id
    )
}

fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(ZotmetaError::Authentication(format!("status {}", status)));
    }
    if !status.is_success() {
        let message = response.text().unwrap_or_default();
        return Err(ZotmetaError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}
