//! Shareable countdown links: `<base>?name=<event>&date=<ISO-8601>`.

use crate::countdown::CountdownData;
use crate::error::StorageError;

use super::kv::QueryStore;
use super::persistence::{load_countdown, save_countdown};

/// Build a link to `data` rooted at `base`. Any query or fragment already on
/// `base` is dropped.
pub fn share_url(base: &str, data: &CountdownData) -> Result<String, StorageError> {
    let mut url = url::Url::parse(base)?;
    url.set_query(None);
    url.set_fragment(None);

    let mut store = QueryStore::new(url);
    save_countdown(&mut store, data)?;
    Ok(store.into_url().into())
}

/// Countdown carried by a share link, or `None` when the link is malformed
/// or lacks either parameter.
pub fn decode_share_url(input: &str) -> Option<CountdownData> {
    match QueryStore::parse(input.trim()) {
        Ok(store) => load_countdown(&store),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed share link");
            None
        }
    }
}
