//! Commands module - CLI operations built on the codec
//!
//! Provides:
//! - encode: typed integer arguments
//! - call: one JSON argument list through the dynamic call boundary
//! - batch: one call per input line
//! - range: a contiguous run of ids

pub mod batch;
pub mod call;
pub mod encode;
pub mod range;

use anyhow::{bail, Context, Result};
use std::fmt;
use url::Url;

use crate::codec::{OverflowPolicy, ShortCode};
use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::Renderer;

/// Options shared by every encoding command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub renderer: Renderer,
    pub policy: OverflowPolicy,
    pub base_url: Option<BaseUrl>,
}

impl EncodeOptions {
    /// Build a code item, attaching the short URL when a base is configured
    pub fn code_item(&self, value: u64, code: ShortCode) -> ResultItem {
        let url = self.base_url.as_ref().map(|base| base.short_url(&code));
        let item = ResultItem::code(value, code);
        match url {
            Some(url) => item.with_url(url),
            None => item,
        }
    }
}

/// A base URL that codes can always be appended to as a path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The base with `code` as its final path segment
    pub fn short_url(&self, code: &ShortCode) -> Url {
        let mut url = self.0.clone();
        // Only cannot-be-a-base URLs refuse segments; parse_base_url rejects those.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(code.as_str());
        }
        url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Parse the base URL that short codes are appended to.
///
/// The path is normalized to end with '/'.
pub fn parse_base_url(s: &str) -> Result<BaseUrl> {
    let mut url = Url::parse(s).with_context(|| format!("Invalid base URL: {}", s))?;
    if url.cannot_be_a_base() {
        bail!("Base URL cannot have paths appended: {}", s);
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(BaseUrl(url))
}

/// Map inputs to result items, in parallel when the `parallel` feature is on.
///
/// Output order always matches input order.
#[cfg(feature = "parallel")]
pub(crate) fn map_items<T, F>(inputs: &[T], f: F) -> Vec<ResultItem>
where
    T: Sync,
    F: Fn(&T) -> ResultItem + Sync + Send,
{
    use rayon::prelude::*;
    inputs.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_items<T, F>(inputs: &[T], f: F) -> Vec<ResultItem>
where
    F: Fn(&T) -> ResultItem,
{
    inputs.iter().map(f).collect()
}

/// Render a result set to stdout
pub(crate) fn emit(result_set: &ResultSet, renderer: &Renderer) {
    let output = renderer.render(result_set);
    if !output.is_empty() {
        println!("{}", output);
    }
}
