//! Cursor-driven pagination
//!
//! # Overview
//!
//! Generic accumulation over an API that pages with an opaque cursor:
//! fetch a page, fold it into an accumulator, repeat with the returned
//! cursor until the server stops returning one. The first page seeds the
//! accumulator; later pages are folded in page order, so accumulated
//! items are the concatenation of the pages as fetched.
//!
//! Termination depends entirely on the upstream eventually returning an
//! empty cursor. No iteration bound is enforced here.

use crate::error::Result;
use std::future::Future;

/// Fold all pages of a cursor-paginated call into one accumulator.
///
/// `fetch` is called with `None` first, then with each returned cursor
/// while it is present and non-empty. `combine` folds each page into the
/// accumulator; on the first page it receives `None` and must produce
/// the seed. Any error from either closure aborts immediately and
/// propagates; no partial accumulator is returned and nothing is
/// retried.
pub async fn reduce<P, A, F, Fut, C>(mut fetch: F, mut combine: C) -> Result<A>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(P, Option<String>)>>,
    C: FnMut(P, Option<A>) -> Result<A>,
{
    let mut acc = None;
    let mut cursor = None;

    loop {
        let (page, next_cursor) = fetch(cursor).await?;
        acc = Some(combine(page, acc)?);

        match next_cursor {
            Some(c) if !c.is_empty() => cursor = Some(c),
            _ => break,
        }
    }

    // acc is always Some: fetch ran at least once and combine seeded it
    Ok(acc.expect("combine produced no accumulator"))
}

/// Collect the items of every page into a `Vec`, keeping the first
/// page's value as the carrier for page-level metadata.
///
/// `items` borrows each page's item vector mutably so pages can be
/// drained without cloning.
pub async fn reduce_pages<P, T, F, Fut, I>(fetch: F, mut items: I) -> Result<P>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(P, Option<String>)>>,
    I: FnMut(&mut P) -> &mut Vec<T>,
{
    reduce(fetch, move |mut page, acc: Option<P>| match acc {
        None => Ok(page),
        Some(mut acc) => {
            let fetched = std::mem::take(items(&mut page));
            items(&mut acc).extend(fetched);
            Ok(acc)
        }
    })
    .await
}

#[cfg(test)]
mod tests;
