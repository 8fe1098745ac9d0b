//! Tests for cursor pagination

use super::*;
use crate::error::Error;
use std::cell::RefCell;

/// A page shape close to what cursor APIs return
#[derive(Debug, Clone, PartialEq)]
struct Page {
    items: Vec<u32>,
}

/// Scripted fetch: returns pages in order, records cursors seen
fn scripted(
    pages: Vec<(Page, Option<String>)>,
) -> (
    impl FnMut(Option<String>) -> std::future::Ready<Result<(Page, Option<String>)>>,
    std::rc::Rc<RefCell<Vec<Option<String>>>>,
) {
    let calls = std::rc::Rc::new(RefCell::new(Vec::new()));
    let seen = calls.clone();
    let mut remaining = pages.into_iter();
    let fetch = move |cursor: Option<String>| {
        seen.borrow_mut().push(cursor);
        let next = remaining.next().expect("fetch called past the last page");
        std::future::ready(Ok(next))
    };
    (fetch, calls)
}

#[tokio::test]
async fn test_reduce_single_page() {
    let (fetch, calls) = scripted(vec![(Page { items: vec![1, 2] }, None)]);

    let result = reduce(fetch, |page, acc: Option<Page>| {
        assert!(acc.is_none());
        Ok(page)
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![1, 2]);
    assert_eq!(*calls.borrow(), vec![None]);
}

#[tokio::test]
async fn test_reduce_concatenates_in_page_order() {
    let (fetch, calls) = scripted(vec![
        (Page { items: vec![1, 2] }, Some("c1".to_string())),
        (Page { items: vec![3] }, Some("c2".to_string())),
        (Page { items: vec![4, 5] }, None),
    ]);

    let result = reduce(fetch, |page, acc: Option<Page>| match acc {
        None => Ok(page),
        Some(mut acc) => {
            acc.items.extend(page.items);
            Ok(acc)
        }
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        *calls.borrow(),
        vec![None, Some("c1".to_string()), Some("c2".to_string())]
    );
}

#[tokio::test]
async fn test_reduce_empty_string_cursor_terminates() {
    let (fetch, calls) = scripted(vec![(Page { items: vec![1] }, Some(String::new()))]);

    let result = reduce(fetch, |page, _| Ok(page)).await.unwrap();

    assert_eq!(result.items, vec![1]);
    assert_eq!(calls.borrow().len(), 1);
}

#[tokio::test]
async fn test_reduce_fetch_error_propagates() {
    let mut call = 0;
    let fetch = |_cursor: Option<String>| {
        call += 1;
        let result = if call == 1 {
            Ok((Page { items: vec![1] }, Some("c1".to_string())))
        } else {
            Err(Error::xrpc_status(502, "upstream down"))
        };
        std::future::ready(result)
    };

    let err = reduce(fetch, |page, acc: Option<Page>| match acc {
        None => Ok(page),
        Some(mut acc) => {
            acc.items.extend(page.items);
            Ok(acc)
        }
    })
    .await
    .unwrap_err();

    assert!(matches!(err, Error::XrpcStatus { status: 502, .. }));
}

#[tokio::test]
async fn test_reduce_combine_error_propagates() {
    let (fetch, _) = scripted(vec![(Page { items: vec![1] }, None)]);

    let err = reduce(fetch, |_page, _acc: Option<Page>| {
        Err(Error::output("combine failed"))
    })
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Output { .. }));
}

#[tokio::test]
async fn test_reduce_pages_drains_items() {
    let (fetch, _) = scripted(vec![
        (Page { items: vec![1, 2] }, Some("c1".to_string())),
        (Page { items: vec![3, 4] }, None),
    ]);

    let result = reduce_pages(fetch, |page: &mut Page| &mut page.items)
        .await
        .unwrap();

    assert_eq!(result.items, vec![1, 2, 3, 4]);
}
