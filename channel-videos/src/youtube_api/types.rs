//! Shared types and cursor-based pagination for the YouTube Data API client.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::Stream;

/// The largest page size the YouTube Data API accepts for list endpoints.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// One page of results from a list endpoint.
#[derive(Debug)]
pub struct Page<T> {
    /// The items on this page, in the order the API returned them.
    pub items: VecDeque<T>,
    /// The `nextPageToken` of the response.
    ///
    /// Present only while more results exist. It is passed back to the API verbatim to
    /// request the following page.
    pub next_page_token: Option<String>,
}

type PendingPage<'a, F, T> =
    Pin<Box<dyn Future<Output = eyre::Result<(F, Page<T>)>> + 'a + Send>>;

/// A stream over every item of a cursor-paginated YouTube API list endpoint.
///
/// Items are yielded one at a time in the order the API returned them. The next page is
/// only requested once the current one has been drained, so at most one request is in
/// flight at any time. The stream ends after the first page without a `nextPageToken`,
/// or right after yielding a fetch error.
pub struct PagedStream<'a, T, F> {
    buffered: VecDeque<T>,
    in_flight: Option<PendingPage<'a, F, T>>,
    pages_fetched: usize,
    exhausted: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Creates a stream that calls `fetch_page` with `None` for the first page, and then
    /// with each page's `nextPageToken` until one is absent.
    pub fn new<Fut>(fetch_page: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: Send + 'a,
        Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
    {
        let first_page = async move {
            let page = fetch_page(None).await?;
            Ok((fetch_page, page))
        };
        Self {
            buffered: VecDeque::new(),
            in_flight: Some(Box::pin(first_page)),
            pages_fetched: 0,
            exhausted: false,
        }
    }
}

impl<T: Unpin, F> Unpin for PagedStream<'_, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: Send + 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if self.exhausted {
                return Poll::Ready(None);
            }

            let Some(in_flight) = self.in_flight.as_mut() else {
                self.exhausted = true;
                return Poll::Ready(None);
            };

            match in_flight.as_mut().poll(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    self.in_flight = None;
                    self.exhausted = true;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(Ok((fetch_page, page))) => {
                    self.pages_fetched += 1;
                    tracing::trace!(
                        page = self.pages_fetched,
                        items = page.items.len(),
                        has_more = page.next_page_token.is_some(),
                        "received page"
                    );
                    self.buffered.extend(page.items);

                    match page.next_page_token {
                        Some(cursor) => {
                            // queued now, but only polled once the buffer is drained
                            self.in_flight = Some(Box::pin(async move {
                                let page = fetch_page(Some(cursor)).await?;
                                Ok((fetch_page, page))
                            }));
                        }
                        None => {
                            self.in_flight = None;
                            self.exhausted = true;
                        }
                    }
                }
            }
        }
    }
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    ///
    /// For `search.list` this is an approximation and never exceeds 1,000,000.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn follows_cursors_until_absent() {
        let requested = Mutex::new(Vec::new());
        let stream = PagedStream::new(|cursor: Option<String>| {
            requested.lock().unwrap().push(cursor.clone());
            async move {
                let page = match cursor.as_deref() {
                    None => Page {
                        items: VecDeque::from([1, 2]),
                        next_page_token: Some("next-1".to_string()),
                    },
                    Some("next-1") => Page {
                        items: VecDeque::from([3]),
                        next_page_token: Some("next-2".to_string()),
                    },
                    Some("next-2") => Page {
                        items: VecDeque::from([4, 5]),
                        next_page_token: None,
                    },
                    Some(other) => eyre::bail!("unexpected cursor {other}"),
                };
                Ok(page)
            }
        });

        let items: Vec<_> = stream.map(|item| item.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            *requested.lock().unwrap(),
            vec![
                None,
                Some("next-1".to_string()),
                Some("next-2".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn empty_page_with_cursor_keeps_going() {
        let stream = PagedStream::new(|cursor: Option<String>| async move {
            Ok(match cursor {
                None => Page {
                    items: VecDeque::new(),
                    next_page_token: Some("more".to_string()),
                },
                Some(_) => Page {
                    items: VecDeque::from(["last"]),
                    next_page_token: None,
                },
            })
        });

        let items: Vec<_> = stream.map(|item| item.unwrap()).collect().await;
        assert_eq!(items, vec!["last"]);
    }

    #[tokio::test]
    async fn error_ends_the_stream() {
        let stream = PagedStream::new(|cursor: Option<String>| async move {
            match cursor {
                None => Ok(Page {
                    items: VecDeque::from([1]),
                    next_page_token: Some("broken".to_string()),
                }),
                Some(_) => Err(eyre::eyre!("quota exceeded")),
            }
        });
        let mut stream = std::pin::pin!(stream);

        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        assert!(stream.next().await.unwrap().is_err());
        assert!(stream.next().await.is_none());
    }
}
