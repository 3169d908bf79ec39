use futures::stream::{self, Stream, TryStreamExt};
use ickb_primitives::Cell;
use tracing::debug;

use crate::{
    client::LedgerClient,
    errors::LedgerClientError,
    query::{CellQuery, Cursor, Order},
};

/// Where the next page fetch starts.
#[derive(Debug)]
enum PageCursor {
    Start,
    After(Cursor),
    Exhausted,
}

/// Streams every cell matching `query`, fetching one page of `limit` cells per step.
///
/// A page shorter than `limit` ends the search, even if it carries a cursor: this relies on
/// the [`LedgerClient::find_cells_page`] contract that only the last page comes up short. The
/// first client error is yielded and ends the stream; nothing is retried here. Dropping the stream early is fine, no server-side state is
/// held between pages.
pub fn find_cells<'a>(
    client: &'a dyn LedgerClient,
    query: CellQuery,
    order: Order,
    limit: u32,
    on_chain: bool,
) -> impl Stream<Item = Result<Cell, LedgerClientError>> + Send + 'a {
    stream::try_unfold(PageCursor::Start, move |cursor| {
        let query = query.clone();
        async move {
            let after = match cursor {
                PageCursor::Exhausted => return Ok(None),
                PageCursor::Start => None,
                PageCursor::After(cursor) => Some(cursor),
            };

            let page = if on_chain {
                client
                    .find_cells_page_on_chain(&query, order, limit, after)
                    .await?
            } else {
                client.find_cells_page(&query, order, limit, after).await?
            };
            debug!(cells = page.cells.len(), %on_chain, "fetched cell page");

            let next = if page.cells.is_empty() || page.cells.len() < limit as usize {
                PageCursor::Exhausted
            } else {
                PageCursor::After(page.last_cursor)
            };
            Ok::<_, LedgerClientError>(Some((page.cells, next)))
        }
    })
    .map_ok(|cells| stream::iter(cells.into_iter().map(Ok)))
    .try_flatten()
}

#[cfg(test)]
mod tests {
    use futures::{StreamExt, TryStreamExt};
    use ickb_primitives::FixedPoint;
    use ickb_test_utils::{cell, script};
    use mockall::{predicate::eq, Sequence};

    use super::*;
    use crate::{client::MockLedgerClient, query::CellPage};

    fn test_cell(n: u8) -> Cell {
        cell(n, FixedPoint::from_ckb(100), script(1), None, vec![], 10)
    }

    fn page(cells: Vec<Cell>, cursor: u8) -> CellPage {
        CellPage {
            cells,
            last_cursor: Cursor::new(vec![cursor]),
        }
    }

    #[tokio::test]
    async fn follows_cursor_until_short_page() {
        let mut client = MockLedgerClient::new();
        let mut seq = Sequence::new();
        let query = CellQuery::by_lock(script(1));

        client
            .expect_find_cells_page()
            .withf(|_, _, limit, after| *limit == 2 && after.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(page(vec![test_cell(1), test_cell(2)], 1)));
        client
            .expect_find_cells_page()
            .withf(|_, _, _, after| *after == Some(Cursor::new(vec![1])))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(page(vec![test_cell(3)], 2)));

        let cells: Vec<Cell> = find_cells(&client, query, Order::Asc, 2, false)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(cells, vec![test_cell(1), test_cell(2), test_cell(3)]);
    }

    #[tokio::test]
    async fn empty_full_page_boundary_stops() {
        let mut client = MockLedgerClient::new();
        let mut seq = Sequence::new();

        client
            .expect_find_cells_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(page(vec![test_cell(1)], 1)));
        client
            .expect_find_cells_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(page(vec![], 1)));

        let cells: Vec<Cell> =
            find_cells(&client, CellQuery::by_lock(script(1)), Order::Asc, 1, false)
                .try_collect()
                .await
                .unwrap();
        assert_eq!(cells.len(), 1);
    }

    #[tokio::test]
    async fn short_page_ends_search_even_with_cursor() {
        let mut client = MockLedgerClient::new();
        client
            .expect_find_cells_page()
            .withf(|_, _, _, after| after.is_none())
            .times(1)
            .returning(|_, _, _, _| Ok(page(vec![test_cell(1), test_cell(2)], 7)));

        let cells: Vec<Cell> =
            find_cells(&client, CellQuery::by_lock(script(1)), Order::Asc, 3, false)
                .try_collect()
                .await
                .unwrap();
        assert_eq!(cells, vec![test_cell(1), test_cell(2)]);
    }

    #[tokio::test]
    async fn on_chain_uses_chain_query() {
        let mut client = MockLedgerClient::new();
        client.expect_find_cells_page().never();
        client
            .expect_find_cells_page_on_chain()
            .with(
                eq(CellQuery::by_lock(script(1))),
                eq(Order::Desc),
                eq(400),
                eq(None),
            )
            .times(1)
            .returning(|_, _, _, _| Ok(page(vec![test_cell(1)], 1)));

        let cells: Vec<Cell> =
            find_cells(&client, CellQuery::by_lock(script(1)), Order::Desc, 400, true)
                .try_collect()
                .await
                .unwrap();
        assert_eq!(cells.len(), 1);
    }

    #[tokio::test]
    async fn error_is_yielded_and_ends_stream() {
        let mut client = MockLedgerClient::new();
        client
            .expect_find_cells_page()
            .times(1)
            .returning(|_, _, _, _| Err(LedgerClientError::Network("down".into())));

        let items: Vec<_> = find_cells(&client, CellQuery::by_lock(script(1)), Order::Asc, 400, false)
            .collect()
            .await;
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(LedgerClientError::Network(_))));
    }
}
