/// Table sorting and pagination
use crate::domain::{
    LaunchPage, LaunchRecord, LaunchRow, PageSpec, SortDirection, SortField, SortSpec, NO_DETAILS,
    PAGE_SIZE_OPTIONS,
};
use crate::utils::{compare_names, format_table_date, parse_launch_date};
use std::cmp::Ordering;
use std::num::NonZeroUsize;

/// Sorted copy of `records`. The input sequence is never reordered.
///
/// - `Name`: collation order, stable for equal names.
/// - `Date`: timestamp order, stable for equal instants. Unparseable dates
///   are the lowest key.
/// - `Sequence`: no comparison at all. Ascending is response order and
///   descending is that order reversed.
/// - `Unrecognized`: response order regardless of direction.
pub fn sort_records(records: &[LaunchRecord], sort: SortSpec) -> Vec<LaunchRecord> {
    match sort.field {
        SortField::Sequence => {
            let mut sorted = records.to_vec();
            if sort.direction == SortDirection::Desc {
                sorted.reverse();
            }
            sorted
        }
        SortField::Name => {
            let mut sorted = records.to_vec();
            sorted.sort_by(|a, b| directed(compare_names(&a.name, &b.name), sort.direction));
            sorted
        }
        SortField::Date => {
            let mut keyed: Vec<_> = records
                .iter()
                .map(|r| (parse_launch_date(&r.launch_date_utc), r))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| directed(a.cmp(b), sort.direction));
            keyed.into_iter().map(|(_, r)| r.clone()).collect()
        }
        SortField::Unrecognized => records.to_vec(),
    }
}

fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

/// Half-open window `[index * size, index * size + size)`, clamped to the
/// slice. An index past the end yields an empty page.
pub fn paginate<T>(items: &[T], page: PageSpec) -> &[T] {
    let size = page.page_size.get();
    let start = page.page_index.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// 1-based number of the row at `offset` on the page, continuous across pages
pub fn row_number(page: PageSpec, offset: usize) -> usize {
    page.page_index * page.page_size.get() + offset + 1
}

/// Sort, window and number `records` into the visible table page.
pub fn render_page(records: &[LaunchRecord], sort: SortSpec, page: PageSpec) -> LaunchPage {
    let sorted = sort_records(records, sort);
    let rows = paginate(&sorted, page)
        .iter()
        .enumerate()
        .map(|(offset, record)| LaunchRow {
            number: row_number(page, offset),
            id: record.id.clone(),
            name: record.name.clone(),
            launch_date: format_table_date(&record.launch_date_utc),
            details: record
                .details
                .clone()
                .unwrap_or_else(|| NO_DETAILS.to_string()),
            summary_path: format!("/summary/{}", urlencoding::encode(&record.id)),
        })
        .collect();

    LaunchPage {
        rows,
        total: records.len(),
        page: page.page_index,
        page_size: page.page_size.get(),
        page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        sort,
    }
}

/// View-local sort and page selection of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableState {
    pub sort: SortSpec,
    pub page: PageSpec,
}

impl TableState {
    pub fn new(sort: SortSpec, page: PageSpec) -> Self {
        Self { sort, page }
    }

    /// Header click: flips an ascending active column, otherwise activates
    /// `field` ascending. The page index is left alone, so a user on page 2
    /// stays on page 2 of the new order.
    pub fn request_sort(&mut self, field: SortField) {
        let direction = if self.sort.field == field && self.sort.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.sort = SortSpec::new(field, direction);
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page.page_index = page_index;
    }

    /// Changing the page size always returns to the first page.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page = PageSpec::new(0, page_size);
    }

    pub fn render(&self, records: &[LaunchRecord]) -> LaunchPage {
        render_page(records, self.sort, self.page)
    }
}
