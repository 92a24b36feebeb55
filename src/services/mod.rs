/// View composition over the launch store
use crate::domain::{BoardView, LaunchCollectionState, LaunchRecord, LaunchSummary, NO_DETAILS};
use crate::table::TableState;
use crate::utils::format_summary_date;

/// Find a launch by id. A miss is a normal outcome, not an error.
pub fn find_by_id<'a>(records: &'a [LaunchRecord], id: &str) -> Option<&'a LaunchRecord> {
    records.iter().find(|r| r.id == id)
}

/// Listing view for the current store state.
///
/// The table is withheld while a fetch is in flight and whenever `error` is
/// set, even though the store still holds the last good records.
pub fn board_view(state: &LaunchCollectionState, table: &TableState) -> BoardView {
    let page = if state.is_loading || state.error.is_some() {
        None
    } else {
        Some(table.render(&state.records))
    };

    BoardView {
        is_loading: state.is_loading,
        error: state.error.clone(),
        table: page,
    }
}

/// Detail overlay for one launch
pub fn summarize(record: &LaunchRecord) -> LaunchSummary {
    LaunchSummary {
        id: record.id.clone(),
        name: record.name.clone(),
        launch_date_utc: record.launch_date_utc.clone(),
        launch_date: format_summary_date(&record.launch_date_utc),
        launchpad_id: record.launchpad_id.clone(),
        launchpad: record
            .launchpad_id
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        success: record.success,
        outcome: match record.success {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "Unknown",
        },
        details: record
            .details
            .clone()
            .unwrap_or_else(|| NO_DETAILS.to_string()),
    }
}

/// Detail overlay for `id`, if the store holds it
pub fn launch_summary(state: &LaunchCollectionState, id: &str) -> Option<LaunchSummary> {
    find_by_id(&state.records, id).map(summarize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FETCH_FAILED_MESSAGE;

    fn launch(id: &str, success: Option<bool>) -> LaunchRecord {
        LaunchRecord {
            id: id.to_string(),
            name: format!("Mission {id}"),
            launch_date_utc: "2020-05-30T19:22:00.000Z".to_string(),
            launchpad_id: None,
            success,
            details: None,
        }
    }

    fn loaded(records: Vec<LaunchRecord>) -> LaunchCollectionState {
        LaunchCollectionState {
            records,
            is_loading: false,
            error: None,
        }
    }

    #[test]
    fn test_find_by_id_hit_and_miss() {
        let records = vec![launch("a", None), launch("b", None)];
        assert_eq!(find_by_id(&records, "b").map(|r| r.id.as_str()), Some("b"));
        assert!(find_by_id(&records, "zzz").is_none());
        assert!(find_by_id(&[], "a").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let mut dup = launch("a", None);
        dup.name = "Duplicate".into();
        let records = vec![launch("a", None), dup];
        assert_eq!(
            find_by_id(&records, "a").map(|r| r.name.as_str()),
            Some("Mission a")
        );
    }

    #[test]
    fn test_board_view_shows_table_when_loaded() {
        let view = board_view(&loaded(vec![launch("a", Some(true))]), &TableState::default());
        assert!(!view.is_loading);
        assert_eq!(view.table.map(|t| t.rows.len()), Some(1));
    }

    #[test]
    fn test_board_view_hides_table_while_loading() {
        let state = LaunchCollectionState::default();
        let view = board_view(&state, &TableState::default());
        assert!(view.is_loading);
        assert!(view.table.is_none());
    }

    #[test]
    fn test_board_view_hides_stale_table_on_error() {
        let mut state = loaded(vec![launch("a", Some(true))]);
        state.error = Some(FETCH_FAILED_MESSAGE.to_string());

        let view = board_view(&state, &TableState::default());
        assert_eq!(view.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert!(!view.is_loading);
        assert!(view.table.is_none());
    }

    #[test]
    fn test_summary_distinguishes_unknown_outcome() {
        assert_eq!(summarize(&launch("a", Some(true))).outcome, "Yes");
        assert_eq!(summarize(&launch("a", Some(false))).outcome, "No");
        assert_eq!(summarize(&launch("a", None)).outcome, "Unknown");
    }

    #[test]
    fn test_summary_placeholders() {
        let summary = summarize(&launch("a", None));
        assert_eq!(summary.details, NO_DETAILS);
        assert_eq!(summary.launchpad, "Unknown");
        assert_eq!(summary.launchpad_id, None);
        assert_eq!(summary.launch_date, "5/30/2020");
    }

    #[test]
    fn test_launch_summary_miss_is_none() {
        let state = loaded(vec![launch("a", None)]);
        assert!(launch_summary(&state, "a").is_some());
        assert!(launch_summary(&state, "b").is_none());
    }
}
