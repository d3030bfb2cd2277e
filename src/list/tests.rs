use super::*;

// =========================================================
// Helpers
// =========================================================

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: String,
    title: String,
}

fn row(id: &str, title: &str) -> Row {
    Row {
        id: id.to_string(),
        title: title.to_string(),
    }
}

fn titles(n: usize) -> Vec<Row> {
    (0..n).map(|i| row(&i.to_string(), &format!("Book {i}"))).collect()
}

fn controller() -> ListController<Row> {
    ListController::new(|r| vec![r.title.clone()])
}

// =========================================================
// Pure core
// =========================================================

#[test]
fn matching_is_case_insensitive_substring() {
    let keys = vec!["The Name of the Wind".to_string()];
    assert!(matches(&keys, "wind"));
    assert!(matches(&keys, "NAME OF"));
    assert!(!matches(&keys, "rothfuss"));
}

#[test]
fn empty_term_matches_everything() {
    assert!(matches(&["anything".to_string()], ""));
    assert!(matches(&[], ""));
}

#[test]
fn any_key_can_match() {
    // review search matches comment or book title
    let keys = vec!["loved it".to_string(), "Dune".to_string()];
    assert!(matches(&keys, "dune"));
    assert!(matches(&keys, "loved"));
    assert!(!matches(&keys, "hated"));
}

#[test]
fn total_pages_is_ceil_of_len_over_page_size() {
    assert_eq!(total_pages(0), 0);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(5), 1);
    assert_eq!(total_pages(6), 2);
    assert_eq!(total_pages(10), 2);
    assert_eq!(total_pages(11), 3);
}

#[test]
fn page_clamps_into_range() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(9, 3), 3);
    // empty collection still has page 1
    assert_eq!(clamp_page(7, 0), 1);
}

#[test]
fn page_slice_returns_the_requested_window() {
    let items = titles(12);
    let first = page_slice(&items, 1);
    assert_eq!(first.len(), PAGE_SIZE);
    assert_eq!(first[0].title, "Book 0");

    let last = page_slice(&items, 3);
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].title, "Book 10");

    // out of range clamps to the last page instead of vanishing
    assert_eq!(page_slice(&items, 9), last);
}

// =========================================================
// Controller
// =========================================================

#[test]
fn filtered_view_contains_exactly_the_matching_rows() {
    let list = controller();
    let seq = list.begin_fetch();
    list.resolve(
        seq,
        Ok(vec![row("1", "Dune"), row("2", "Emma"), row("3", "dune messiah")]),
    );

    list.set_search("dune".to_string());
    let visible: Vec<String> = list.visible().into_iter().map(|r| r.title).collect();
    assert_eq!(visible, vec!["Dune", "dune messiah"]);
}

#[test]
fn search_change_resets_to_page_one() {
    let list = controller();
    let seq = list.begin_fetch();
    list.resolve(seq, Ok(titles(12)));

    list.set_page(3);
    assert_eq!(list.page(), 3);

    list.set_search("book".to_string());
    assert_eq!(list.page(), 1);
}

#[test]
fn page_clamps_when_the_filtered_set_shrinks() {
    let list = controller();
    let seq = list.begin_fetch();
    list.resolve(seq, Ok(titles(12)));

    list.set_page(3);
    // "Book 1" matches Book 1, 10, 11: one page of results
    list.search.set("book 1".to_string());
    assert_eq!(list.pages(), 1);
    assert_eq!(list.page(), 1);
    assert_eq!(list.visible().len(), 3);
}

#[test]
fn loading_holds_until_first_response() {
    let list = controller();
    assert!(list.loading());
    let seq = list.begin_fetch();
    list.resolve(seq, Ok(titles(1)));
    assert!(!list.loading());
}

#[test]
fn fetch_failure_sets_the_error_flag_and_success_clears_it() {
    let list = controller();
    let seq = list.begin_fetch();
    list.resolve(seq, Err(ApiError::Transport("offline".to_string())));
    assert!(list.error().is_some());
    assert!(!list.loading());

    let seq = list.begin_fetch();
    list.resolve(seq, Ok(titles(2)));
    assert!(list.error().is_none());
    assert_eq!(list.visible().len(), 2);
}

#[test]
fn stale_responses_are_discarded() {
    let list = controller();
    let old = list.begin_fetch();
    let new = list.begin_fetch();

    list.resolve(new, Ok(vec![row("1", "fresh")]));
    // the superseded response must not overwrite the fresh one
    list.resolve(old, Ok(vec![row("2", "stale")]));

    let visible = list.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "fresh");
}

#[test]
fn remove_where_drops_the_row_without_refetch() {
    let list = controller();
    let seq = list.begin_fetch();
    list.resolve(seq, Ok(vec![row("1", "keep"), row("2", "drop")]));

    list.remove_where(|r| r.id == "2");
    let ids: Vec<String> = list.visible().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn patch_where_edits_in_place() {
    let list = controller();
    let seq = list.begin_fetch();
    list.resolve(seq, Ok(vec![row("1", "old title")]));

    list.patch_where(|r| r.id == "1", |r| r.title = "new title".to_string());
    assert_eq!(list.visible()[0].title, "new title");
}
