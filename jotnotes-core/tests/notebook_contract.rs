//! End-to-end checks of the notebook API against a file-backed database.

use jotnotes_core::{JotnotesError, Notebook};
use tempfile::NamedTempFile;

fn open() -> (NamedTempFile, Notebook) {
    let temp = NamedTempFile::new().unwrap();
    let notebook = Notebook::open(temp.path()).unwrap();
    (temp, notebook)
}

fn ids(notebook: &Notebook, keyword: &str) -> Vec<i64> {
    notebook
        .search_notes(keyword)
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect()
}

#[test]
fn fetch_returns_triple_with_assigned_id() {
    let (_temp, nb) = open();
    for i in 0..10 {
        let id = nb.add_note(&format!("title {i}"), &format!("body {i}")).unwrap();
        let (fetched_id, title, content) = nb.fetch_note_by_id(id).unwrap().into_parts();
        assert_eq!(fetched_id, id);
        assert_eq!(title, format!("title {i}"));
        assert_eq!(content, format!("body {i}"));
    }
}

#[test]
fn empty_search_count_is_adds_minus_deletes() {
    let (_temp, nb) = open();
    let mut added = Vec::new();
    for i in 0..8 {
        added.push(nb.add_note(&format!("n{i}"), "").unwrap());
    }
    for id in added.iter().step_by(3) {
        nb.delete_note(*id).unwrap();
    }
    // a failed delete must not change the count
    assert!(nb.delete_note(10_000).is_err());

    assert_eq!(nb.search_notes("").unwrap().len(), 8 - 3);
}

#[test]
fn keyword_search_returns_matching_titles_only() {
    let (_temp, nb) = open();
    let shopping = nb.add_note("Shopping", "").unwrap();
    let list = nb.add_note("shopping list", "").unwrap();
    let _work = nb.add_note("Work", "").unwrap();

    assert_eq!(ids(&nb, "shop"), vec![list, shopping]);
}

#[test]
fn deleted_note_disappears_everywhere() {
    let (_temp, nb) = open();
    let id = nb.add_note("temporary", "").unwrap();

    nb.delete_note(id).unwrap();

    assert!(!ids(&nb, "").contains(&id));
    assert!(matches!(
        nb.fetch_note_by_id(id),
        Err(JotnotesError::NoteNotFound(missing)) if missing == id
    ));
}

#[test]
fn listing_is_reverse_insertion_order() {
    let (_temp, nb) = open();
    let a = nb.add_note("A", "").unwrap();
    let b = nb.add_note("B", "").unwrap();
    let c = nb.add_note("C", "").unwrap();

    assert_eq!(ids(&nb, ""), vec![c, b, a]);
}

#[test]
fn title_and_content_are_not_swapped() {
    let (temp, nb) = open();
    let id = nb.add_note("T", "C").unwrap();
    drop(nb);

    // Inspect the raw row rather than going back through the API.
    let conn = rusqlite::Connection::open(temp.path()).unwrap();
    let (title, content): (String, String) = conn
        .query_row(
            "SELECT title, content FROM notes WHERE id = ?1",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(title, "T");
    assert_eq!(content, "C");
}
