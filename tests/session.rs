use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use recent_files::menu::RecentMenu;
use recent_files::quick_open::resolve_key;
use recent_files::store::HistoryStore;
use recent_files::{
    DocumentOpener, FailureReporter, FileOpener, FsExistence, HistoryEntry, OpenOutcome, RecencyList,
};

#[derive(Default)]
struct Loaded(Vec<HistoryEntry>);

impl DocumentOpener for Loaded {
    fn open(&mut self, entry: &HistoryEntry) -> anyhow::Result<()> {
        self.0.push(entry.clone());
        Ok(())
    }
}

#[derive(Default)]
struct Dialogs(Rc<RefCell<Vec<String>>>);

impl FailureReporter for Dialogs {
    fn file_not_found(&mut self, entry: &HistoryEntry) {
        self.0.borrow_mut().push(format!("File not found: {}", entry));
    }
}

#[test]
fn history_survives_restart() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let libs: Vec<_> = (1..=4).map(|i| dir.path().join(format!("lib{i}.bib"))).collect();
    for lib in &libs {
        fs::write(lib, "")?;
    }
    let store = HistoryStore::new(dir.path().join("recent"));

    {
        let mut list = store.load(3)?;
        store.attach(&mut list);
        let (menu, _) = RecentMenu::bind(&mut list);
        let mut files = FileOpener::new(FsExistence, Loaded::default(), Dialogs::default());
        for lib in &libs {
            assert_eq!(files.open(&mut list, HistoryEntry::new(lib)), OpenOutcome::Opened);
        }
        assert_eq!(files.opener().0.len(), 4);
        assert_eq!(menu.borrow().items().len(), 3 + 2);
        assert_eq!(files.open_by_key(&mut list, '3'), Some(OpenOutcome::Opened));
    }

    let list = store.load(3)?;
    let order: Vec<_> = list.iter().cloned().collect();
    assert_eq!(
        order,
        vec![
            HistoryEntry::new(&libs[1]),
            HistoryEntry::new(&libs[3]),
            HistoryEntry::new(&libs[2]),
        ]
    );
    Ok(())
}

#[test]
fn deleted_file_stays_listed_and_is_reported() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let lib = dir.path().join("gone.bib");
    fs::write(&lib, "")?;

    let mut list = RecencyList::new(5)?;
    let dialogs = Dialogs::default();
    let shown = dialogs.0.clone();
    let mut files = FileOpener::new(FsExistence, Loaded::default(), dialogs);
    files.open(&mut list, HistoryEntry::new(&lib));
    fs::remove_file(&lib)?;

    let entry = resolve_key(&list, '1')?.clone();
    assert_eq!(files.open(&mut list, entry.clone()), OpenOutcome::NotFound);
    assert_eq!(*shown.borrow(), vec![format!("File not found: {}", entry)]);
    assert!(list.contains(&entry));
    assert_eq!(files.opener().0.len(), 1);
    Ok(())
}

#[test]
fn every_mutation_notifies_each_listener_once() {
    let mut list = RecencyList::new(2).unwrap();
    let calls = Rc::new(RefCell::new(Vec::new()));
    for name in ["a", "b"] {
        let calls = calls.clone();
        list.subscribe(move |l: &RecencyList| calls.borrow_mut().push((name, l.size())));
    }
    list.add(HistoryEntry::new("/x"));
    list.add(HistoryEntry::new("/x"));
    list.clear();
    list.clear();
    assert_eq!(
        *calls.borrow(),
        vec![("a", 1), ("b", 1), ("a", 1), ("b", 1), ("a", 0), ("b", 0), ("a", 0), ("b", 0)]
    );
}
