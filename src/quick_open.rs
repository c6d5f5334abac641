// quick_open.rs

use crate::error::KeyNotApplicable;
use crate::history::{HistoryEntry, RecencyList};

/// Maps a digit key `1`..=`9` to the entry at `digit - 1`. Anything else,
/// including `0` and digits past the end of the list, is not applicable.
pub fn resolve_key(list: &RecencyList, key: char) -> Result<&HistoryEntry, KeyNotApplicable> {
    let not_applicable = KeyNotApplicable { key: Some(key) };
    let digit = match key {
        '1'..='9' => key as usize - '0' as usize,
        _ => return Err(not_applicable),
    };
    list.get(digit - 1).map_err(|_| not_applicable)
}

/// Like [`resolve_key`], using the first character of typed input.
pub fn resolve_input<'a>(list: &'a RecencyList, input: &str) -> Result<&'a HistoryEntry, KeyNotApplicable> {
    match input.chars().next() {
        Some(key) => resolve_key(list, key),
        None => Err(KeyNotApplicable { key: None }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> RecencyList {
        RecencyList::with_entries(
            9,
            ["/e1", "/e2", "/e3", "/e4", "/e5"].into_iter().map(HistoryEntry::new),
        )
        .unwrap()
    }

    #[test]
    fn digits_within_size_resolve() {
        let list = five();
        for (i, key) in ['1', '2', '3', '4', '5'].into_iter().enumerate() {
            assert_eq!(resolve_key(&list, key).unwrap(), list.get(i).unwrap());
        }
    }

    #[test]
    fn zero_and_past_end_are_not_applicable() {
        let list = five();
        assert_eq!(
            resolve_key(&list, '0').unwrap_err(),
            KeyNotApplicable { key: Some('0') }
        );
        assert!(resolve_key(&list, '6').is_err());
        assert!(resolve_key(&list, '9').is_err());
    }

    #[test]
    fn non_digits_are_not_applicable() {
        let list = five();
        for key in ['a', ' ', '-', '\u{0663}', '\u{2460}'] {
            assert!(resolve_key(&list, key).is_err(), "{key:?} resolved");
        }
        assert_eq!(
            resolve_input(&list, "").unwrap_err(),
            KeyNotApplicable { key: None }
        );
    }

    #[test]
    fn input_uses_first_character() {
        let list = five();
        assert_eq!(resolve_input(&list, "2").unwrap(), &HistoryEntry::new("/e2"));
        assert_eq!(resolve_input(&list, "3x").unwrap(), &HistoryEntry::new("/e3"));
    }

    #[test]
    fn lookup_does_not_mutate() {
        let list = five();
        let before = list.to_vec();
        let _ = resolve_key(&list, '4');
        let _ = resolve_key(&list, '7');
        assert_eq!(list.to_vec(), before);
    }
}
