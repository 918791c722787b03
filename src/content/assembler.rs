//! Post list assembler - orders located posts newest first

use chrono::NaiveDate;
use std::cmp::Ordering;

use super::{PostEntry, PostList};
use crate::error::PostError;

/// Three-way comparison of two date strings
///
/// This is plain string comparison. It orders ISO-8601 dates correctly only
/// when they are zero padded (`2024-03-05`, not `2024-3-5`).
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Order posts by date, newest first
///
/// The sort is stable: posts sharing a date keep their input order.
/// Malformed dates are not reported, they just sort as strings.
pub fn assemble(mut entries: Vec<PostEntry>) -> PostList {
    entries.sort_by(|a, b| compare_dates(b.meta.date_key(), a.meta.date_key()));
    PostList::from_ordered(entries)
}

/// Like [`assemble`], but rejects posts whose date is not `YYYY-MM-DD...`
pub fn assemble_checked(entries: Vec<PostEntry>) -> Result<PostList, PostError> {
    for entry in &entries {
        let date = entry.meta.date_key();
        if !is_iso_date(date) {
            return Err(PostError::InvalidDate {
                path: entry.path.clone(),
                date: date.to_string(),
            });
        }
    }
    Ok(assemble(entries))
}

/// Check that a string starts with a real zero-padded calendar date
fn is_iso_date(s: &str) -> bool {
    let Some(prefix) = s.get(..10) else {
        return false;
    };
    let shaped = prefix.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    let separated = s.len() == 10 || s[10..].starts_with(['T', ' ']);
    shaped && separated && NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostMetadata;

    fn entry(path: &str, date: &str) -> PostEntry {
        let (meta, _) = PostMetadata::parse(&format!("---\ndate: \"{date}\"\n---\n")).unwrap();
        PostEntry::new(meta, path)
    }

    fn paths(list: &PostList) -> Vec<&str> {
        list.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_compare_dates() {
        assert_eq!(compare_dates("2024-01-01", "2024-01-02"), Ordering::Less);
        assert_eq!(compare_dates("2024-01-02", "2024-01-01"), Ordering::Greater);
        assert_eq!(compare_dates("2024-01-01", "2024-01-01"), Ordering::Equal);
    }

    #[test]
    fn test_newest_first() {
        let list = assemble(vec![
            entry("old", "2021-06-01"),
            entry("new", "2024-02-10"),
            entry("mid", "2023-11-02"),
        ]);
        assert_eq!(paths(&list), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_adjacent_entries_descend() {
        let list = assemble(vec![
            entry("a", "2022-01-01"),
            entry("b", "2024-05-05T08:00:00Z"),
            entry("c", "2024-05-05"),
            entry("d", "2019-12-31"),
            entry("e", "2023-03-03"),
        ]);
        for pair in list.windows(2) {
            assert!(pair[0].meta.date_key() >= pair[1].meta.date_key());
        }
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let list = assemble(vec![
            entry("zeta", "2024-01-01"),
            entry("alpha", "2024-01-01"),
            entry("older", "2023-01-01"),
        ]);
        assert_eq!(paths(&list), vec!["zeta", "alpha", "older"]);

        let list = assemble(vec![
            entry("alpha", "2024-01-01"),
            entry("older", "2023-01-01"),
            entry("zeta", "2024-01-01"),
        ]);
        assert_eq!(paths(&list), vec!["alpha", "zeta", "older"]);
    }

    #[test]
    fn test_unpadded_dates_misorder_silently() {
        // "2024-3-5" > "2024-12-01" as strings
        let list = assemble(vec![entry("dec", "2024-12-01"), entry("mar", "2024-3-5")]);
        assert_eq!(paths(&list), vec!["mar", "dec"]);
    }

    #[test]
    fn test_missing_date_sorts_last() {
        let list = assemble(vec![
            PostEntry::new(PostMetadata::default(), "undated"),
            entry("dated", "2020-01-01"),
        ]);
        assert_eq!(paths(&list), vec!["dated", "undated"]);
    }

    #[test]
    fn test_assemble_checked_accepts_iso_dates() {
        let list = assemble_checked(vec![
            entry("a", "2023-01-01"),
            entry("b", "2024-03-05T10:00:00Z"),
            entry("c", "2024-03-05 09:00"),
        ])
        .unwrap();
        assert_eq!(paths(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_assemble_checked_rejects_unpadded_date() {
        let err = assemble_checked(vec![entry("ok", "2024-12-01"), entry("bad", "2024-3-5")])
            .unwrap_err();
        match err {
            PostError::InvalidDate { path, date } => {
                assert_eq!(path, "bad");
                assert_eq!(date, "2024-3-5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_assemble_checked_rejects_missing_and_impossible_dates() {
        let undated = PostEntry::new(PostMetadata::default(), "undated");
        assert!(assemble_checked(vec![undated]).is_err());
        assert!(assemble_checked(vec![entry("feb", "2023-02-30")]).is_err());
    }
}
