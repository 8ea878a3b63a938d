//! Books of the Bible, in canonical (Protestant) order.

pub const OLD_TESTAMENT: &[&str] = &[
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy", "Joshua", "Judges", "Ruth",
    "1 Samuel", "2 Samuel", "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles", "Ezra",
    "Nehemiah", "Esther", "Job", "Psalms", "Proverbs", "Ecclesiastes", "Song of Solomon",
    "Isaiah", "Jeremiah", "Lamentations", "Ezekiel", "Daniel", "Hosea", "Joel", "Amos",
    "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk", "Zephaniah", "Haggai", "Zechariah",
    "Malachi",
];

pub const NEW_TESTAMENT: &[&str] = &[
    "Matthew", "Mark", "Luke", "John", "Acts", "Romans", "1 Corinthians", "2 Corinthians",
    "Galatians", "Ephesians", "Philippians", "Colossians", "1 Thessalonians",
    "2 Thessalonians", "1 Timothy", "2 Timothy", "Titus", "Philemon", "Hebrews", "James",
    "1 Peter", "2 Peter", "1 John", "2 John", "3 John", "Jude", "Revelation",
];

/// Old then New Testament.
pub fn books() -> Vec<String> {
    OLD_TESTAMENT
        .iter()
        .chain(NEW_TESTAMENT.iter())
        .map(|b| b.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_counts() {
        assert_eq!(OLD_TESTAMENT.len(), 39);
        assert_eq!(NEW_TESTAMENT.len(), 27);
        let all = books();
        assert_eq!(all.len(), 66);
        assert_eq!(all.first().map(String::as_str), Some("Genesis"));
        assert_eq!(all.last().map(String::as_str), Some("Revelation"));
    }
}
