// Command history for replay

/// A recorded command: the operation name followed by its operand, exactly as
/// the user typed them
pub type Entry = Vec<String>;

/// Ordered record of successfully applied commands
///
/// Entries are only ever appended, or dropped all at once by `cancel`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Append a command to the end of the history
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Append several commands, preserving their order
    pub fn extend<I: IntoIterator<Item = Entry>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    /// Get an entry by index
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for History {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        History {
            entries: iter
                .into_iter()
                .map(|tokens| tokens.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut history = History::new();
        history.push(vec!["add".to_string(), "1".to_string()]);
        history.push(vec!["neg".to_string()]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap(), &vec!["add", "1"]);
        assert_eq!(history.get(1).unwrap(), &vec!["neg"]);
        assert!(history.get(2).is_none());
    }

    #[test]
    fn test_extend_appends_after_existing() {
        let mut history: History = vec![vec!["add", "1"]].into_iter().collect();
        let again = history.entries().to_vec();
        history.extend(again);

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1).unwrap(), &vec!["add", "1"]);
    }

    #[test]
    fn test_clear() {
        let mut history: History = vec![vec!["add", "1"], vec!["sqr"]].into_iter().collect();
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.iter().count(), 0);
    }
}
