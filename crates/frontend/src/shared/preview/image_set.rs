use crate::shared::config::MAX_IMAGES;
use uuid::Uuid;

/// Creates and releases transient preview references for selected files
pub trait PreviewSource<F> {
    /// Derive a locally resolvable reference (e.g. `blob:` URL) for `file`
    fn acquire(&self, file: &F) -> Result<String, String>;

    /// Free the resource behind a reference obtained from `acquire`
    fn release(&self, reference: &str);
}

/// A selected file together with its preview reference
#[derive(Debug, Clone)]
pub struct PreviewEntry<F> {
    /// Stable key for keyed list rendering
    pub key: Uuid,
    pub file: F,
    pub preview: String,
}

/// Ordered set of selected images.
///
/// Files and previews are stored as pairs, so both sequences always have
/// the same length. Every reference is released exactly once: on `remove`,
/// on `clear`, or when the set is dropped.
pub struct ImageSet<F, S: PreviewSource<F>> {
    source: S,
    entries: Vec<PreviewEntry<F>>,
}

impl<F, S: PreviewSource<F>> ImageSet<F, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the picker should be disabled.
    ///
    /// Only checked before a selection: a single multi-select can still
    /// push the set past the limit.
    pub fn selection_locked(&self) -> bool {
        self.entries.len() >= MAX_IMAGES
    }

    pub fn entries(&self) -> &[PreviewEntry<F>] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &F> {
        self.entries.iter().map(|e| &e.file)
    }

    pub fn previews(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.preview.as_str())
    }

    /// Append files in order, one preview per file.
    ///
    /// A file whose preview cannot be created is skipped. Returns the
    /// number of files added.
    pub fn add<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let mut added = 0;
        for file in files {
            match self.source.acquire(&file) {
                Ok(preview) => {
                    self.entries.push(PreviewEntry {
                        key: Uuid::new_v4(),
                        file,
                        preview,
                    });
                    added += 1;
                }
                Err(e) => log::error!("Skipping image without preview: {}", e),
            }
        }
        added
    }

    /// Remove the image at `index` and release its preview.
    ///
    /// Out-of-range indices leave the set untouched and return `false`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(index);
        self.source.release(&entry.preview);
        true
    }

    /// Release every preview and empty the set
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.source.release(&entry.preview);
        }
    }
}

impl<F, S: PreviewSource<F>> Drop for ImageSet<F, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        issued: usize,
        released: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct RecordingSource {
        ledger: Rc<RefCell<Ledger>>,
    }

    impl PreviewSource<&'static str> for RecordingSource {
        fn acquire(&self, file: &&'static str) -> Result<String, String> {
            if file.ends_with(".txt") {
                return Err(format!("{} is not an image", file));
            }
            let mut ledger = self.ledger.borrow_mut();
            ledger.issued += 1;
            Ok(format!("blob:{}-{}", ledger.issued, file))
        }

        fn release(&self, reference: &str) {
            self.ledger.borrow_mut().released.push(reference.to_string());
        }
    }

    fn new_set() -> (ImageSet<&'static str, RecordingSource>, Rc<RefCell<Ledger>>) {
        let source = RecordingSource::default();
        let ledger = source.ledger.clone();
        (ImageSet::new(source), ledger)
    }

    fn previews(set: &ImageSet<&'static str, RecordingSource>) -> Vec<String> {
        set.previews().map(str::to_string).collect()
    }

    #[test]
    fn test_add_keeps_files_and_previews_paired() {
        let (mut set, _) = new_set();
        let batches: [&[&'static str]; 4] = [
            &["a.png"],
            &[],
            &["b.jpg", "c.jpg", "b.jpg"],
            &["d.png", "e.png", "f.png"],
        ];
        for batch in batches {
            set.add(batch.iter().copied());
            assert_eq!(set.files().count(), set.previews().count());
        }
        assert_eq!(set.len(), 7);
        assert_eq!(
            set.files().copied().collect::<Vec<_>>(),
            vec!["a.png", "b.jpg", "c.jpg", "b.jpg", "d.png", "e.png", "f.png"]
        );
    }

    #[test]
    fn test_add_skips_files_without_preview() {
        let (mut set, _) = new_set();
        let added = set.add(["a.png", "notes.txt", "b.png"]);
        assert_eq!(added, 2);
        assert_eq!(set.files().copied().collect::<Vec<_>>(), vec!["a.png", "b.png"]);
        assert_eq!(set.previews().count(), 2);
    }

    #[test]
    fn test_remove_middle_of_three() {
        let (mut set, ledger) = new_set();
        set.add(["a.png", "b.png", "c.png"]);
        let before = previews(&set);

        assert!(set.remove(1));

        assert_eq!(previews(&set), vec![before[0].clone(), before[2].clone()]);
        assert_eq!(set.files().copied().collect::<Vec<_>>(), vec!["a.png", "c.png"]);
        assert_eq!(ledger.borrow().released, vec![before[1].clone()]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let (mut set, ledger) = new_set();
        assert!(!set.remove(0));

        set.add(["a.png", "b.png"]);
        let before = previews(&set);
        assert!(!set.remove(2));
        assert!(!set.remove(usize::MAX));

        assert_eq!(previews(&set), before);
        assert!(ledger.borrow().released.is_empty());
    }

    #[test]
    fn test_selection_locked_only_at_limit() {
        let (mut set, _) = new_set();
        set.add(["1.png", "2.png", "3.png", "4.png"]);
        assert!(!set.selection_locked());

        // one multi-select can overshoot the limit
        set.add(["5.png", "6.png"]);
        assert_eq!(set.len(), 6);
        assert!(set.selection_locked());

        set.remove(0);
        set.remove(0);
        assert!(!set.selection_locked());
    }

    #[test]
    fn test_each_reference_released_once() {
        let (mut set, ledger) = new_set();
        set.add(["a.png", "b.png", "c.png"]);
        let all = previews(&set);

        set.remove(0);
        set.clear();
        assert!(set.is_empty());
        drop(set);

        let mut released = ledger.borrow().released.clone();
        released.sort();
        let mut expected = all;
        expected.sort();
        assert_eq!(released, expected);
    }

    #[test]
    fn test_drop_releases_remaining() {
        let (mut set, ledger) = new_set();
        set.add(["a.png", "b.png"]);
        drop(set);
        assert_eq!(ledger.borrow().released.len(), 2);
    }
}
