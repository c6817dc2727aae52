use crate::category::Category;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One entry in a category bucket
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct IndexEntry {
    pub url: String,
    pub path: String,
}

/// Pages of one category, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket {
    pub category: Category,
    pub entries: Vec<IndexEntry>,
}

/// Pages grouped by category
///
/// Buckets appear in the order their category was first seen and entries in
/// the order pages were recorded. Serializes as a JSON object keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedIndex {
    buckets: Vec<CategoryBucket>,
}

impl CategorizedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, creating the category's bucket on first use
    pub fn append(&mut self, category: Category, entry: IndexEntry) {
        match self.buckets.iter_mut().find(|b| b.category == category) {
            Some(bucket) => bucket.entries.push(entry),
            None => self.buckets.push(CategoryBucket {
                category,
                entries: vec![entry],
            }),
        }
    }

    /// Entries for one category (empty if none were recorded)
    pub fn get(&self, category: Category) -> &[IndexEntry] {
        self.buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Buckets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryBucket> {
        self.buckets.iter()
    }

    /// Buckets ordered by label, each with its entries ordered by path
    ///
    /// This is the order the text and Markdown reports use.
    pub fn sorted_by_label(&self) -> Vec<(Category, Vec<&IndexEntry>)> {
        let mut buckets: Vec<_> = self
            .buckets
            .iter()
            .map(|bucket| {
                let mut entries: Vec<&IndexEntry> = bucket.entries.iter().collect();
                entries.sort_by(|a, b| a.path.cmp(&b.path));
                (bucket.category, entries)
            })
            .collect();
        buckets.sort_by(|a, b| a.0.label().cmp(b.0.label()));
        buckets
    }

    /// Number of non-empty categories
    pub fn category_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Serialize for CategorizedIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(bucket.category.label(), &bucket.entries)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> IndexEntry {
        IndexEntry {
            url: format!("https://lme.jp{}", path),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_append_creates_bucket() {
        let mut index = CategorizedIndex::new();
        assert!(index.is_empty());

        index.append(Category::Tutorial, entry("/manual/tutorial/a"));
        index.append(Category::Tutorial, entry("/manual/tutorial/b"));

        assert_eq!(index.category_count(), 1);
        assert_eq!(index.get(Category::Tutorial).len(), 2);
        assert!(index.get(Category::Contact).is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let mut index = CategorizedIndex::new();
        index.append(Category::Article, entry("/manual/x/y"));
        index.append(Category::TopPage, entry("/manual/"));
        index.append(Category::Article, entry("/manual/x/z"));

        let order: Vec<_> = index.iter().map(|b| b.category).collect();
        assert_eq!(order, vec![Category::Article, Category::TopPage]);
        assert_eq!(index.entry_count(), 3);
    }

    #[test]
    fn test_sorted_by_label_and_path() {
        let mut index = CategorizedIndex::new();
        index.append(Category::Article, entry("/manual/z/z"));
        index.append(Category::Article, entry("/manual/a/a"));
        index.append(Category::Tutorial, entry("/manual/tutorial/1"));

        let sorted = index.sorted_by_label();
        // "チュートリアル" (U+30C1) sorts before "記事・マニュアル" (U+8A18)
        assert_eq!(sorted[0].0, Category::Tutorial);
        assert_eq!(sorted[1].0, Category::Article);
        assert_eq!(sorted[1].1[0].path, "/manual/a/a");
        assert_eq!(sorted[1].1[1].path, "/manual/z/z");
    }

    #[test]
    fn test_serializes_as_label_map() {
        let mut index = CategorizedIndex::new();
        index.append(Category::TopPage, entry("/manual/"));

        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "トップページ": [{"url": "https://lme.jp/manual/", "path": "/manual/"}]
            })
        );
    }
}
