use flash_core::model::{Collection, CollectionId};

/// Tags offered by the browser's filter select.
pub const TAG_OPTIONS: [&str; 3] = ["Hiragana", "Chữ Hán", "Khác"];

/// UI-ready summary of a collection for the browser grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionCardVm {
    pub id: CollectionId,
    pub name: String,
    pub tag_label: Option<String>,
    pub count_label: String,
}

#[must_use]
pub fn map_collection_card(collection: &Collection) -> CollectionCardVm {
    CollectionCardVm {
        id: collection.id().clone(),
        name: collection.name().to_string(),
        tag_label: collection.first_tag().map(str::to_string),
        count_label: format!("{} thẻ", collection.card_count()),
    }
}

/// Search text plus optional tag, combined with AND.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserFilter {
    pub query: String,
    pub tag: Option<String>,
}

impl BrowserFilter {
    /// Map a select value to a tag filter; the empty value clears it.
    #[must_use]
    pub fn tag_from_select(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_string())
    }

    #[must_use]
    pub fn matches(&self, collection: &Collection) -> bool {
        let tag_ok = self
            .tag
            .as_deref()
            .is_none_or(|tag| collection.has_tag(tag));
        tag_ok && collection.name_matches(&self.query)
    }
}

#[must_use]
pub fn visible_collections(collections: &[Collection], filter: &BrowserFilter) -> Vec<CollectionCardVm> {
    collections
        .iter()
        .filter(|collection| filter.matches(collection))
        .map(map_collection_card)
        .collect()
}

/// A collection removed optimistically, with where it used to sit.
#[derive(Clone, Debug, PartialEq)]
pub struct Removed {
    index: usize,
    collection: Collection,
}

/// Take a collection out of the local list before the delete is confirmed.
pub fn remove_local(collections: &mut Vec<Collection>, id: &CollectionId) -> Option<Removed> {
    let index = collections.iter().position(|c| c.id() == id)?;
    let collection = collections.remove(index);
    Some(Removed { index, collection })
}

/// Put an optimistically removed collection back where it was.
pub fn restore_local(collections: &mut Vec<Collection>, removed: Removed) {
    let index = removed.index.min(collections.len());
    collections.insert(index, removed.collection);
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::Card;

    fn collection(id: &str, name: &str, tags: &[&str], cards: usize) -> Collection {
        Collection::new(
            CollectionId::new(id),
            name,
            tags.iter().map(|t| (*t).to_string()).collect(),
            (0..cards).map(|i| Card::new(format!("f{i}"), format!("b{i}"))).collect(),
        )
    }

    fn sample() -> Vec<Collection> {
        vec![
            collection("1", "Hiragana cơ bản", &["Hiragana"], 46),
            collection("2", "Kanji N5", &["Chữ Hán", "Khác"], 80),
            collection("3", "Động vật", &[], 0),
        ]
    }

    #[test]
    fn card_shows_first_tag_and_count() {
        let vm = map_collection_card(&sample()[1]);
        assert_eq!(vm.tag_label.as_deref(), Some("Chữ Hán"));
        assert_eq!(vm.count_label, "80 thẻ");

        let untagged = map_collection_card(&sample()[2]);
        assert_eq!(untagged.tag_label, None);
        assert_eq!(untagged.count_label, "0 thẻ");
    }

    #[test]
    fn search_and_tag_combine() {
        let all = sample();
        let by_name = BrowserFilter {
            query: "KANJI".into(),
            tag: None,
        };
        assert_eq!(visible_collections(&all, &by_name).len(), 1);

        let by_tag = BrowserFilter {
            query: String::new(),
            tag: Some("Khác".into()),
        };
        let names: Vec<_> = visible_collections(&all, &by_tag)
            .into_iter()
            .map(|vm| vm.name)
            .collect();
        assert_eq!(names, vec!["Kanji N5".to_string()]);

        let both = BrowserFilter {
            query: "hira".into(),
            tag: Some("Khác".into()),
        };
        assert!(visible_collections(&all, &both).is_empty());
    }

    #[test]
    fn empty_select_value_clears_tag() {
        assert_eq!(BrowserFilter::tag_from_select(""), None);
        assert_eq!(
            BrowserFilter::tag_from_select("Khác"),
            Some("Khác".to_string())
        );
    }

    #[test]
    fn removed_collection_is_restored_in_place() {
        let mut list = sample();
        let removed = remove_local(&mut list, &CollectionId::new("2")).unwrap();
        assert_eq!(list.len(), 2);
        restore_local(&mut list, removed);
        let ids: Vec<_> = list.iter().map(|c| c.id().as_str().to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let mut list = sample();
        assert!(remove_local(&mut list, &CollectionId::new("x")).is_none());
        assert_eq!(list.len(), 3);
    }
}
