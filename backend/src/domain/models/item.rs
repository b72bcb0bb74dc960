//! backend/src/domain/models/item.rs

/// Domain representation of a tracked item.
///
/// Instances are only ever produced by an `ItemStorage` implementation, which
/// owns id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// The mutable fields of an item, used for both create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: Option<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            description,
            completed,
        }
    }

    /// Build the stored item for a freshly assigned id
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            completed: self.completed,
        }
    }
}

impl Item {
    /// Replace every mutable field with the draft's values, keeping the id.
    pub fn replace_with(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.completed = draft.completed;
    }
}
