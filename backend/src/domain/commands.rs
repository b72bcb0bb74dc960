// backend/src/domain/commands.rs

//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the `shared` DTOs to them.

pub mod items {
    use crate::domain::models::item::ItemDraft;

    /// Input for creating a new item.
    #[derive(Debug, Clone)]
    pub struct CreateItemCommand {
        pub name: String,
        pub description: Option<String>,
        pub completed: bool,
    }

    /// Input for replacing every mutable field of an existing item.
    #[derive(Debug, Clone)]
    pub struct UpdateItemCommand {
        pub item_id: i64,
        pub name: String,
        pub description: Option<String>,
        pub completed: bool,
    }

    impl From<CreateItemCommand> for ItemDraft {
        fn from(command: CreateItemCommand) -> Self {
            ItemDraft::new(command.name, command.description, command.completed)
        }
    }

    impl UpdateItemCommand {
        /// Split into the target id and the replacement fields
        pub fn into_parts(self) -> (i64, ItemDraft) {
            (
                self.item_id,
                ItemDraft::new(self.name, self.description, self.completed),
            )
        }
    }
}
