//! backend/src/io/rest/mappers/item_mapper.rs

use crate::domain::commands::items::{CreateItemCommand, UpdateItemCommand};
use crate::domain::models::item::Item as DomainItem;
use shared::{Item as SharedItem, ItemCreate};

/// Mapper to convert between shared Item DTOs and domain models.
pub struct ItemMapper;

impl ItemMapper {
    /// Converts a domain Item model to a shared Item DTO.
    pub fn to_dto(domain: DomainItem) -> SharedItem {
        SharedItem {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            completed: domain.completed,
        }
    }

    pub fn to_dto_list(domain_items: Vec<DomainItem>) -> Vec<SharedItem> {
        domain_items.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(body: ItemCreate) -> CreateItemCommand {
        CreateItemCommand {
            name: body.name,
            description: body.description,
            completed: body.completed,
        }
    }

    pub fn to_update_command(item_id: i64, body: ItemCreate) -> UpdateItemCommand {
        UpdateItemCommand {
            item_id,
            name: body.name,
            description: body.description,
            completed: body.completed,
        }
    }
}
