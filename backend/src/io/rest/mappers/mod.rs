pub mod item_mapper;
