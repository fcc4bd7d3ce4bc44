pub mod enum_entries;

pub use enum_entries::EnumEntryFormatter;
