pub mod catalog;
pub use catalog::{CatalogSettings, PartCatalog, RandomCatalog};

pub mod history_service;
pub use history_service::{HistoryError, SearchHistoryService};

pub mod history_service_impl;
pub use history_service_impl::SeaOrmSearchHistoryService;

pub mod history_recorder;
pub use history_recorder::HistoryRecorder;
