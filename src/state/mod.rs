mod catalog;
mod persistence;

pub use catalog::{Catalog, Dataset, ReferenceData, index_items};
pub use persistence::{
    load_catalog, load_request, save_dataset, write_day_plans_csv, write_json,
};
