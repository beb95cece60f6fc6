use std::sync::Arc;

use itertools::Itertools;
use log::info;
use rayon::prelude::*;

pub use json::JsonFile;
pub use lines::Lines;

use crate::{Item, Result};

mod json;
mod lines;

pub trait Provider: Send + Sync {
    fn title(&self) -> String {
        "Unknown".into()
    }

    /// Loads all items that this provider can provide.
    fn load(&self) -> Result<Vec<Item>>;
}

/// Loads the items of all providers in parallel and concatenates them in provider order.
pub fn load_items(providers: &[Arc<dyn Provider>]) -> Result<Vec<Item>> {
    let loaded: Vec<_> = providers.par_iter()
        .map(|prov| -> Result<Vec<Item>> {
            let items = prov.load()?;
            info!("loaded {} items from {}", items.len(), prov.title());
            Ok(items)
        })
        .collect();

    loaded.into_iter()
        .flatten_ok()
        .try_collect()
}
