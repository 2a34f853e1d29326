use std::path::{Path, PathBuf};
use std::{fs, io};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::beverage::{Beverage, BeverageId, DrinkType};
use crate::errors::DomainError;

/// Compact seed catalog bundled with the crate, used when no catalog path is
/// configured.
const SEED_CATALOG: &str = include_str!("../data/drinks.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("catalog entry rejected: {0}")]
    InvalidEntry(#[from] DomainError),
}

/// In-memory beverage catalog. Loaded once at startup and shared read-only;
/// reload means replacing the whole snapshot, never mutating in place.
#[derive(Debug, Default)]
pub struct Catalog {
    beverages: Vec<Beverage>,
}

impl Catalog {
    pub fn new(beverages: Vec<Beverage>) -> Self {
        Self { beverages }
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let beverages: Vec<Beverage> = serde_json::from_str(raw)?;
        Ok(Self { beverages })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        let catalog = Self::parse(&raw)
            .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })?;
        for beverage in &catalog.beverages {
            beverage.validate()?;
        }
        Ok(catalog)
    }

    /// Startup loader: a configured path that fails to load degrades to an
    /// empty catalog (every request then reports no matches) instead of
    /// failing the process. No path means the bundled seed catalog.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(catalog) => {
                    tracing::info!(
                        path = %path.display(),
                        entries = catalog.len(),
                        "catalog loaded"
                    );
                    catalog
                }
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %error,
                        "catalog load failed, starting with empty catalog"
                    );
                    Self::default()
                }
            },
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> Self {
        match Self::parse(SEED_CATALOG) {
            Ok(catalog) => catalog,
            Err(error) => {
                tracing::error!(error = %error, "bundled seed catalog is malformed");
                Self::default()
            }
        }
    }

    pub fn find(&self, id: &BeverageId) -> Option<&Beverage> {
        self.beverages.iter().find(|beverage| &beverage.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Beverage> {
        self.beverages.iter()
    }

    pub fn by_type(&self, drink_type: DrinkType) -> Vec<&Beverage> {
        self.beverages.iter().filter(|beverage| beverage.drink_type == drink_type).collect()
    }

    pub fn by_state(&self, state: &str) -> Vec<&Beverage> {
        self.beverages.iter().filter(|beverage| beverage.available_states.contains(state)).collect()
    }

    pub fn by_price_range(&self, min_price: Decimal, max_price: Decimal) -> Vec<&Beverage> {
        self.beverages
            .iter()
            .filter(|beverage| beverage.price >= min_price && beverage.price <= max_price)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.beverages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beverages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal::Decimal;

    use super::Catalog;
    use crate::domain::beverage::{BeverageId, DrinkType};

    #[test]
    fn bundled_catalog_covers_every_drink_type() {
        let catalog = Catalog::bundled();
        assert!(!catalog.is_empty());
        for drink_type in DrinkType::ALL {
            assert!(
                !catalog.by_type(drink_type).is_empty(),
                "seed catalog missing {drink_type}"
            );
        }
        for beverage in catalog.iter() {
            beverage.validate().expect("seed entries satisfy invariants");
        }
    }

    #[test]
    fn finds_entries_by_id() {
        let catalog = Catalog::bundled();
        assert!(catalog.find(&BeverageId("whiskey_001".to_string())).is_some());
        assert!(catalog.find(&BeverageId("no_such_id".to_string())).is_none());
    }

    #[test]
    fn scans_by_state_and_price_range() {
        let catalog = Catalog::bundled();
        let in_goa = catalog.by_state("Goa");
        assert!(in_goa.iter().all(|beverage| beverage.available_states.contains("Goa")));

        let mid_priced = catalog.by_price_range(Decimal::from(1000), Decimal::from(2000));
        assert!(mid_priced
            .iter()
            .all(|b| b.price >= Decimal::from(1000) && b.price <= Decimal::from(2000)));
    }

    #[test]
    fn missing_file_degrades_to_empty_catalog() {
        let catalog = Catalog::load_or_empty(Some(std::path::Path::new("/no/such/catalog.json")));
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_file_degrades_to_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write");
        let catalog = Catalog::load_or_empty(Some(file.path()));
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_rejects_entries_violating_invariants() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id":"bad","name":"Bad","brand":"B","type":"beer","price":0}}]"#
        )
        .expect("write");
        assert!(Catalog::load(file.path()).is_err());
    }

    #[test]
    fn valid_file_loads_in_catalog_order() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[
                {{"id":"a","name":"A","brand":"B","type":"beer","price":150}},
                {{"id":"b","name":"B","brand":"B","type":"beer","price":200}}
            ]"#
        )
        .expect("write");

        let catalog = Catalog::load(file.path()).expect("loads");
        let ids: Vec<_> = catalog.iter().map(|beverage| beverage.id.0.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
