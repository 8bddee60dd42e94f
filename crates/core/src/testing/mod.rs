//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use sentio_core::testing::{fixtures, MockCatalogSource};
//!
//! let source = MockCatalogSource::with_wines(fixtures::scenario_a());
//! source.set_next_error(FetchError::Timeout(10)).await;
//! ```

mod mock_catalog_source;
mod mock_discuss;

pub use mock_catalog_source::MockCatalogSource;
pub use mock_discuss::RecordingDiscussHandler;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::wine::{Vintage, Wine};

    /// A record with the fields the filter cares about.
    pub fn wine(id: i64, name: &str, wine_type: Option<&str>, price: f64) -> Wine {
        let wine = Wine::new(id, name, price);
        match wine_type {
            Some(t) => wine.with_type(t),
            None => wine,
        }
    }

    /// Malbec (Red, 12.5) and Chablis (White, 18).
    pub fn scenario_a() -> Vec<Wine> {
        vec![
            wine(1, "Malbec", Some("Red"), 12.5),
            wine(2, "Chablis", Some("White"), 18.0),
        ]
    }

    /// A fully described record.
    pub fn detailed_wine(id: i64) -> Wine {
        Wine::new(id, "Château Example", 42.0)
            .with_type("Red")
            .with_varietal("Merlot")
            .with_vintage(Vintage::Year(2016))
            .with_origin("Bordeaux", "France")
            .with_description("Plum, cedar and a long finish.")
            .with_image_url("https://images.example/chateau.png")
    }

    /// A varied set with repeated, missing and differently-cased types.
    pub fn mixed_cellar() -> Vec<Wine> {
        vec![
            wine(1, "Malbec", Some("Red"), 12.5),
            wine(2, "Chablis", Some("White"), 18.0),
            wine(3, "Barolo", Some("red"), 45.0),
            wine(4, "House Blend", None, 8.0),
            wine(5, "Cava Brut", Some("Sparkling"), 11.0),
            wine(6, "Sancerre", Some("White"), 24.0),
            wine(7, "Tavel", Some("Rosé"), 16.0),
        ]
    }
}
