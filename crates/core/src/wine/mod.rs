//! The wine record: one catalog item as served by the catalog service.
//!
//! Upstream data is scraped and heterogeneous, so everything except
//! `id`, `name` and `price` is optional.

mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id": 1, "name": "Malbec", "price": 12.5}"#;
        let wine: Wine = serde_json::from_str(json).unwrap();

        assert_eq!(wine.id, 1);
        assert_eq!(wine.name, "Malbec");
        assert_eq!(wine.price, 12.5);
        assert!(wine.wine_type.is_none());
        assert!(wine.varietal.is_none());
        assert!(wine.vintage.is_none());
        assert!(wine.image_url.is_none());
    }

    #[test]
    fn test_deserialize_wide_record_with_nulls() {
        let json = r#"{
            "id": 7,
            "name": "Chablis Premier Cru",
            "type": "White",
            "varietal": null,
            "price": 18,
            "vintage": "2019",
            "region": "Burgundy",
            "country": null,
            "producer": "Domaine Example",
            "sub_region": "Chablis",
            "food_pairing": "Oysters",
            "drinking_window": "2022-2030",
            "body_type": "Light",
            "product_url": "https://shop.example/chablis",
            "size": "750ml",
            "source": "martel"
        }"#;
        let wine: Wine = serde_json::from_str(json).unwrap();

        assert_eq!(wine.wine_type(), Some("White"));
        assert_eq!(wine.varietal(), None);
        assert_eq!(wine.price, 18.0);
        assert_eq!(wine.vintage, Some(Vintage::Label("2019".to_string())));
        assert_eq!(wine.region(), Some("Burgundy"));
        assert_eq!(wine.country(), None);
        assert_eq!(wine.producer.as_deref(), Some("Domaine Example"));
        assert_eq!(wine.size.as_deref(), Some("750ml"));
    }

    #[test]
    fn test_numeric_vintage() {
        let json = r#"{"id": 2, "name": "Rioja", "price": 20.0, "vintage": 2015}"#;
        let wine: Wine = serde_json::from_str(json).unwrap();
        assert_eq!(wine.vintage, Some(Vintage::Year(2015)));
        assert_eq!(wine.vintage_label().as_deref(), Some("2015"));
    }

    #[test]
    fn test_float_vintage_is_a_year() {
        let json = r#"[{"id": 5, "name": "Priorat", "price": 30.0, "vintage": 2015.0},
            {"id": 6, "name": "Bierzo", "price": 14.0, "vintage": 2018}]"#;
        let wines: Vec<Wine> = serde_json::from_str(json).unwrap();
        assert_eq!(wines[0].vintage, Some(Vintage::Year(2015)));
        assert_eq!(wines[0].vintage_label().as_deref(), Some("2015"));
        assert_eq!(wines[1].vintage, Some(Vintage::Year(2018)));
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let json = r#"{"id": 3, "name": "Mystery", "price": 9.99,
            "type": "  ", "image_url": "", "vintage": "", "description": " "}"#;
        let wine: Wine = serde_json::from_str(json).unwrap();

        assert_eq!(wine.wine_type(), None);
        assert_eq!(wine.image_url(), None);
        assert_eq!(wine.vintage_label(), None);
        assert_eq!(wine.description(), None);
    }

    #[test]
    fn test_zero_vintage_is_absent() {
        let json = r#"{"id": 4, "name": "NV Blend", "price": 7.0, "vintage": 0}"#;
        let wine: Wine = serde_json::from_str(json).unwrap();
        assert_eq!(wine.vintage_label(), None);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let json = r#"{"id": 5, "price": 10.0}"#;
        assert!(serde_json::from_str::<Wine>(json).is_err());
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let wine = Wine::new(1, "Malbec", 12.5).with_type("Red");
        let value = serde_json::to_value(&wine).unwrap();
        assert_eq!(value["type"], "Red");
        assert!(value.get("varietal").is_none());
    }
}
