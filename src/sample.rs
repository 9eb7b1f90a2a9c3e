//! Bundled asset dataset
//!
//! The fixed forest served by `GET /api/assets` and by the in-memory source.

use asset_monitor_types::Asset;

pub fn sample_forest() -> Vec<Asset> {
    vec![
        Asset::new(100000, "Asset 1", "A")
            .with_description("This is a type A asset")
            .with_attribute("isMonitored", "true")
            .with_attribute("OS Version", "1.2.3")
            .with_attribute("Voltage", "855.23")
            .with_child(
                Asset::new(100004, "Asset 4", "B").with_children(vec![
                    Asset::new(100020, "Asset 20", "C").with_child(
                        Asset::new(100030, "Asset 30", "D")
                            .with_attribute("power", "40")
                            .with_attribute("material", "plastic"),
                    ),
                    Asset::new(100031, "Asset 31", "D")
                        .with_description("this is asset of type D"),
                ]),
            ),
        Asset::new(100002, "Asset 2", "A"),
        Asset::new(100003, "Asset 3", "B").with_children(vec![
            Asset::new(100050, "Asset 50", "C"),
            Asset::new(100051, "Asset 51", "C").with_attribute("isMonitored", "true"),
            // Published upstream as a bare object rather than a one-element list
            Asset::new(100052, "Asset 52", "D").with_child(Asset::new(100055, "Asset 55", "E")),
        ]),
    ]
}
