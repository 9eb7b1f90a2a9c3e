//! Details panel view model

use asset_monitor_types::{Asset, AssetId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDetails {
    pub id: AssetId,
    pub name: String,
    pub asset_type: String,
    pub description: Option<String>,
    /// `(key, rendered value)` in display order
    pub attributes: Vec<(String, String)>,
    pub child_count: usize,
}

impl AssetDetails {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            description: asset.description.clone().filter(|d| !d.is_empty()),
            attributes: asset
                .attributes
                .iter()
                .map(|attr| (attr.key.clone(), attr.value.to_string()))
                .collect(),
            child_count: asset.child_count(),
        }
    }

    pub fn type_badge(&self) -> String {
        format!("Type {}", self.asset_type)
    }

    pub fn attributes_heading(&self) -> String {
        format!("Attributes ({})", self.attributes.len())
    }

    /// `None` for leaves.
    pub fn children_label(&self) -> Option<String> {
        match self.child_count {
            0 => None,
            1 => Some("This asset has 1 direct child".to_string()),
            n => Some(format!("This asset has {} direct children", n)),
        }
    }

    /// False when there is nothing beyond id, name and type to show.
    pub fn has_additional_details(&self) -> bool {
        self.description.is_some() || !self.attributes.is_empty() || self.child_count > 0
    }
}
