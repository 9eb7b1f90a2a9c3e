//! Tree Filter/Count Engine
//!
//! Pure recursive passes over an asset forest. `children` is already a
//! canonical `Vec` (see `asset_monitor_types`), so every pass treats a
//! single child and a one-element list identically.

use std::collections::{BTreeSet, HashSet};

use asset_monitor_types::{Asset, AssetId};

// =============================================================================
// FILTER
// =============================================================================

/// Type and name constraints applied to the forest.
///
/// An empty `type_filter` or a blank `name_query` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetFilter {
    /// Exact match against `Asset::asset_type`
    pub type_filter: String,
    /// Case-insensitive substring match against `Asset::name`
    pub name_query: String,
}

impl AssetFilter {
    pub fn new(type_filter: impl Into<String>, name_query: impl Into<String>) -> Self {
        Self {
            type_filter: type_filter.into(),
            name_query: name_query.into(),
        }
    }

    pub fn by_type(type_filter: impl Into<String>) -> Self {
        Self::new(type_filter, "")
    }

    pub fn by_name(name_query: impl Into<String>) -> Self {
        Self::new("", name_query)
    }

    /// Normalized query: trimmed and lowercased
    fn query(&self) -> String {
        self.name_query.trim().to_lowercase()
    }

    pub fn is_active(&self) -> bool {
        !self.type_filter.is_empty() || !self.name_query.trim().is_empty()
    }

    pub fn matches_type(&self, asset: &Asset) -> bool {
        self.type_filter.is_empty() || asset.asset_type == self.type_filter
    }

    pub fn matches_name(&self, asset: &Asset) -> bool {
        let query = self.query();
        query.is_empty() || asset.name.to_lowercase().contains(&query)
    }

    /// Whether the asset satisfies both constraints by itself
    pub fn matches(&self, asset: &Asset) -> bool {
        self.matches_type(asset) && self.matches_name(asset)
    }
}

/// Prune the forest down to matching nodes and their ancestors.
///
/// A node survives when it matches by itself or when any descendant does.
/// Survivors keep only their surviving children. An inactive filter returns
/// the forest unchanged.
pub fn filter_forest(assets: &[Asset], filter: &AssetFilter) -> Vec<Asset> {
    if !filter.is_active() {
        return assets.to_vec();
    }
    let query = filter.query();
    filter_nodes(assets, &filter.type_filter, &query).unwrap_or_default()
}

/// `None` when the whole sequence was pruned away.
fn filter_nodes(assets: &[Asset], type_filter: &str, query: &str) -> Option<Vec<Asset>> {
    let mut retained = Vec::new();

    for asset in assets {
        let children = if asset.has_children() {
            filter_nodes(&asset.children, type_filter, query)
        } else {
            None
        };

        let matches_type = type_filter.is_empty() || asset.asset_type == type_filter;
        let matches_name = query.is_empty() || asset.name.to_lowercase().contains(query);
        let include_self = matches_type && matches_name;
        let include_child = children.is_some();

        if include_self || include_child {
            retained.push(Asset {
                children: children.unwrap_or_default(),
                ..asset.clone()
            });
        }
    }

    if retained.is_empty() {
        None
    } else {
        Some(retained)
    }
}

// =============================================================================
// COUNTS AND COLLECTIONS
// =============================================================================

/// Number of nodes in the sequence plus all of their descendants.
pub fn count_assets(assets: &[Asset]) -> usize {
    assets.len()
        + assets
            .iter()
            .map(|asset| count_assets(&asset.children))
            .sum::<usize>()
}

/// Distinct `type` values across the whole forest, sorted ascending.
pub fn collect_types(assets: &[Asset]) -> Vec<String> {
    fn walk(assets: &[Asset], types: &mut BTreeSet<String>) {
        for asset in assets {
            types.insert(asset.asset_type.clone());
            walk(&asset.children, types);
        }
    }

    let mut types = BTreeSet::new();
    walk(assets, &mut types);
    types.into_iter().collect()
}

/// Ids of every node that has at least one child.
pub fn expandable_ids(assets: &[Asset]) -> HashSet<AssetId> {
    fn walk(assets: &[Asset], ids: &mut HashSet<AssetId>) {
        for asset in assets {
            if asset.has_children() {
                ids.insert(asset.id);
                walk(&asset.children, ids);
            }
        }
    }

    let mut ids = HashSet::new();
    walk(assets, &mut ids);
    ids
}

/// Number of levels in the deepest tree; 0 for an empty forest.
pub fn forest_depth(assets: &[Asset]) -> usize {
    assets
        .iter()
        .map(|asset| 1 + forest_depth(&asset.children))
        .max()
        .unwrap_or(0)
}

/// Ids that occur more than once, in first-repeat order.
///
/// Such nodes share expansion and selection state.
pub fn duplicate_ids(assets: &[Asset]) -> Vec<AssetId> {
    fn walk(
        assets: &[Asset],
        seen: &mut HashSet<AssetId>,
        reported: &mut HashSet<AssetId>,
        out: &mut Vec<AssetId>,
    ) {
        for asset in assets {
            if !seen.insert(asset.id) && reported.insert(asset.id) {
                out.push(asset.id);
            }
            walk(&asset.children, seen, reported, out);
        }
    }

    let mut out = Vec::new();
    walk(assets, &mut HashSet::new(), &mut HashSet::new(), &mut out);
    out
}

/// Depth-first search for an asset by id.
#[cfg(test)]
pub(crate) fn find_asset(assets: &[Asset], id: AssetId) -> Option<&Asset> {
    for asset in assets {
        if asset.id == id {
            return Some(asset);
        }
        if let Some(found) = find_asset(&asset.children, id) {
            return Some(found);
        }
    }
    None
}
