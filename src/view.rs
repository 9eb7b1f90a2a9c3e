//! Tree view state
//!
//! Expansion, selection and filter inputs live in one explicit struct that
//! the render loop updates only through [`TreeViewState::apply`]. Everything
//! drawn on screen is derived from it plus the current forest.

use std::collections::HashSet;

use asset_monitor_types::{Asset, AssetId};

use crate::tree::{collect_types, count_assets, expandable_ids, filter_forest, AssetFilter};

/// Left indentation per nesting level, in pixels.
pub const INDENT_UNIT: f32 = 16.0;

/// Left padding of a root row, in pixels.
pub const INDENT_BASE: f32 = 8.0;

// =============================================================================
// STATE
// =============================================================================

/// UI state owned by the top-level view. Reset on mount, never persisted.
#[derive(Debug, Clone, Default)]
pub struct TreeViewState {
    /// Snapshot of the asset the user clicked (taken from the filtered tree)
    pub selected: Option<Asset>,
    /// Ids of expanded nodes
    pub expanded: HashSet<AssetId>,
    /// Exact type constraint, empty for all types
    pub type_filter: String,
    /// Name search box contents
    pub name_query: String,
    /// Filter controls are visible
    pub show_filter: bool,
    /// Narrow layouts show the details panel instead of the tree
    pub show_mobile_details: bool,
}

/// What the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ToggleNode(AssetId),
    /// Expand every node with children in the *filtered* forest
    ExpandAll,
    CollapseAll,
    Select(Asset),
    CloseDetails,
    SetTypeFilter(String),
    ClearTypeFilter,
    SetNameQuery(String),
    ToggleFilterPanel,
}

impl TreeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> AssetFilter {
        AssetFilter::new(self.type_filter.clone(), self.name_query.clone())
    }

    pub fn is_expanded(&self, id: AssetId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn is_selected(&self, id: AssetId) -> bool {
        self.selected.as_ref().is_some_and(|asset| asset.id == id)
    }

    /// Single update entry point. `assets` is the unfiltered forest.
    pub fn apply(&mut self, event: ViewEvent, assets: &[Asset]) {
        match event {
            ViewEvent::ToggleNode(id) => {
                if !self.expanded.remove(&id) {
                    self.expanded.insert(id);
                }
            }
            ViewEvent::ExpandAll => {
                let filtered = filter_forest(assets, &self.filter());
                self.expanded = expandable_ids(&filtered);
            }
            ViewEvent::CollapseAll => self.expanded.clear(),
            ViewEvent::Select(asset) => {
                self.selected = Some(asset);
                self.show_mobile_details = true;
            }
            ViewEvent::CloseDetails => {
                self.selected = None;
                self.show_mobile_details = false;
            }
            ViewEvent::SetTypeFilter(type_filter) => self.type_filter = type_filter,
            ViewEvent::ClearTypeFilter => self.type_filter.clear(),
            ViewEvent::SetNameQuery(query) => self.name_query = query,
            ViewEvent::ToggleFilterPanel => self.show_filter = !self.show_filter,
        }
    }
}

// =============================================================================
// ROWS
// =============================================================================

/// One visible line of the tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeRow<'a> {
    pub asset: &'a Asset,
    pub depth: usize,
    /// Draws a toggle when true, a fixed-width spacer otherwise
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
}

impl TreeRow<'_> {
    pub fn indent(&self) -> f32 {
        self.depth as f32 * INDENT_UNIT + INDENT_BASE
    }
}

/// Flatten the forest depth-first, descending only into expanded nodes.
pub fn visible_rows<'a>(forest: &'a [Asset], state: &TreeViewState) -> Vec<TreeRow<'a>> {
    fn walk<'a>(
        assets: &'a [Asset],
        depth: usize,
        state: &TreeViewState,
        rows: &mut Vec<TreeRow<'a>>,
    ) {
        for asset in assets {
            let has_children = asset.has_children();
            let expanded = state.is_expanded(asset.id);
            rows.push(TreeRow {
                asset,
                depth,
                has_children,
                expanded,
                selected: state.is_selected(asset.id),
            });
            if has_children && expanded {
                walk(&asset.children, depth + 1, state, rows);
            }
        }
    }

    let mut rows = Vec::new();
    walk(forest, 0, state, &mut rows);
    rows
}

// =============================================================================
// DERIVED VIEW
// =============================================================================

/// Header counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestSummary {
    pub total: usize,
    pub displayed: usize,
    pub type_count: usize,
    /// A type filter is set ("Filtered" badge)
    pub type_filtered: bool,
}

impl ForestSummary {
    pub fn label(&self) -> String {
        format!("{} of {} assets", self.displayed, self.total)
    }
}

/// Everything the dashboard derives from `(assets, state)` for one frame.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub filtered: Vec<Asset>,
    /// Distinct types of the unfiltered forest, sorted
    pub types: Vec<String>,
    pub summary: ForestSummary,
}

impl DashboardView {
    pub fn derive(assets: &[Asset], state: &TreeViewState) -> Self {
        let filtered = filter_forest(assets, &state.filter());
        let types = collect_types(assets);
        let summary = ForestSummary {
            total: count_assets(assets),
            displayed: count_assets(&filtered),
            type_count: types.len(),
            type_filtered: !state.type_filter.is_empty(),
        };
        Self {
            filtered,
            types,
            summary,
        }
    }

    pub fn rows<'a>(&'a self, state: &TreeViewState) -> Vec<TreeRow<'a>> {
        visible_rows(&self.filtered, state)
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}
