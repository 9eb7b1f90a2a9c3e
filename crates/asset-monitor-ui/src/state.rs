//! Application State
//!
//! - **DomainState**: the asset fetcher (data, loading, error)
//! - **UiState**: tree view state plus per-frame layout
//! - **AppEvent**: what the user did, applied once per frame

use asset_monitor::{AssetFetcher, TreeViewState, ViewEvent};

/// Below this width only one of tree/details is shown at a time.
pub const NARROW_BREAKPOINT: f32 = 1024.0;

/// Fixed width of the tree column in the split layout.
pub const TREE_PANEL_WIDTH: f32 = 384.0;

pub struct DomainState {
    pub fetcher: AssetFetcher,
}

#[derive(Default)]
pub struct UiState {
    pub tree: TreeViewState,
}

/// User intent collected from the panels.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    View(ViewEvent),
    Refresh,
}

impl From<ViewEvent> for AppEvent {
    fn from(event: ViewEvent) -> Self {
        AppEvent::View(event)
    }
}

/// Which panes are drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Tree on the left, details or landing on the right
    Split,
    /// Narrow screen: tree with the landing panel below it
    NarrowStacked,
    /// Narrow screen: tree only
    NarrowTree,
    /// Narrow screen: details only
    NarrowDetails,
}

impl LayoutMode {
    pub fn for_width(width: f32, state: &TreeViewState) -> Self {
        if width >= NARROW_BREAKPOINT {
            return LayoutMode::Split;
        }
        match (&state.selected, state.show_mobile_details) {
            (None, _) => LayoutMode::NarrowStacked,
            (Some(_), true) => LayoutMode::NarrowDetails,
            (Some(_), false) => LayoutMode::NarrowTree,
        }
    }

    pub fn shows_tree(self) -> bool {
        !matches!(self, LayoutMode::NarrowDetails)
    }

    /// Details or landing panel.
    pub fn shows_content(self) -> bool {
        !matches!(self, LayoutMode::NarrowTree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_monitor::Asset;
    use pretty_assertions::assert_eq;

    fn selected(show_mobile_details: bool) -> TreeViewState {
        TreeViewState {
            selected: Some(Asset::new(1, "Asset 1", "A")),
            show_mobile_details,
            ..TreeViewState::default()
        }
    }

    #[test]
    fn wide_screens_always_split() {
        assert_eq!(
            LayoutMode::for_width(1280.0, &TreeViewState::default()),
            LayoutMode::Split
        );
        assert_eq!(LayoutMode::for_width(1024.0, &selected(true)), LayoutMode::Split);
    }

    #[test]
    fn narrow_screens_follow_mobile_details_flag() {
        let none = LayoutMode::for_width(800.0, &TreeViewState::default());
        assert_eq!(none, LayoutMode::NarrowStacked);
        assert!(none.shows_tree() && none.shows_content());

        let details = LayoutMode::for_width(800.0, &selected(true));
        assert_eq!(details, LayoutMode::NarrowDetails);
        assert!(!details.shows_tree());

        let tree = LayoutMode::for_width(800.0, &selected(false));
        assert_eq!(tree, LayoutMode::NarrowTree);
        assert!(!tree.shows_content());
    }

    #[test]
    fn selecting_on_narrow_screen_switches_to_details() {
        let asset = Asset::new(1, "Asset 1", "A");
        let mut state = TreeViewState::default();
        state.apply(ViewEvent::Select(asset.clone()), std::slice::from_ref(&asset));
        assert_eq!(LayoutMode::for_width(600.0, &state), LayoutMode::NarrowDetails);

        state.apply(ViewEvent::CloseDetails, std::slice::from_ref(&asset));
        assert_eq!(LayoutMode::for_width(600.0, &state), LayoutMode::NarrowStacked);
    }
}
