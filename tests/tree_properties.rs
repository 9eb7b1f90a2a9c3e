//! Property tests for the filter/count engine and payload normalization.

use asset_monitor::tree::{count_assets, filter_forest};
use asset_monitor::{normalize_payload, Asset, AssetFilter};
use proptest::prelude::*;
use serde_json::{json, Value};

const TYPES: [&str; 5] = ["A", "B", "C", "D", "E"];

fn arb_asset() -> impl Strategy<Value = Asset> {
    let leaf = (0i64..500, "[a-zA-Z ]{0,8}", prop::sample::select(TYPES.to_vec()))
        .prop_map(|(id, name, t)| Asset::new(id, name, t));

    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            0i64..500,
            "[a-zA-Z ]{0,8}",
            prop::sample::select(TYPES.to_vec()),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(id, name, t, children)| Asset::new(id, name, t).with_children(children))
    })
}

fn arb_forest() -> impl Strategy<Value = Vec<Asset>> {
    prop::collection::vec(arb_asset(), 0..5)
}

fn arb_filter() -> impl Strategy<Value = AssetFilter> {
    (
        prop::sample::select(vec!["", "A", "B", "C", "D", "E"]),
        "[a-zA-Z ]{0,3}",
    )
        .prop_map(|(t, q)| AssetFilter::new(t, q))
}

fn count_matching(assets: &[Asset], filter: &AssetFilter) -> usize {
    assets
        .iter()
        .map(|a| usize::from(filter.matches(a)) + count_matching(&a.children, filter))
        .sum()
}

fn subtree_matches(asset: &Asset, filter: &AssetFilter) -> bool {
    filter.matches(asset) || asset.children.iter().any(|c| subtree_matches(c, filter))
}

fn every_node_justified(assets: &[Asset], filter: &AssetFilter) -> bool {
    assets
        .iter()
        .all(|a| subtree_matches(a, filter) && every_node_justified(&a.children, filter))
}

/// Rewrite every one-element `children` array as a bare object.
fn collapse_single_children(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(collapse_single_children),
        Value::Object(map) => {
            if let Some(children) = map.get_mut("children") {
                collapse_single_children(children);
                let single = match children {
                    Value::Array(items) if items.len() == 1 => items.pop(),
                    _ => None,
                };
                if let Some(only) = single {
                    *children = only;
                }
            }
        }
        _ => {}
    }
}

proptest! {
    #[test]
    fn noop_filter_preserves_count(forest in arb_forest()) {
        let filtered = filter_forest(&forest, &AssetFilter::default());
        prop_assert_eq!(count_assets(&filtered), count_assets(&forest));
        prop_assert_eq!(filtered, forest);
    }

    #[test]
    fn absent_type_yields_nothing(forest in arb_forest(), query in "[a-z]{0,2}") {
        let filtered = filter_forest(&forest, &AssetFilter::new("Z", query));
        prop_assert!(filtered.is_empty());
    }

    #[test]
    fn retained_nodes_match_or_lead_to_a_match(forest in arb_forest(), filter in arb_filter()) {
        let filtered = filter_forest(&forest, &filter);
        prop_assert!(every_node_justified(&filtered, &filter));
    }

    #[test]
    fn no_matching_node_is_lost(forest in arb_forest(), filter in arb_filter()) {
        let filtered = filter_forest(&forest, &filter);
        prop_assert_eq!(count_matching(&filtered, &filter), count_matching(&forest, &filter));
        prop_assert!(count_assets(&filtered) <= count_assets(&forest));
    }

    #[test]
    fn envelope_and_bare_array_normalize_alike(forest in arb_forest()) {
        let bare = serde_json::to_value(&forest).unwrap();
        let wrapped = json!({ "success": true, "data": bare.clone(), "message": "ok" });

        let from_bare = normalize_payload(bare).unwrap();
        prop_assert_eq!(&from_bare, &forest);
        prop_assert_eq!(normalize_payload(wrapped).unwrap(), from_bare);
    }

    #[test]
    fn single_object_children_are_equivalent(forest in arb_forest(), filter in arb_filter()) {
        let mut payload = serde_json::to_value(&forest).unwrap();
        collapse_single_children(&mut payload);
        let reparsed = normalize_payload(payload).unwrap();

        prop_assert_eq!(&reparsed, &forest);
        prop_assert_eq!(filter_forest(&reparsed, &filter), filter_forest(&forest, &filter));
    }
}
