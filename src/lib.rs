//! Asset Monitor core
//!
//! Everything between the JSON wire format and the pixels:
//!
//! - [`normalize`]: classifies the heterogeneous `/api/assets` payloads
//! - [`source`]: where payloads come from (HTTP endpoint or in-memory constant)
//! - [`fetch`]: loading/error/data state with request sequencing
//! - [`tree`]: recursive filter, count and collection passes over the forest
//! - [`view`]: expansion/selection state machine and row flattening
//! - [`details`]: view model for the selected asset
//!
//! The crate builds for both native targets and `wasm32`.

pub mod details;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod sample;
pub mod source;
pub mod tree;
pub mod view;

pub use asset_monitor_types::{Asset, AssetAttribute, AssetId, AssetsResponse, AttributeValue};
pub use details::AssetDetails;
pub use error::FetchError;
pub use fetch::{AssetFetcher, CompletionInbox, FetchState, RequestTicket};
pub use normalize::normalize_payload;
pub use source::{fetch_assets, AssetSource, HttpAssetSource, StaticAssetSource};
pub use tree::AssetFilter;
pub use view::{DashboardView, ForestSummary, TreeRow, TreeViewState, ViewEvent};
