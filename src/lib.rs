//! Z-quad codec: WGS84 coordinates, 53-bit quadtree integers, and
//! pronounceable names.
//!
//! ```rust
//! use zquad::ZQuad;
//!
//! let quad = ZQuad::from_wgs84(55.6761, 12.5683)?.to_zoom(14)?;
//! let name = quad.name();
//! assert_eq!(name.split('-').count(), 2);
//! assert_eq!(ZQuad::from_name(&name), Some(quad));
//!
//! let parent = quad.parent().expect("zoom 14 has a parent");
//! assert!(parent.is_ancestor_of(&quad));
//! # Ok::<(), zquad::ZQuadError>(())
//! ```

pub mod bias;
pub mod bits;
pub mod compute;
pub mod config;
pub mod coords;
pub mod error;
pub mod index;
pub mod name;
pub mod quad;
pub mod spatial;

pub use bias::{MAX_ZOOM, VALUE_LIMIT, bias};
pub use config::Config;
pub use error::{Result, ZQuadError};
pub use index::{IndexStats, QuadIndex};
pub use quad::ZQuad;

pub use geo::{Point, Rect};
pub use zquad_types::point::UnitPoint;
pub use zquad_types::rect::UnitRect;

pub use spatial::{DistanceMetric, distance_between, knn};

#[cfg(feature = "geojson")]
pub use compute::geojson::{quad_to_feature, quad_to_geojson, quads_to_feature_collection};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Result, ZQuad, ZQuadError};

    pub use geo::{Point, Rect};

    pub use crate::spatial::{DistanceMetric, distance_between};

    pub use crate::{Config, QuadIndex};

    pub use crate::{UnitPoint, UnitRect};

    #[cfg(feature = "geojson")]
    pub use crate::compute::geojson::{quad_to_geojson, quads_to_feature_collection};
}
