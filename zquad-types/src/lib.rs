//! # zquad-types
//!
//! Coordinate value types shared by the zquad codec.
//!
//! - **Ordinates**: `Ordinate` maps a symmetric degree interval onto `[0, 1]`
//! - **Points**: `UnitPoint`, a position inside the unit square
//! - **Rects**: `UnitRect`, an axis-aligned rectangle inside the unit square
//!
//! The unit square puts the north-west corner of the globe at the origin:
//! unit latitude grows southwards and unit longitude grows eastwards.
//!
//! ## Examples
//!
//! ```rust
//! use zquad_types::point::UnitPoint;
//! use geo::Point;
//!
//! let greenwich = UnitPoint::from_geo(&Point::new(0.0, 51.4779));
//! assert_eq!(greenwich.lng(), 0.5);
//! ```

pub mod ordinate;
pub mod point;
pub mod rect;
