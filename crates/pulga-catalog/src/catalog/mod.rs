//! Product catalog module.
//!
//! Contains the listing types returned by the search API: products,
//! categories and click-ranked popular products.

mod category;
mod popular;
mod product;

pub use category::{Category, CategoryChoice, EVERYTHING, KNOWN_CATEGORIES, SURPRISE_ME};
pub use popular::{PopularProduct, PopularProducts};
pub use product::{Condition, Product, ProductMedia, UNNAMED_PRODUCT};
