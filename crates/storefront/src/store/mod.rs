//! Shopper state slices.
//!
//! State is partitioned into three independently-mutated slices (products,
//! cart, favorites), mirroring the one-way data flow of the storefront:
//! a request mutates exactly one slice, synchronously, and the page is
//! re-rendered from the new state.
//!
//! Cart and favorites are serialized into the visitor's session; the
//! products slice is rebuilt from a catalog fetch on every listing request.

pub mod cart;
pub mod favorites;
pub mod products;

pub use cart::{CartItem, CartState};
pub use favorites::FavoritesState;
pub use products::ProductsState;
