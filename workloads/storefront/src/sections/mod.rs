//! Section renderers for storefront pages.

mod card;
mod detail;
mod listing;
mod navbar;
mod not_found;

pub use card::*;
pub use detail::*;
pub use listing::*;
pub use navbar::*;
pub use not_found::*;
