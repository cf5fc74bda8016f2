//! Page input types.
//!
//! What the page host hands to the stores: product cards behind the
//! add-to-cart buttons and auth form submissions.

pub mod forms;
pub mod product;

pub use forms::{SignInForm, SignUpForm};
pub use product::ProductCard;
