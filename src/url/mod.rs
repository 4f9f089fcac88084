//! URL handling: classification, grouping into model items, and
//! identity resolution for record names.

mod classify;
mod identity;
mod router;

pub use classify::{classify, UrlKind};
pub use identity::{hub_model_id, HubIdResolver, IdentityResolver};
pub use router::{ModelItem, UrlRouter};
