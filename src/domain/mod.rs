pub mod listing;
pub mod object_id;

pub use listing::{Listing, ListingFields, MODEL_NAME};
pub use object_id::ObjectId;
