//! Case-management wire models
//!
//! Typed mirrors of the service's JSON payloads. Every response-side field is
//! optional so that a field omitted by server-side field filtering stays
//! distinguishable from a field that is present but empty.

pub mod attachment;
pub mod case;
pub mod resource;
pub mod watchlist;

// Re-export model types for convenience
pub use attachment::{Attachment, AttachmentList};
pub use case::{
    Case, CaseList, Comment, Eu, Offering, OfferingType, PaginationUrl,
    OFFERING_TYPE_GROUP_CATEGORY, OFFERING_TYPE_GROUP_CRN_SERVICE_NAME,
};
pub use resource::Resource;
pub use watchlist::{User, Watchlist, WatchlistAddResponse};
