//! Session crate for the TalentBoard screening core.
//!
//! This crate contains the pagination engine and the `CandidateSession`
//! composition layer that wires the candidate store, the screening
//! pipeline, and the favorites registry into the surface the presentation
//! layer consumes.

pub mod pagination;
pub mod session;

pub use pagination::{page_numbers, page_slice, total_pages, PageEntry, DEFAULT_PAGE_SIZE};
pub use session::CandidateSession;
