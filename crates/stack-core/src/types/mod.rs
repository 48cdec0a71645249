//! Core type definitions used across the design-stack workspace.

pub mod pagination;
pub mod status;

pub use pagination::{
    PageRequest, PageSlot, PageState, page_numbers, page_range, page_range_for_count, try_page_range,
    try_page_range_for_count,
};
pub use status::{LoaderVariant, StepStatus};
