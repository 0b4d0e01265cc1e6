//! View-state that drives the page: which section is up, which card is
//! hovered, what page of projects is showing. Everything in here is plain
//! data so it can be unit tested without a browser; `app` wraps it in
//! signals.

pub mod catalog;
pub mod device;
pub mod filter;
pub mod hover;
pub mod navigation;
pub mod pagination;

pub use catalog::ProjectCatalog;
pub use device::{DeviceCategory, DeviceClass};
pub use filter::TechFilter;
pub use hover::{GridConfig, HoverConfig, HoverProps, HoverState};
pub use navigation::{GateDirection, Gesture, Navigator, Stage, Transition};
pub use pagination::{GridLayout, Pagination};
