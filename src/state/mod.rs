//! Application state shared across pages and components.
//!
//! DESIGN
//! ======
//! State structs are plain data with synchronous methods; pages wrap them
//! in `RwSignal` and provide them via context. Keeping the logic out of
//! signal types lets every transition be unit tested without a browser.

pub mod column_form;
pub mod selection;
