//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Header and footer
//! - `panels`: Sidebar, request form, and response panel
//! - `styling`: Color helpers shared across the UI

mod components;
mod panels;
mod styling;

pub use components::{render_footer, render_header};
pub use panels::{render_form_panel, render_response_panel, render_sidebar};
