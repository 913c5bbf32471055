//! # dynaform-tags
//!
//! HTML building blocks for record-backed forms.
//!
//! This crate provides:
//! - `Markup`, a trusted (already escaped) HTML fragment
//! - Tag serialization with deterministic attribute order
//! - Controls bound to record attributes (text, password, hidden, text area,
//!   boolean select, date/datetime/time selects)
//! - Form open/close tags with request forgery protection
//! - URL generation from action names
//! - The `ViewHelpers` trait and its default `StandardHelpers`
//!
//! ## Quick Start
//!
//! ```rust
//! use dynaform_model::{Column, DynamicRecord};
//! use dynaform_tags::{Method, StandardHelpers, ViewHelpers};
//!
//! let post = DynamicRecord::new()
//!     .column(Column::text("body"))
//!     .attr("body", "Back to the hill");
//! let helpers = StandardHelpers::new();
//!
//! let open = helpers.form_tag("create", Method::Post, None).unwrap();
//! let body = helpers.text_area("post", &post, "body");
//!
//! assert_eq!(open.as_str(), r#"<form action="create" method="post">"#);
//! assert!(body.as_str().contains("Back to the hill</textarea>"));
//! ```

pub mod date_select;
mod config;
mod error;
mod form_tag;
mod helpers;
mod instance_tag;
mod markup;
mod tag;
mod url;

pub use config::{TagConfig, MAX_YEAR_SPAN};
pub use date_select::{date_select, datetime_select, time_select};
pub use error::{Result, TagError};
pub use form_tag::{end_form_tag, form_tag, submit_tag, ForgeryProtection, Method, MULTIPART};
pub use helpers::{StandardHelpers, ViewHelpers};
pub use instance_tag::{error_wrapper, label, tag_id, InstanceTag};
pub use markup::{html_escape, Markup};
pub use tag::{content_tag, tag, Attrs};
pub use url::{ActionPath, PathPattern, RouteMap, UrlFor};
