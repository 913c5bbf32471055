//! # dynaform
//!
//! Builds a complete HTML form from a record's schema: one labelled control
//! per content column, chosen by column kind, inside a form that submits to
//! `create` or `update`.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynaform::{FormAssembler, FormOptions};
//! use dynaform_model::{Column, DynamicRecord, RecordScope};
//! use dynaform_tags::StandardHelpers;
//!
//! let scope = RecordScope::new().assign(
//!     "post",
//!     DynamicRecord::new()
//!         .column(Column::string("title"))
//!         .column(Column::text("body"))
//!         .attr("title", "Hello World")
//!         .attr("body", "Back to the hill and over it again!"),
//! );
//! let helpers = StandardHelpers::new();
//! let assembler = FormAssembler::new(&helpers, &scope);
//!
//! let html = assembler.form("post", &FormOptions::new()).unwrap();
//!
//! assert!(html.as_str().starts_with(r#"<form action="create" method="post">"#));
//! assert!(html.as_str().contains(r#"name="post[title]""#));
//! assert!(html.as_str().ends_with(
//!     r#"<input name="commit" type="submit" value="Create" /></form>"#
//! ));
//! ```
//!
//! ## Custom entries
//!
//! `input_block` replaces the label and line break around each control:
//!
//! ```rust
//! use dynaform::{input, FormAssembler, FormOptions};
//! use dynaform_model::{Column, DynamicRecord, RecordScope};
//! use dynaform_tags::{Markup, StandardHelpers};
//!
//! let scope = RecordScope::new().assign(
//!     "entry",
//!     DynamicRecord::new().column(Column::string("message")),
//! );
//! let helpers = StandardHelpers::new();
//! let assembler = FormAssembler::new(&helpers, &scope);
//!
//! let options = FormOptions::new()
//!     .action("sign")
//!     .input_block(|record, column| {
//!         Markup::escape(&format!("{}: ", column.human_name))
//!             .concat(input(&helpers, "entry", record, column))
//!             .concat(Markup::trusted("<br />"))
//!     });
//! let html = assembler.form("entry", &options).unwrap();
//!
//! assert!(html.as_str().contains(r#"Message: <input id="entry_message""#));
//! assert!(html.as_str().contains(r#"value="Sign""#));
//! ```

mod assembler;
mod error;
mod error_messages;
mod input;
mod options;

pub use assembler::{default_action, submit_value_for, FormAssembler};
pub use error::{FormError, Result};
pub use error_messages::{
    error_message_on, error_messages_for, ErrorMessageOnOptions, ErrorMessagesOptions,
};
pub use input::{default_input_block, input};
pub use options::{FormOptions, InputBlock};
