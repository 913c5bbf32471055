//! Whole-form generation.

use std::sync::LazyLock;

use dynaform_model::{Record, RecordResolver};
use dynaform_tags::{Markup, ViewHelpers, MULTIPART};
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{FormError, Result};
use crate::input::{default_input_block, input};
use crate::options::FormOptions;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid non-word regex"));

/// Default submit label for an action: non-word characters removed, first
/// letter upper case and the rest lower case.
///
/// ```
/// use dynaform::submit_value_for;
///
/// assert_eq!(submit_value_for("create"), "Create");
/// assert_eq!(submit_value_for("sign up!"), "Signup");
/// assert_eq!(submit_value_for("sign_up"), "Sign_up");
/// ```
pub fn submit_value_for(action: &str) -> String {
    let word = NON_WORD.replace_all(action, "");
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Action a form posts to when none is given.
pub fn default_action(record: &dyn Record) -> &'static str {
    if record.is_new_record() {
        "create"
    } else {
        "update"
    }
}

/// Builds complete forms for records found through a resolver.
///
/// A form is made of, in order: the opening form tag, a hidden identity
/// field for persisted records, one entry per content column joined by
/// newlines, any extension markup, the submit control and the closing tag.
pub struct FormAssembler<'a> {
    helpers: &'a dyn ViewHelpers,
    records: &'a dyn RecordResolver,
}

impl<'a> FormAssembler<'a> {
    /// Creates an assembler over `helpers` and the records in `records`.
    pub fn new(helpers: &'a dyn ViewHelpers, records: &'a dyn RecordResolver) -> Self {
        Self { helpers, records }
    }

    /// Generates the form for the record named `record_name`.
    pub fn form(&self, record_name: &str, options: &FormOptions<'_>) -> Result<Markup> {
        let record = self.resolve(record_name)?;
        self.render(record_name, record, options, None)
    }

    /// Like [`FormAssembler::form`], appending whatever `extension` returns
    /// before the submit control. `extension` sees the markup generated so far.
    pub fn form_with<F>(
        &self,
        record_name: &str,
        options: &FormOptions<'_>,
        extension: F,
    ) -> Result<Markup>
    where
        F: FnOnce(&Markup) -> Markup,
    {
        let record = self.resolve(record_name)?;
        self.render(record_name, record, options, Some(Box::new(extension)))
    }

    /// Generates a form for a record that is not in the resolver.
    pub fn form_for_record(
        &self,
        record_name: &str,
        record: &dyn Record,
        options: &FormOptions<'_>,
    ) -> Result<Markup> {
        self.render(record_name, record, options, None)
    }

    /// Control for a single column of the record named `record_name`.
    pub fn input(&self, record_name: &str, method: &str) -> Result<Markup> {
        let record = self.resolve(record_name)?;
        let column = record
            .column_for_attribute(method)
            .ok_or_else(|| FormError::UnknownColumn {
                record: record_name.to_string(),
                column: method.to_string(),
            })?;
        Ok(input(self.helpers, record_name, record, &column))
    }

    /// One entry per content column, in column order, joined by newlines.
    pub fn all_input_tags(
        &self,
        record_name: &str,
        record: &dyn Record,
        options: &FormOptions<'_>,
    ) -> Markup {
        let entries = record.content_columns().into_iter().map(|column| {
            trace!(record = record_name, column = %column.name, kind = %column.kind, "Rendering entry");
            match &options.input_block {
                Some(block) => block(record, &column),
                None => default_input_block(self.helpers, record_name, record, &column),
            }
        });
        Markup::join(entries, "\n")
    }

    fn resolve(&self, record_name: &str) -> Result<&'a dyn Record> {
        let record = self
            .records
            .resolve(record_name)
            .ok_or_else(|| FormError::UnknownRecord(record_name.to_string()))?;
        debug!(
            record = record_name,
            columns = record.content_columns().len(),
            persisted = !record.is_new_record(),
            "Resolved record"
        );
        Ok(record)
    }

    fn render(
        &self,
        record_name: &str,
        record: &dyn Record,
        options: &FormOptions<'_>,
        extension: Option<Box<dyn FnOnce(&Markup) -> Markup + '_>>,
    ) -> Result<Markup> {
        let action = options
            .action
            .clone()
            .unwrap_or_else(|| default_action(record).to_string());
        let id = if record.is_new_record() {
            None
        } else {
            record.id()
        };

        let target = self.helpers.url_for(&action, id.as_deref())?;
        let enctype = options.multipart.then_some(MULTIPART);
        debug!(
            record = record_name,
            action = %action,
            target = %target,
            method = %options.method,
            "Generating form"
        );

        let mut contents = self.helpers.form_tag(&target, options.method, enctype)?;
        if !record.is_new_record() {
            contents = contents.concat(self.helpers.hidden_field(record_name, record, "id"));
        }
        contents = contents.concat(self.all_input_tags(record_name, record, options));

        if let Some(extension) = extension {
            let extra = extension(&contents);
            contents = contents.concat(extra);
        }

        let submit_value = options
            .submit_value
            .clone()
            .unwrap_or_else(|| submit_value_for(&action));

        Ok(contents
            .concat(self.helpers.submit_tag(&submit_value))
            .concat(self.helpers.end_form_tag()))
    }
}
