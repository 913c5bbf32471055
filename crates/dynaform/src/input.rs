//! Column-kind dispatch for form controls.

use dynaform_model::{Column, ColumnKind, Record};
use dynaform_tags::{Markup, ViewHelpers};
use tracing::warn;

/// Renders the control that edits `column` on `record`.
///
/// | kind                          | control            |
/// |-------------------------------|--------------------|
/// | text                          | text area          |
/// | date                          | date selects       |
/// | datetime, timestamp           | datetime selects   |
/// | time                          | time selects       |
/// | boolean                       | boolean select     |
/// | string named `*password*`     | password field     |
/// | anything else                 | text field         |
pub fn input(
    helpers: &dyn ViewHelpers,
    record_name: &str,
    record: &dyn Record,
    column: &Column,
) -> Markup {
    let name = column.name.as_str();
    match &column.kind {
        ColumnKind::Text => helpers.text_area(record_name, record, name),
        ColumnKind::Date => helpers.date_select(record_name, record, name),
        ColumnKind::DateTime | ColumnKind::Timestamp => {
            helpers.datetime_select(record_name, record, name)
        }
        ColumnKind::Time => helpers.time_select(record_name, record, name),
        ColumnKind::Boolean => helpers.boolean_select(record_name, record, name),
        ColumnKind::String if name.contains("password") => {
            helpers.password_field(record_name, record, name)
        }
        ColumnKind::String
        | ColumnKind::Integer
        | ColumnKind::Float
        | ColumnKind::Decimal
        | ColumnKind::Binary => helpers.text_field(record_name, record, name),
        ColumnKind::Other(kind) => {
            warn!(column = name, kind = %kind, "Unrecognized column kind, using a text field");
            helpers.text_field(record_name, record, name)
        }
    }
}

/// Label, line break and control in a paragraph.
///
/// The control is wrapped by the helpers' error decoration when the record
/// has errors on the column; the label never is.
pub fn default_input_block(
    helpers: &dyn ViewHelpers,
    record_name: &str,
    record: &dyn Record,
    column: &Column,
) -> Markup {
    let control = input(helpers, record_name, record, column);
    let control = if record.errors().on(&column.name).is_empty() {
        control
    } else {
        helpers.error_wrapper(control)
    };

    Markup::trusted("<p>")
        .concat(helpers.label(record_name, &column.name, &column.human_name))
        .concat(Markup::trusted("<br />"))
        .concat(control)
        .concat(Markup::trusted("</p>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dynaform_model::DynamicRecord;
    use dynaform_tags::StandardHelpers;

    fn render(record: &DynamicRecord, column: Column) -> String {
        input(&StandardHelpers::new(), "user", record, &column).into_string()
    }

    #[test]
    fn test_text_kinds() {
        let record = DynamicRecord::new()
            .column(Column::string("name"))
            .column(Column::integer("age"))
            .attr("name", "Ann")
            .attr("age", 31);

        assert_eq!(
            render(&record, Column::string("name")),
            r#"<input id="user_name" name="user[name]" size="30" type="text" value="Ann" />"#
        );
        assert_eq!(
            render(&record, Column::integer("age")),
            r#"<input id="user_age" name="user[age]" size="30" type="text" value="31" />"#
        );
        assert!(render(&record, Column::new("decimal(8,2)", "balance")).contains(r#"type="text""#));
    }

    #[test]
    fn test_password_by_name() {
        let record = DynamicRecord::new()
            .column(Column::string("password_confirmation"))
            .attr("password_confirmation", "secret");

        let html = render(&record, Column::string("password_confirmation"));
        assert!(html.contains(r#"type="password""#));
        assert!(!html.contains("secret"));

        let notes = render(&record, Column::text("password_hint"));
        assert!(notes.starts_with("<textarea"));
    }

    #[test]
    fn test_select_kinds() {
        let record = DynamicRecord::new()
            .column(Column::date("born_on"))
            .attr("born_on", NaiveDate::from_ymd_opt(1990, 1, 2).unwrap());

        assert_eq!(render(&record, Column::date("born_on")).matches("<select").count(), 3);
        assert_eq!(render(&record, Column::datetime("born_on")).matches("<select").count(), 5);
        assert_eq!(render(&record, Column::new("timestamp", "born_on")).matches("<select").count(), 5);
        assert_eq!(render(&record, Column::time("born_on")).matches("<select").count(), 2);
        assert!(render(&record, Column::boolean("admin")).contains(r#"<option value="true">True</option>"#));
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let record = DynamicRecord::new();
        let html = render(&record, Column::new("geometry", "location"));
        assert_eq!(
            html,
            r#"<input id="user_location" name="user[location]" size="30" type="text" />"#
        );
    }

    #[test]
    fn test_default_input_block() {
        let record = DynamicRecord::new()
            .column(Column::string("name"))
            .attr("name", "Ann");
        let html = default_input_block(&StandardHelpers::new(), "user", &record, &Column::string("name"))
            .into_string();

        assert!(html.starts_with("<p><label"));
        assert!(html.contains(r#"for="user_name""#));
        assert!(html.contains("Name</label><br /><input"));
        assert!(html.ends_with("/></p>"));
        assert!(!html.contains("fieldWithErrors"));
    }

    #[test]
    fn test_default_input_block_wraps_errors() {
        let record = DynamicRecord::new()
            .column(Column::string("name"))
            .error("name", "is blank");
        let html = default_input_block(&StandardHelpers::new(), "user", &record, &Column::string("name"))
            .into_string();

        assert!(html.starts_with("<p><label"));
        assert!(html.contains("Name</label><br /><div"));
        assert!(html.contains("fieldWithErrors"));
        assert!(html.contains(r#"<input id="user_name" name="user[name]" size="30" type="text" /></div></p>"#));
    }
}
