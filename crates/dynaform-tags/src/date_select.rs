//! Cascading select controls for date and time attributes.
//!
//! Each component select is named `object[method(Ni)]` where `N` is the
//! position of the component: 1 year, 2 month, 3 day, 4 hour, 5 minute.

use chrono::{Datelike, Utc};
use dynaform_model::FieldValue;

use crate::config::{TagConfig, MAX_YEAR_SPAN};
use crate::instance_tag::tag_id;
use crate::markup::{html_escape, Markup};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Separator between the date and the time selects.
pub const DATE_TIME_SEPARATOR: &str = " &mdash; ";

/// Separator between the hour and the minute selects.
pub const TIME_SEPARATOR: &str = " : ";

/// Renders one component select with one option per line.
fn select_html(
    object_name: &str,
    method: &str,
    position: u8,
    options: impl Iterator<Item = (String, String)>,
    selected: Option<String>,
) -> String {
    let id = format!("{}_{position}i", tag_id(object_name, method));
    let name = format!("{object_name}[{method}({position}i)]");

    let mut html = format!(
        "<select id=\"{}\" name=\"{}\">\n",
        html_escape(&id),
        html_escape(&name)
    );
    for (value, label) in options {
        let selected_attr = if selected.as_deref() == Some(value.as_str()) {
            " selected=\"selected\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{value}\"{selected_attr}>{label}</option>\n"
        ));
    }
    html.push_str("</select>\n");
    html
}

fn year_select(object_name: &str, method: &str, value: &FieldValue, config: &TagConfig) -> String {
    let selected = value.as_date().map(|d| d.year());
    let middle = selected
        .or(config.reference_year)
        .unwrap_or_else(|| Utc::now().year());
    let span = config.year_span.clamp(0, MAX_YEAR_SPAN);
    let years = middle.saturating_sub(span)..=middle.saturating_add(span);

    select_html(
        object_name,
        method,
        1,
        years.map(|y| (y.to_string(), y.to_string())),
        selected.map(|y| y.to_string()),
    )
}

fn month_select(object_name: &str, method: &str, value: &FieldValue) -> String {
    select_html(
        object_name,
        method,
        2,
        MONTH_NAMES
            .iter()
            .zip(1..=12)
            .map(|(name, n)| (n.to_string(), (*name).to_string())),
        value.as_date().map(|d| d.month().to_string()),
    )
}

fn day_select(object_name: &str, method: &str, value: &FieldValue) -> String {
    select_html(
        object_name,
        method,
        3,
        (1..=31).map(|d: u32| (d.to_string(), d.to_string())),
        value.as_date().map(|d| d.day().to_string()),
    )
}

fn hour_select(object_name: &str, method: &str, value: &FieldValue) -> String {
    select_html(
        object_name,
        method,
        4,
        (0..24).map(|h: u32| (format!("{h:02}"), format!("{h:02}"))),
        value.as_hour_minute().map(|(h, _)| format!("{h:02}")),
    )
}

fn minute_select(object_name: &str, method: &str, value: &FieldValue) -> String {
    select_html(
        object_name,
        method,
        5,
        (0..60).map(|m: u32| (format!("{m:02}"), format!("{m:02}"))),
        value.as_hour_minute().map(|(_, m)| format!("{m:02}")),
    )
}

/// Year, month and day selects.
///
/// The year select lists `year_span` years on either side of the selected
/// year, or of the reference year when the attribute has no value.
pub fn date_select(
    object_name: &str,
    method: &str,
    value: &FieldValue,
    config: &TagConfig,
) -> Markup {
    let html = [
        year_select(object_name, method, value, config),
        month_select(object_name, method, value),
        day_select(object_name, method, value),
    ]
    .concat();
    Markup::trusted(html)
}

/// Date selects, an em-dash, then hour and minute selects.
pub fn datetime_select(
    object_name: &str,
    method: &str,
    value: &FieldValue,
    config: &TagConfig,
) -> Markup {
    date_select(object_name, method, value, config)
        .concat(Markup::trusted(DATE_TIME_SEPARATOR))
        .concat(time_select(object_name, method, value))
}

/// Hour and minute selects.
pub fn time_select(object_name: &str, method: &str, value: &FieldValue) -> Markup {
    let html = [
        hour_select(object_name, method, value),
        TIME_SEPARATOR.to_string(),
        minute_select(object_name, method, value),
    ]
    .concat();
    Markup::trusted(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn written_on() -> FieldValue {
        FieldValue::Date(NaiveDate::from_ymd_opt(2004, 6, 15).unwrap())
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_date_select_components() {
        let html = date_select("post", "written_on", &written_on(), &TagConfig::default());
        let html = html.as_str();

        assert_eq!(count(html, "<select"), 3);
        assert!(html.contains(r#"<select id="post_written_on_1i" name="post[written_on(1i)]">"#));
        assert!(html.contains(r#"<select id="post_written_on_2i" name="post[written_on(2i)]">"#));
        assert!(html.contains(r#"<select id="post_written_on_3i" name="post[written_on(3i)]">"#));
        assert!(html.contains("<option value=\"2004\" selected=\"selected\">2004</option>\n"));
        assert!(html.contains("<option value=\"6\" selected=\"selected\">June</option>\n"));
        assert!(html.contains("<option value=\"15\" selected=\"selected\">15</option>\n"));
        assert_eq!(count(html, "selected=\"selected\""), 3);
    }

    #[test]
    fn test_year_window() {
        let html = date_select("post", "written_on", &written_on(), &TagConfig::default());
        let html = html.as_str();

        assert!(html.starts_with(
            "<select id=\"post_written_on_1i\" name=\"post[written_on(1i)]\">\n<option value=\"1999\">1999</option>\n"
        ));
        assert!(html.contains("<option value=\"2009\">2009</option>\n</select>\n"));
        assert!(!html.contains("1998"));
        assert!(!html.contains("2010"));
    }

    #[test]
    fn test_days_and_months() {
        let html = date_select("post", "written_on", &written_on(), &TagConfig::default());
        let html = html.as_str();

        assert!(html.contains("<option value=\"1\">January</option>\n"));
        assert!(html.contains("<option value=\"12\">December</option>\n"));
        assert!(html.contains("<option value=\"31\">31</option>\n</select>\n"));
    }

    #[test]
    fn test_no_value_uses_reference_year() {
        let config = TagConfig::default().reference_year(2020);
        let html = date_select("post", "written_on", &FieldValue::Null, &config);
        let html = html.as_str();

        assert!(html.contains("<option value=\"2015\">2015</option>"));
        assert!(html.contains("<option value=\"2025\">2025</option>"));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_extreme_year_settings_stay_bounded() {
        let config = TagConfig {
            reference_year: Some(i32::MAX),
            ..TagConfig::default()
        };
        let html = date_select("post", "written_on", &FieldValue::Null, &config);
        let html = html.as_str();
        assert!(html.contains(&format!("<option value=\"{}\">", i32::MAX)));
        assert!(html.contains(&format!("<option value=\"{}\">", i32::MAX - 5)));

        let config = TagConfig {
            year_span: i32::MAX,
            reference_year: Some(2000),
            ..TagConfig::default()
        };
        let html = date_select("post", "written_on", &FieldValue::Null, &config);
        assert_eq!(
            html.as_str().matches("<option").count(),
            (2 * MAX_YEAR_SPAN + 1) as usize + 12 + 31
        );

        let config = TagConfig {
            year_span: -3,
            reference_year: Some(2000),
            ..TagConfig::default()
        };
        let html = date_select("post", "written_on", &FieldValue::Null, &config);
        assert!(html.as_str().contains("<option value=\"2000\">2000</option>"));
    }

    #[test]
    fn test_datetime_select() {
        let value = FieldValue::DateTime(
            NaiveDate::from_ymd_opt(2004, 6, 15)
                .unwrap()
                .and_hms_opt(16, 30, 0)
                .unwrap(),
        );
        let html = datetime_select("post", "written_on", &value, &TagConfig::default());
        let html = html.as_str();

        assert_eq!(count(html, "<select"), 5);
        assert!(html.contains("</select>\n &mdash; <select id=\"post_written_on_4i\" name=\"post[written_on(4i)]\">\n"));
        assert!(html.contains("</select>\n : <select id=\"post_written_on_5i\" name=\"post[written_on(5i)]\">\n"));
        assert!(html.contains("<option value=\"00\">00</option>\n"));
        assert!(html.contains("<option value=\"16\" selected=\"selected\">16</option>\n"));
        assert!(html.contains("<option value=\"30\" selected=\"selected\">30</option>\n"));
        assert!(html.contains("<option value=\"59\">59</option>\n</select>\n"));
        assert_eq!(count(html, "selected=\"selected\""), 5);
    }

    #[test]
    fn test_time_select() {
        let value = FieldValue::Time(NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        let html = time_select("alarm", "rings_at", &value);
        let html = html.as_str();

        assert_eq!(count(html, "<select"), 2);
        assert!(html.contains("<option value=\"09\" selected=\"selected\">09</option>"));
        assert!(html.contains("<option value=\"05\" selected=\"selected\">05</option>"));
        assert!(!html.contains("&mdash;"));
    }
}
