//! Validation error summaries shown alongside generated forms.

use dynaform_model::Record;
use dynaform_tags::Markup;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Li, Ul, H2, P};

/// Options for [`error_messages_for`].
#[derive(Debug, Clone)]
pub struct ErrorMessagesOptions {
    /// `id` of the summary block.
    pub id: String,
    /// `class` of the summary block.
    pub class: String,
    /// Name used in the header; defaults to the record name with spaces.
    pub object_name: Option<String>,
    /// Replaces the whole header text.
    pub header_message: Option<String>,
    /// Paragraph shown above the message list.
    pub message: String,
}

impl Default for ErrorMessagesOptions {
    fn default() -> Self {
        Self {
            id: "errorExplanation".to_string(),
            class: "errorExplanation".to_string(),
            object_name: None,
            header_message: None,
            message: "There were problems with the following fields:".to_string(),
        }
    }
}

impl ErrorMessagesOptions {
    /// Creates the default summary options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name used in the header.
    #[must_use]
    pub fn object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = Some(name.into());
        self
    }

    /// Replaces the header text.
    #[must_use]
    pub fn header_message(mut self, header: impl Into<String>) -> Self {
        self.header_message = Some(header.into());
        self
    }

    /// Sets the paragraph above the message list.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// Summary of every validation error on `record`, or nothing when it has none.
///
/// ```
/// use dynaform::{error_messages_for, ErrorMessagesOptions};
/// use dynaform_model::{Column, DynamicRecord};
///
/// let post = DynamicRecord::new()
///     .column(Column::string("title"))
///     .error("title", "is too short");
/// let html = error_messages_for("post", &post, &ErrorMessagesOptions::new());
/// assert!(html.as_str().contains("1 error prohibited this post from being saved"));
/// assert!(html.as_str().contains("Title is too short"));
/// ```
pub fn error_messages_for(
    record_name: &str,
    record: &dyn Record,
    options: &ErrorMessagesOptions,
) -> Markup {
    let errors = record.errors();
    if errors.is_empty() {
        return Markup::new();
    }

    let header = options.header_message.clone().unwrap_or_else(|| {
        let count = errors.count();
        let noun = if count == 1 { "error" } else { "errors" };
        let name = options
            .object_name
            .clone()
            .unwrap_or_else(|| record_name.replace('_', " "));
        format!("{count} {noun} prohibited this {name} from being saved")
    });
    let messages = errors.full_messages();

    let html = Element::<Div>::new()
        .class(&options.class)
        .attr("id", &options.id)
        .child::<H2, _>(|h| h.text(&header))
        .child::<P, _>(|p| p.text(&options.message))
        .child::<Ul, _>(|ul| {
            ul.children(messages.iter(), |message, li: Element<Li>| li.text(message))
        })
        .render();
    Markup::trusted(html)
}

/// Options for [`error_message_on`].
#[derive(Debug, Clone)]
pub struct ErrorMessageOnOptions {
    /// Text placed before the message.
    pub prepend_text: String,
    /// Text placed after the message.
    pub append_text: String,
    /// `class` of the wrapping div.
    pub css_class: String,
}

impl Default for ErrorMessageOnOptions {
    fn default() -> Self {
        Self {
            prepend_text: String::new(),
            append_text: String::new(),
            css_class: "formError".to_string(),
        }
    }
}

impl ErrorMessageOnOptions {
    /// Creates options with a `formError` class and no extra text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text placed before the message.
    #[must_use]
    pub fn prepend_text(mut self, text: impl Into<String>) -> Self {
        self.prepend_text = text.into();
        self
    }

    /// Sets the text placed after the message.
    #[must_use]
    pub fn append_text(mut self, text: impl Into<String>) -> Self {
        self.append_text = text.into();
        self
    }

    /// Sets the class of the wrapping div.
    #[must_use]
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }
}

/// First error message on `field`, or nothing when the field has none.
pub fn error_message_on(
    record: &dyn Record,
    field: &str,
    options: &ErrorMessageOnOptions,
) -> Markup {
    let Some(first) = record.errors().on(field).into_iter().next() else {
        return Markup::new();
    };

    let text = format!("{}{first}{}", options.prepend_text, options.append_text);
    let html = Element::<Div>::new()
        .class(&options.css_class)
        .text(&text)
        .render();
    Markup::trusted(html)
}
