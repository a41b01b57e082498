//! Informational replies for `/start` and `/help`.
//!
//! Both texts are rendered from the record schemas, so the templates shown
//! to users always match what the validators accept.

use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;

use crate::record::domain::{FieldCheck, RecordKind, RecordSchema};

const START_TEMPLATE: &str = "\
Welcome!
This bot helps you track income and expenses in a shared spreadsheet.

Available commands:
{% for schema in schemas %}
\u{2022} /{{ schema.command }} \u{2013} add a new {{ schema.command }} record
{% endfor %}
\u{2022} /excel \u{2013} get access to the spreadsheet
\u{2022} /help \u{2013} show message formats and instructions";

const HELP_TEMPLATE: &str = "\
Here is how to use the bot.

General rules
\u{2022} One message always creates exactly one record in the spreadsheet.
\u{2022} The bot only appends rows and does not perform any calculations or currency conversion.
{% for schema in schemas %}

/{{ schema.command }} \u{2013} add a new {{ schema.command }} record
The message after /{{ schema.command }} must contain {{ schema.min_lines }} or {{ schema.max_lines }} lines:
{% for line in schema.field_lines %}
{{ line }}
{% endfor %}
{% if schema.amount_span %}

At least one of lines {{ schema.amount_span[0] }}\u{2013}{{ schema.amount_span[1] }} must contain a valid amount.
{% endif %}

Example:
/{{ schema.command }}
{% for line in schema.example %}
{{ line }}
{% endfor %}
{% endfor %}";

const INCOME_EXAMPLE: [&str; 11] = [
    "24.12.2024",
    "500 USD",
    "Full payment for Vietnam program",
    "John Doe",
    "14.06.1986",
    "+1 555 123 456",
    "john.doe@example.com",
    "Returning client",
    "USA",
    "Kate",
    "Client asked for invoice copy",
];

const EXPENSE_EXAMPLE: [&str; 7] = [
    "24.12.2024",
    "319 USD",
    "276 EUR",
    "120000 KZT",
    "Salary payment for SMM specialist",
    "Kate",
    "Remaining amount will be paid next week",
];

/// Failure to render an informational reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render {template} reply: {reason}")]
pub struct ReplyRenderError {
    /// Name of the template that failed.
    pub template: &'static str,
    /// Rendering failure reason.
    pub reason: String,
}

#[derive(Debug, Serialize)]
struct SchemaView {
    command: &'static str,
    min_lines: usize,
    max_lines: usize,
    field_lines: Vec<String>,
    amount_span: Option<(usize, usize)>,
    example: &'static [&'static str],
}

impl SchemaView {
    fn from_schema(schema: &RecordSchema) -> Self {
        let amount_span = schema.amount_group().and_then(|group| group.line_span());
        let amount_indices = schema
            .amount_group()
            .map(|group| group.indices().to_vec())
            .unwrap_or_default();

        let field_lines = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let is_optional = !field.required || amount_indices.contains(&index);
                let hint = match field.check {
                    Some(FieldCheck::DateShape) => Some("DD.MM.YY or DD.MM.YYYY".to_owned()),
                    Some(FieldCheck::LeadingAmount) => schema
                        .amount_examples()
                        .first()
                        .map(|example| format!("e.g. {example}")),
                    None if is_optional => Some("optional".to_owned()),
                    None => None,
                };
                let number = index.saturating_add(1);
                hint.map_or_else(
                    || format!("{number}) {}", field.label),
                    |text| format!("{number}) {} ({text})", field.label),
                )
            })
            .collect();

        Self {
            command: schema.kind().command(),
            min_lines: schema.min_lines(),
            max_lines: schema.max_lines(),
            field_lines,
            amount_span,
            example: example_body(schema.kind()),
        }
    }
}

/// Returns a complete, valid message body for `kind`, comment included.
#[must_use]
pub const fn example_body(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Income => &INCOME_EXAMPLE,
        RecordKind::Expense => &EXPENSE_EXAMPLE,
    }
}

/// Renders the `/start` greeting.
///
/// # Errors
///
/// Returns [`ReplyRenderError`] if the template fails to render.
pub fn render_start(schemas: &[&RecordSchema]) -> Result<String, ReplyRenderError> {
    render("start", START_TEMPLATE, schemas)
}

/// Renders the `/help` text with one template section per schema.
///
/// # Errors
///
/// Returns [`ReplyRenderError`] if the template fails to render.
pub fn render_help(schemas: &[&RecordSchema]) -> Result<String, ReplyRenderError> {
    render("help", HELP_TEMPLATE, schemas)
}

fn render(
    name: &'static str,
    template: &str,
    schemas: &[&RecordSchema],
) -> Result<String, ReplyRenderError> {
    let views: Vec<SchemaView> = schemas
        .iter()
        .map(|schema| SchemaView::from_schema(schema))
        .collect();

    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    environment
        .render_str(template, context! { schemas => views })
        .map(|text| text.trim_end().to_owned())
        .map_err(|error| ReplyRenderError {
            template: name,
            reason: error.to_string(),
        })
}
