//! Server-rendered HTML for the ledger page.

use axum::http::StatusCode;
use chrono::{Datelike, NaiveDate};

use crate::catalog::SyllabusCatalog;
use crate::flash::Flash;
use crate::models::ClassRecord;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #222; }
fieldset { margin-bottom: 1rem; }
label { display: block; margin: .25rem 0; }
.flash { padding: .5rem 1rem; border-radius: 4px; margin-bottom: .5rem; }
.flash-success { background: #e3f6e5; border: 1px solid #5cb85c; }
.flash-error { background: #fbe4e4; border: 1px solid #d9534f; }
.record { border: 1px solid #ccc; border-radius: 4px; padding: .75rem; margin-bottom: .75rem; }
.record h3 { margin: 0 0 .5rem; }
"#;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_index(
    records: &[ClassRecord],
    catalog: &SyllabusCatalog,
    flashes: &[Flash],
    today: NaiveDate,
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Class content ledger</h1>\n");
    body.push_str(&render_flashes(flashes));
    body.push_str(&render_form(catalog, today));
    body.push_str(&render_records(records));
    page("Class content ledger", &body)
}

pub fn render_error(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the ledger</a></p>\n",
        escape(&status.to_string()),
        escape(message)
    );
    page("Error", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

fn render_flashes(flashes: &[Flash]) -> String {
    flashes
        .iter()
        .map(|flash| {
            format!(
                "<div class=\"flash flash-{}\">{}</div>\n",
                flash.kind.as_str(),
                escape(&flash.message)
            )
        })
        .collect()
}

fn render_form(catalog: &SyllabusCatalog, today: NaiveDate) -> String {
    let mut form = String::new();
    form.push_str("<form method=\"post\" action=\"/\">\n<fieldset>\n<legend>New class</legend>\n");
    form.push_str(&format!(
        "<label>Day <input type=\"text\" name=\"dia\" value=\"{:02}\" required></label>\n",
        today.day()
    ));
    form.push_str(&format!(
        "<label>Month <input type=\"text\" name=\"mes\" value=\"{:02}\" required></label>\n",
        today.month()
    ));
    form.push_str("<label>Class No. <input type=\"text\" name=\"clase_nro\" value=\"\" required></label>\n");
    form.push_str("<label>Unit No. <input type=\"text\" name=\"unidad_nro\" value=\"\" required></label>\n");
    form.push_str("<label>Class type <input type=\"text\" name=\"caracter_clase\" placeholder=\"theory, practice\" required></label>\n");
    form.push_str("</fieldset>\n");

    for module in catalog.modules() {
        form.push_str(&format!(
            "<fieldset>\n<legend>{}</legend>\n",
            escape(module.name)
        ));
        for topic in module.topics {
            let topic = escape(topic);
            form.push_str(&format!(
                "<label><input type=\"checkbox\" name=\"contenidos\" value=\"{}\"> {}</label>\n",
                topic, topic
            ));
        }
        form.push_str("</fieldset>\n");
    }

    form.push_str("<label>Activities <textarea name=\"actividades\"></textarea></label>\n");
    form.push_str("<label>Observations <textarea name=\"observaciones\"></textarea></label>\n");
    form.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    form
}

fn render_records(records: &[ClassRecord]) -> String {
    if records.is_empty() {
        return "<h2>Records</h2>\n<p>No classes recorded yet.</p>\n".to_string();
    }

    let mut list = String::from("<h2>Records</h2>\n");
    for record in records {
        let contents: String = record
            .content_items()
            .map(|item| format!("<li>{}</li>", escape(item)))
            .collect();
        list.push_str(&format!(
            concat!(
                "<div class=\"record\" id=\"record-{id}\">\n",
                "<h3>Class {class_number}, unit {unit_number} ({day:02}/{month:02})</h3>\n",
                "<p><strong>Type:</strong> {character}</p>\n",
                "<ul>{contents}</ul>\n",
                "<p><strong>Activities:</strong> {activities}</p>\n",
                "<p><strong>Observations:</strong> {observations}</p>\n",
                "<form method=\"post\" action=\"/eliminar/{id}\" onsubmit=\"return confirm('Delete this record?');\">",
                "<button type=\"submit\">Delete</button></form>\n",
                "</div>\n"
            ),
            id = record.id,
            class_number = record.class_number,
            unit_number = record.unit_number,
            day = record.day,
            month = record.month,
            character = escape(&record.class_character),
            contents = contents,
            activities = escape(&record.activities),
            observations = escape(&record.observations),
        ));
    }
    list
}
