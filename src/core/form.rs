//! Static HTML rendering of a JSON-Schema-driven form.
//!
//! The schema decides the fields, the UI schema (`ui:*` keys mirroring the
//! schema's nesting) adjusts widgets and labels, and the form data pre-fills
//! values. Output is indented two spaces per level and has no submit button.

use serde_json::{Map, Value};

use crate::utils::escape_html;

const ROOT_ID: &str = "root";
const INDENT: &str = "  ";

static NULL: Value = Value::Null;

/// Render a complete `<form>` for `schema`.
pub fn render_form(schema: &Value, ui_schema: &Value, form_data: &Value) -> String {
    let mut writer = FormWriter::default();
    writer.open("<form class=\"formgen-form\">");
    writer.field(&Field {
        id: ROOT_ID.to_string(),
        name: "",
        schema,
        ui: ui_schema,
        data: form_data,
        required: false,
    });
    writer.close("</form>");
    writer.out
}

struct Field<'a> {
    id: String,
    name: &'a str,
    schema: &'a Value,
    ui: &'a Value,
    data: &'a Value,
    required: bool,
}

impl Field<'_> {
    fn kind(&self) -> &str {
        match self.schema.get("type").and_then(Value::as_str) {
            Some(kind) => kind,
            None if self.schema.get("properties").is_some() => "object",
            None => "string",
        }
    }

    fn ui_str(&self, key: &str) -> Option<&str> {
        self.ui.get(key).and_then(Value::as_str)
    }

    fn ui_flag(&self, key: &str) -> bool {
        self.ui.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    fn title(&self) -> &str {
        self.ui_str("ui:title")
            .or_else(|| self.schema.get("title").and_then(Value::as_str))
            .unwrap_or(self.name)
    }

    fn description(&self) -> Option<&str> {
        self.ui_str("ui:description")
            .or_else(|| self.schema.get("description").and_then(Value::as_str))
    }

    /// Current value: form data first, then the schema default.
    fn value(&self) -> Option<&Value> {
        match self.data {
            Value::Null => self.schema.get("default"),
            data => Some(data),
        }
    }

    fn value_text(&self) -> Option<String> {
        self.value().and_then(|value| match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
    }

    fn common_attrs(&self) -> String {
        let mut attrs = format!("id=\"{0}\" name=\"{0}\"", self.id);
        if self.required {
            attrs.push_str(" required");
        }
        let read_only = self.ui_flag("ui:readonly")
            || self.schema.get("readOnly").and_then(Value::as_bool).unwrap_or(false);
        if read_only {
            attrs.push_str(" readonly");
        }
        if self.ui_flag("ui:disabled") {
            attrs.push_str(" disabled");
        }
        if let Some(placeholder) = self.ui_str("ui:placeholder") {
            attrs.push_str(&format!(" placeholder=\"{}\"", escape_html(placeholder)));
        }
        attrs
    }

    fn child<'a>(&'a self, key: &'a str, schema: &'a Value, required: bool) -> Field<'a> {
        Field {
            id: format!("{}_{}", self.id, key),
            name: key,
            schema,
            ui: self.ui.get(key).unwrap_or(&NULL),
            data: self.data.get(key).unwrap_or(&NULL),
            required,
        }
    }
}

/// Property names in display order.
///
/// `ui:order` lists names first; a `"*"` entry marks where the remaining
/// properties go, otherwise they are appended.
fn ordered_keys<'a>(properties: &'a Map<String, Value>, order: Option<&'a Value>) -> Vec<&'a str> {
    let Some(order) = order.and_then(Value::as_array) else {
        return properties.keys().map(String::as_str).collect();
    };

    let listed: Vec<&str> = order
        .iter()
        .filter_map(Value::as_str)
        .filter(|key| *key == "*" || properties.contains_key(*key))
        .collect();
    let rest: Vec<&str> = properties
        .keys()
        .map(String::as_str)
        .filter(|key| !listed.contains(key))
        .collect();

    let mut keys = Vec::with_capacity(properties.len());
    let mut rest_placed = false;
    for key in listed {
        if key == "*" {
            if !rest_placed {
                keys.extend(rest.iter().copied());
                rest_placed = true;
            }
        } else {
            keys.push(key);
        }
    }
    if !rest_placed {
        keys.extend(rest);
    }
    keys
}

fn required_marker(required: bool) -> &'static str {
    if required {
        "<span class=\"required\">*</span>"
    } else {
        ""
    }
}

#[derive(Default)]
struct FormWriter {
    out: String,
    depth: usize,
}

impl FormWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    fn field(&mut self, field: &Field<'_>) {
        if field.ui_str("ui:widget") == Some("hidden") {
            let value = field.value_text().unwrap_or_default();
            self.line(&format!(
                "<input type=\"hidden\" id=\"{0}\" name=\"{0}\" value=\"{1}\">",
                field.id,
                escape_html(&value)
            ));
            return;
        }

        match field.kind() {
            "object" => self.object(field),
            "array" => self.array(field),
            "boolean" => self.checkbox(field),
            "null" => {}
            kind => self.input(field, kind),
        }
    }

    fn legend(&mut self, field: &Field<'_>) {
        let title = field.title();
        if !title.is_empty() {
            let marker = required_marker(field.required);
            self.line(&format!(
                "<legend id=\"{}__title\">{}{}</legend>",
                field.id,
                escape_html(title),
                marker
            ));
        }
        if let Some(description) = field.description() {
            self.line(&format!(
                "<p id=\"{}__description\" class=\"field-description\">{}</p>",
                field.id,
                escape_html(description)
            ));
        }
    }

    fn object(&mut self, field: &Field<'_>) {
        let empty = Map::new();
        let properties = field
            .schema
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let required: Vec<&str> = field
            .schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        self.open(&format!("<fieldset id=\"{}\">", field.id));
        self.legend(field);
        for key in ordered_keys(properties, field.ui.get("ui:order")) {
            if let Some(schema) = properties.get(key) {
                let child = field.child(key, schema, required.contains(&key));
                self.field(&child);
            }
        }
        self.close("</fieldset>");
    }

    fn array(&mut self, field: &Field<'_>) {
        let items_schema = field.schema.get("items").unwrap_or(&NULL);
        let items_ui = field.ui.get("items").unwrap_or(&NULL);
        let items = field.value().and_then(Value::as_array);

        self.open(&format!("<fieldset id=\"{}\" class=\"field-array\">", field.id));
        self.legend(field);
        for (index, data) in items.into_iter().flatten().enumerate() {
            let child = Field {
                id: format!("{}_{}", field.id, index),
                name: "",
                schema: items_schema,
                ui: items_ui,
                data,
                required: false,
            };
            self.field(&child);
        }
        self.close("</fieldset>");
    }

    fn label(&mut self, field: &Field<'_>) {
        let marker = required_marker(field.required);
        self.line(&format!(
            "<label for=\"{}\">{}{}</label>",
            field.id,
            escape_html(field.title()),
            marker
        ));
    }

    fn help(&mut self, field: &Field<'_>) {
        if let Some(description) = field.description() {
            self.line(&format!(
                "<p id=\"{}__description\" class=\"field-description\">{}</p>",
                field.id,
                escape_html(description)
            ));
        }
        if let Some(help) = field.ui_str("ui:help") {
            self.line(&format!(
                "<p id=\"{}__help\" class=\"help-block\">{}</p>",
                field.id,
                escape_html(help)
            ));
        }
    }

    fn checkbox(&mut self, field: &Field<'_>) {
        let checked = field.value().and_then(Value::as_bool).unwrap_or(false);
        self.open("<div class=\"form-group field field-boolean\">");
        self.open("<div class=\"checkbox\">");
        self.open(&format!("<label for=\"{}\">", field.id));
        self.line(&format!(
            "<input type=\"checkbox\" {}{}>",
            field.common_attrs(),
            if checked { " checked" } else { "" }
        ));
        self.line(&format!("<span>{}</span>", escape_html(field.title())));
        self.close("</label>");
        self.close("</div>");
        self.help(field);
        self.close("</div>");
    }

    fn input(&mut self, field: &Field<'_>, kind: &str) {
        self.open(&format!("<div class=\"form-group field field-{}\">", escape_html(kind)));
        self.label(field);

        let value = field.value_text();
        if let Some(options) = field.schema.get("enum").and_then(Value::as_array) {
            self.select(field, options, value.as_deref());
        } else if field.ui_str("ui:widget") == Some("textarea") {
            self.line(&format!(
                "<textarea class=\"form-control\" {}>{}</textarea>",
                field.common_attrs(),
                escape_html(value.as_deref().unwrap_or_default())
            ));
        } else {
            let input_type = input_type(field, kind);
            let value_attr = value
                .map(|v| format!(" value=\"{}\"", escape_html(&v)))
                .unwrap_or_default();
            self.line(&format!(
                "<input type=\"{}\" class=\"form-control\" {}{}>",
                input_type,
                field.common_attrs(),
                value_attr
            ));
        }

        self.help(field);
        self.close("</div>");
    }

    fn select(&mut self, field: &Field<'_>, options: &[Value], selected: Option<&str>) {
        self.open(&format!("<select class=\"form-control\" {}>", field.common_attrs()));
        if !field.required {
            self.line("<option value=\"\"></option>");
        }
        for option in options {
            let text = match option {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let mark = if selected == Some(text.as_str()) { " selected" } else { "" };
            let text = escape_html(&text);
            self.line(&format!("<option value=\"{text}\"{mark}>{text}</option>"));
        }
        self.close("</select>");
    }
}

fn input_type(field: &Field<'_>, kind: &str) -> &'static str {
    match (field.ui_str("ui:widget"), kind) {
        (Some("password"), _) => "password",
        (Some("email"), _) => "email",
        (Some("uri"), _) => "url",
        (_, "number" | "integer") => "number",
        _ => match field.schema.get("format").and_then(Value::as_str) {
            Some("email") => "email",
            Some("uri") => "url",
            Some("date") => "date",
            Some("date-time") => "datetime-local",
            _ => "text",
        },
    }
}
