use serde_json::{Map, Value};

/// Body for the save-method endpoint: the selected type, the default flag and
/// whatever named fields the form held when it was submitted. The field set is
/// not checked against the type; the server owns validation.
pub fn build_save_payload<I, K, V>(method: &str, is_default: bool, form_entries: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut payload: Map<String, Value> = form_entries
        .into_iter()
        .map(|(name, value)| (name.into(), Value::String(value.into())))
        .collect();
    payload.insert("method".to_string(), Value::String(method.to_string()));
    payload.insert("is_default".to_string(), Value::Bool(is_default));
    payload
}
