use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Look `name` up in a `document.cookie` style string: `;` separated,
/// whitespace around entries ignored, first match wins. The value is
/// percent-decoded; a value that fails to decode is returned as is.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let prefix = format!("{}=", name);
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}

/// Read a cookie from the current page
pub fn get_document_cookie(name: &str) -> Option<String> {
    let cookies = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())?;
    get_cookie(&cookies, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_between_other_cookies() {
        assert_eq!(get_cookie("a=1; csrftoken=XYZ; b=2", "csrftoken"), Some("XYZ".to_string()));
    }

    #[test]
    fn missing_name_is_none() {
        assert_eq!(get_cookie("a=1; b=2", "csrftoken"), None);
        assert_eq!(get_cookie("", "csrftoken"), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(get_cookie("csrftoken=first;csrftoken=second", "csrftoken"), Some("first".to_string()));
    }

    #[test]
    fn name_must_match_whole_key() {
        assert_eq!(get_cookie("xcsrftoken=nope; csrftokens=nope", "csrftoken"), None);
    }

    #[test]
    fn value_is_percent_decoded() {
        assert_eq!(get_cookie("greeting=hello%20world%3B", "greeting"), Some("hello world;".to_string()));
    }

    #[test]
    fn undecodable_value_is_returned_raw() {
        // %FF alone is not valid UTF-8
        assert_eq!(get_cookie("bad=%FF", "bad"), Some("%FF".to_string()));
    }

    #[test]
    fn empty_value_is_still_a_match() {
        assert_eq!(get_cookie("csrftoken=; a=1", "csrftoken"), Some(String::new()));
    }
}
