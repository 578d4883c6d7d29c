/// Base URL prepended to every API path. Empty means same origin, which is
/// how the page is normally served.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

pub const SAVE_METHOD_PATH: &str = "/payments/save-method/";
pub const MAKE_PRIMARY_PATH: &str = "/payments/make-primary/";
pub const DELETE_METHOD_PATH: &str = "/payments/delete-method/";

pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

// DOM contract with the server-rendered page
pub const ROOT_ELEMENT_ID: &str = "payment-methods-root";
pub const MODAL_ID: &str = "addMethodModal";
pub const FORM_ID: &str = "addMethodForm";
pub const DYNAMIC_FIELDS_ID: &str = "dynamicFields";
pub const METHOD_TYPE_ID: &str = "methodType";
pub const MAKE_DEFAULT_ID: &str = "makeDefault";
pub const ADD_METHOD_BUTTON_SELECTOR: &str = ".add-method-btn";
pub const MAKE_PRIMARY_BUTTON_SELECTOR: &str = ".make-primary-btn";
pub const DELETE_METHOD_BUTTON_SELECTOR: &str = ".delete-method-btn";
pub const METHOD_ID_ATTRIBUTE: &str = "data-method-id";
