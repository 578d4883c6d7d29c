use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::config;
use crate::payments::actions::{self, BrowserApi, BrowserPage};

/// Click listeners installed on server-rendered elements. Listeners stay
/// attached until [`ClickBindings::dispose`] or drop.
#[derive(Default)]
pub struct ClickBindings {
    bound: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)>,
}

impl ClickBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to every element matching `selector`. Returns how many
    /// elements were bound.
    pub fn bind_all<F>(&mut self, selector: &str, handler: F) -> usize
    where
        F: Fn(&Element) + Clone + 'static,
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("No document, cannot bind {}", selector);
            return 0;
        };
        let nodes = match document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::error!("Invalid selector {}: {:?}", selector, e);
                return 0;
            }
        };

        let mut count = 0;
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let target = element.clone();
            let handler = handler.clone();
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| handler(&target));
            if let Err(e) = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
                log::error!("Failed to bind {}: {:?}", selector, e);
                continue;
            }
            self.bound.push((element, closure));
            count += 1;
        }
        count
    }

    pub fn dispose(&mut self) {
        for (element, closure) in self.bound.drain(..) {
            let _ = element.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ClickBindings {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn method_id(button: &Element) -> Option<String> {
    let id = button.get_attribute(config::METHOD_ID_ATTRIBUTE);
    if id.is_none() {
        log::warn!("Payment method button without {}", config::METHOD_ID_ATTRIBUTE);
    }
    id
}

/// Make-primary and delete buttons rendered by the server next to each saved
/// payment method.
pub struct MethodButtons {
    bindings: ClickBindings,
}

impl MethodButtons {
    pub fn init() -> Self {
        let mut bindings = ClickBindings::new();

        let primary = bindings.bind_all(config::MAKE_PRIMARY_BUTTON_SELECTOR, |button| {
            if let Some(id) = method_id(button) {
                spawn_local(async move {
                    actions::make_primary(&BrowserApi, &BrowserPage, &id).await;
                });
            }
        });

        let delete = bindings.bind_all(config::DELETE_METHOD_BUTTON_SELECTOR, |button| {
            if let Some(id) = method_id(button) {
                spawn_local(async move {
                    actions::delete_method(&BrowserApi, &BrowserPage, &id).await;
                });
            }
        });

        log::info!("Bound {} make-primary and {} delete buttons", primary, delete);
        Self { bindings }
    }

    pub fn dispose(mut self) {
        self.bindings.dispose();
    }
}
