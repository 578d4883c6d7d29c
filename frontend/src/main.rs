use yew::prelude::*;

mod config;
mod payments;
mod utils;

use payments::add_method_modal::AddMethodModal;
use payments::method_buttons::MethodButtons;

/// Controller for one view of the payment methods page: renders the add
/// modal and owns the listeners on the server-rendered method buttons.
#[function_component(App)]
fn app() -> Html {
    use_effect_with_deps(
        move |_| {
            let buttons = MethodButtons::init();
            move || buttons.dispose()
        },
        (),
    );

    html! {
        <AddMethodModal />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::ROOT_ELEMENT_ID));

    match root {
        Some(root) => {
            log::info!("Mounting payment methods controller");
            yew::Renderer::<App>::with_root(root).render();
        }
        None => log::error!("#{} not found, payment methods controller not started", config::ROOT_ELEMENT_ID),
    }
}
