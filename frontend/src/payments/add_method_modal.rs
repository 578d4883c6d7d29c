use chrono::Datelike;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{js_sys, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement, Node};
use yew::prelude::*;

use crate::config;
use crate::payments::actions::{self, BrowserApi, BrowserPage};
use crate::payments::fields::{self, FieldDescriptor, FieldKind};
use crate::payments::method_buttons::ClickBindings;
use crate::payments::payload::build_save_payload;
use crate::payments::payment_models::PaymentMethodType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Visible,
}

impl ModalState {
    fn display(&self) -> &'static str {
        match self {
            ModalState::Hidden => "display: none",
            ModalState::Visible => "display: block",
        }
    }
}

/// A click closes the modal only when it lands on the backdrop itself, not
/// on anything inside the dialog.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(t), Some(b)) if t == b)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Show,
    /// Close or cancel button, or a successful save
    Hide,
    /// Any click inside the modal element; `on_backdrop` is the target check
    Click { on_backdrop: bool },
    SelectType(String),
}

/// What the modal shows: its visibility and the raw type selector value.
/// The dynamic fields are derived from `method_type`, so clearing it empties
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalForm {
    pub state: ModalState,
    pub method_type: String,
}

impl Default for ModalForm {
    fn default() -> Self {
        Self {
            state: ModalState::Hidden,
            method_type: String::new(),
        }
    }
}

impl ModalForm {
    pub fn apply(&self, action: ModalAction) -> Self {
        match action {
            ModalAction::Show => Self {
                state: ModalState::Visible,
                ..self.clone()
            },
            ModalAction::Hide => Self::default(),
            ModalAction::Click { on_backdrop: true } if self.state == ModalState::Visible => Self::default(),
            ModalAction::Click { .. } => self.clone(),
            ModalAction::SelectType(method_type) => Self {
                method_type,
                ..self.clone()
            },
        }
    }

    /// `true` when the transition to `next` has to reset the DOM form too
    pub fn resets_form(&self, next: &ModalForm) -> bool {
        self.state == ModalState::Visible && next.state == ModalState::Hidden
    }

    pub fn selected(&self) -> Option<PaymentMethodType> {
        PaymentMethodType::from_selector(&self.method_type)
    }
}

/// Named `(name, value)` pairs of every field in the form. File inputs are
/// skipped.
fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to read form data: {:?}", e);
            return Vec::new();
        }
    };
    let iter = match js_sys::try_iter(&data) {
        Ok(Some(iter)) => iter,
        _ => return Vec::new(),
    };
    iter.filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

fn render_field(field: &FieldDescriptor) -> Html {
    let control = match &field.kind {
        FieldKind::Text { placeholder, max_length } => html! {
            <input
                type="text"
                name={field.name}
                class="form-control"
                placeholder={*placeholder}
                maxlength={max_length.map(|m| m.to_string())}
                required={field.required}
            />
        },
        FieldKind::Select { options } => html! {
            <select name={field.name} class="form-control" required={field.required}>
                {
                    options.iter().map(|option| html! {
                        <option value={option.value.clone()}>{&option.label}</option>
                    }).collect::<Html>()
                }
            </select>
        },
    };

    html! {
        <div class="form-group">
            <label>{field.label}</label>
            {control}
        </div>
    }
}

#[function_component(AddMethodModal)]
pub fn add_method_modal() -> Html {
    let modal = use_state(ModalForm::default);
    let modal_ref = use_node_ref();
    let form_ref = use_node_ref();
    let make_default_ref = use_node_ref();

    // Every transition goes through ModalForm::apply. Leaving Visible also
    // clears the checkbox and any typed values via form.reset().
    let dispatch = {
        let modal = modal.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |action: ModalAction| {
            let next = modal.apply(action);
            if modal.resets_form(&next) {
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
            }
            modal.set(next);
        })
    };
    let hide = dispatch.reform(|_: ()| ModalAction::Hide);

    // The "add payment method" trigger lives in the server-rendered page
    {
        let show = dispatch.reform(|_: ()| ModalAction::Show);
        use_effect_with_deps(
            move |_| {
                let mut bindings = ClickBindings::new();
                let bound = bindings.bind_all(config::ADD_METHOD_BUTTON_SELECTOR, move |_| show.emit(()));
                if bound == 0 {
                    log::warn!("No {} trigger found on page", config::ADD_METHOD_BUTTON_SELECTOR);
                }
                move || bindings.dispose()
            },
            (),
        );
    }

    // Yew delegates listeners to the mount root, so currentTarget is not the
    // modal; compare the click target with the modal node instead.
    let on_backdrop_click = {
        let modal_ref = modal_ref.clone();
        dispatch.reform(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let backdrop = modal_ref.get();
            ModalAction::Click {
                on_backdrop: is_backdrop_click(target.as_ref(), backdrop.as_ref()),
            }
        })
    };

    let on_type_change = dispatch.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        ModalAction::SelectType(select.value())
    });

    let onsubmit = {
        let modal = modal.clone();
        let form_ref = form_ref.clone();
        let make_default_ref = make_default_ref.clone();
        let hide = hide.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Add payment method form is not mounted");
                return;
            };
            let is_default = make_default_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.checked())
                .unwrap_or(false);
            let payload = build_save_payload(&modal.method_type, is_default, form_entries(&form));
            let hide = hide.clone();
            spawn_local(async move {
                actions::save_method(&BrowserApi, &BrowserPage, payload, move || hide.emit(())).await;
            });
        })
    };

    let selected = modal.selected();
    let dynamic_fields = fields::field_set(selected, chrono::Local::now().year());

    html! {
        <div
            id={config::MODAL_ID}
            ref={modal_ref}
            class="modal"
            style={modal.state.display()}
            onclick={on_backdrop_click}
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{"Add Payment Method"}</h3>
                    <button type="button" class="close-btn" onclick={hide.reform(|_: MouseEvent| ())}>
                        {"×"}
                    </button>
                </div>
                <form id={config::FORM_ID} ref={form_ref} {onsubmit}>
                    <div class="form-group">
                        <label>{"Payment Type"}</label>
                        <select id={config::METHOD_TYPE_ID} class="form-control" required=true onchange={on_type_change}>
                            <option value="" selected={selected.is_none()}>{"Select payment type"}</option>
                            {
                                PaymentMethodType::ALL.iter().map(|t| html! {
                                    <option value={t.as_str()} selected={selected == Some(*t)}>{t.label()}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    // Keyed on the type so a switch rebuilds the inputs instead of reusing them
                    <div id={config::DYNAMIC_FIELDS_ID}>
                        <div key={modal.method_type.clone()}>
                            { dynamic_fields.iter().map(render_field).collect::<Html>() }
                        </div>
                    </div>
                    <div class="form-group checkbox">
                        <label>
                            <input type="checkbox" id={config::MAKE_DEFAULT_ID} ref={make_default_ref} />
                            {" Set as primary payment method"}
                        </label>
                    </div>
                    <div class="modal-buttons">
                        <button type="button" class="btn secondary" onclick={hide.reform(|_: MouseEvent| ())}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn primary">{"Add Method"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_click_on_the_backdrop_itself_closes() {
        let backdrop = 1;
        let dialog_input = 2;
        assert!(is_backdrop_click(Some(&backdrop), Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&dialog_input), Some(&backdrop)));
        assert!(!is_backdrop_click(None, Some(&backdrop)));
        assert!(!is_backdrop_click::<i32>(None, None));
    }

    fn visible_with(method_type: &str) -> ModalForm {
        ModalForm::default()
            .apply(ModalAction::Show)
            .apply(ModalAction::SelectType(method_type.to_string()))
    }

    #[test]
    fn show_makes_the_modal_visible_with_a_blank_form() {
        let modal = ModalForm::default().apply(ModalAction::Show);
        assert_eq!(modal.state, ModalState::Visible);
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn hide_clears_the_selected_type_and_its_fields() {
        let before = visible_with("CREDIT_CARD");
        assert_eq!(fields::field_set(before.selected(), 2026).len(), 4);

        let after = before.apply(ModalAction::Hide);

        assert_eq!(after, ModalForm::default());
        assert!(before.resets_form(&after));
        assert!(fields::field_set(after.selected(), 2026).is_empty());
    }

    #[test]
    fn backdrop_click_while_visible_hides_and_resets() {
        let before = visible_with("UPI");
        let after = before.apply(ModalAction::Click { on_backdrop: true });
        assert_eq!(after.state, ModalState::Hidden);
        assert!(after.method_type.is_empty());
        assert!(before.resets_form(&after));
    }

    #[test]
    fn click_inside_the_dialog_keeps_it_open() {
        let before = visible_with("WALLET");
        let after = before.apply(ModalAction::Click { on_backdrop: false });
        assert_eq!(after, before);
        assert!(!before.resets_form(&after));
    }

    #[test]
    fn clicks_while_hidden_change_nothing() {
        let hidden = ModalForm::default();
        assert_eq!(hidden.apply(ModalAction::Click { on_backdrop: true }), hidden);
        assert!(!hidden.resets_form(&hidden.apply(ModalAction::Hide)));
    }

    #[test]
    fn selecting_another_type_replaces_the_field_set() {
        let modal = visible_with("CREDIT_CARD").apply(ModalAction::SelectType("UPI".into()));
        let names: Vec<_> = fields::field_set(modal.selected(), 2026).iter().map(|f| f.name).collect();
        assert_eq!(names, ["upi_id"]);
        assert_eq!(modal.state, ModalState::Visible);
    }

    #[test]
    fn hidden_modal_is_not_displayed() {
        assert_eq!(ModalState::Hidden.display(), "display: none");
        assert_eq!(ModalState::Visible.display(), "display: block");
    }
}
