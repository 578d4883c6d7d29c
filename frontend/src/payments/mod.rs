pub mod actions;
pub mod add_method_modal;
pub mod fields;
pub mod method_buttons;
pub mod payload;
pub mod payment_models;
