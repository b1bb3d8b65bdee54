//! Inline required-field validation for the contact form.

use site_glue_shared::{
    validation::{
        error_node_action, ERROR_MESSAGE_CLASS, INVALID_COLOR, OPT_OUT_FORM_CLASS,
        REQUIRED_FIELD_SELECTOR,
    },
    ErrorNodeAction, FieldState, ValidationReport,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::{console, dom, i18n::current::form as t};

pub(crate) fn install(document: &Document) -> Result<(), JsValue> {
    // Only the first form on a page is enhanced.
    let Some(form) = document.query_selector("form")? else {
        return Ok(());
    };
    if form.class_list().contains(OPT_OUT_FORM_CLASS) {
        console::debug("forms: first form opts out of validation");
        return Ok(());
    }

    let document = document.clone();
    dom::listen(&form.clone(), "submit", move |event: Event| {
        console::report("forms: validation failed", on_submit(&document, &form, &event));
    })
}

fn on_submit(document: &Document, form: &Element, event: &Event) -> Result<(), JsValue> {
    let fields = dom::elements(&form.query_selector_all(REQUIRED_FIELD_SELECTOR)?);
    let values: Vec<String> = fields.iter().map(field_value).collect();
    let report = ValidationReport::check(values.iter().map(String::as_str));

    if !report.is_valid() {
        event.prevent_default();
    }

    for (field, state) in fields.iter().zip(report.states()) {
        apply_field_state(document, field, *state)?;
    }

    if let Some(first) = report.first_invalid().and_then(|idx| fields.get(idx)) {
        bring_into_view(first)?;
    }
    Ok(())
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    field
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

fn error_sibling(field: &Element) -> Option<Element> {
    field
        .next_element_sibling()
        .filter(|sibling| sibling.class_list().contains(ERROR_MESSAGE_CLASS))
}

fn apply_field_state(document: &Document, field: &Element, state: FieldState) -> Result<(), JsValue> {
    if let Some(field) = field.dyn_ref::<HtmlElement>() {
        match state {
            FieldState::Missing => field.style().set_property("border-color", INVALID_COLOR)?,
            FieldState::Filled => {
                field.style().remove_property("border-color")?;
            }
        }
    }

    let existing = error_sibling(field);
    match error_node_action(state, existing.is_some()) {
        ErrorNodeAction::Insert => insert_message(document, field),
        ErrorNodeAction::Remove => {
            if let Some(message) = existing {
                message.remove();
            }
            Ok(())
        }
        ErrorNodeAction::Keep | ErrorNodeAction::Nothing => Ok(()),
    }
}

fn insert_message(document: &Document, field: &Element) -> Result<(), JsValue> {
    let message = document.create_element("div")?;
    message.set_class_name(ERROR_MESSAGE_CLASS);
    message.set_text_content(Some(t::REQUIRED_FIELD));
    if let Some(message) = message.dyn_ref::<HtmlElement>() {
        dom::set_styles(
            message,
            &[("color", INVALID_COLOR), ("font-size", "0.85rem"), ("margin-top", "5px")],
        )?;
    }
    // Directly after the field, so `error_sibling` finds it on the next submit.
    field.after_with_node_1(&message)
}

fn bring_into_view(field: &Element) -> Result<(), JsValue> {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    field.scroll_into_view_with_scroll_into_view_options(&options);

    match field.dyn_ref::<HtmlElement>() {
        Some(field) => field.focus(),
        None => Ok(()),
    }
}
