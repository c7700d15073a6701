//! UI Components for the submission form.

use bfhl_form::{FilterTag, FilteredView, picker_options};
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

/// Example request shown in the empty textarea.
const JSON_PLACEHOLDER: &str = r#"{"data": ["A", "C", "1", "z"]}"#;

/// Text area for the raw JSON request.
#[derive(Properties, PartialEq)]
pub struct JsonInputProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(JsonInput)]
pub fn json_input(props: &JsonInputProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <>
            <label>{ "API Input" }</label>
            <textarea
                class="json-input"
                value={props.value.clone()}
                oninput={on_input}
                spellcheck="false"
                rows="4"
                placeholder={JSON_PLACEHOLDER}
            />
        </>
    }
}

/// File picker. The accept filter only guides the browser dialog.
#[derive(Properties, PartialEq)]
pub struct FilePickerProps {
    pub accept: AttrValue,
    pub on_change: Callback<Vec<File>>,
}

#[function_component(FilePicker)]
pub fn file_picker(props: &FilePickerProps) -> Html {
    let on_file_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files: Vec<File> = input
                .files()
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            on_change.emit(files);
        })
    };

    html! {
        <>
            <label>{ "Upload File" }</label>
            <input type="file" accept={props.accept.clone()} onchange={on_file_change} />
        </>
    }
}

/// Multi-select over the fixed filter options.
#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub selected: Vec<FilterTag>,
    pub on_change: Callback<Vec<FilterTag>>,
}

#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let on_select_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let options = target.selected_options();
            let tags: Vec<FilterTag> = (0..options.length())
                .filter_map(|i| options.item(i))
                .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
                .filter_map(|opt| opt.value().parse::<FilterTag>().ok())
                .collect();
            on_change.emit(tags);
        })
    };

    html! {
        <div class="filter-select">
            <label>{ "Multi Filter" }</label>
            <select multiple={true} onchange={on_select_change}>
                { for picker_options().map(|opt| {
                    html! {
                        <option value={opt.value} selected={props.selected.contains(&opt.tag)}>
                            { opt.label }
                        </option>
                    }
                })}
            </select>
        </div>
    }
}

/// Filtered view of the stored response. Renders nothing without a response.
#[derive(Properties, PartialEq)]
pub struct FilteredResponseProps {
    pub view: Option<FilteredView>,
}

#[function_component(FilteredResponse)]
pub fn filtered_response(props: &FilteredResponseProps) -> Html {
    match &props.view {
        Some(view) => html! {
            <div class="filtered-response">
                <h3>{ "Filtered Response" }</h3>
                <pre>{ view.to_string() }</pre>
            </div>
        },
        None => html! {},
    }
}
