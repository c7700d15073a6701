//! Main application component.

use bfhl_form::{FilterTag, FormConfig, FormState};
use gloo::console;
use web_sys::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::post_submission;
use crate::components::{FilePicker, FilterSelect, FilteredResponse, JsonInput};

/// Main application component.
///
/// The form state lives in a shared cell so the async submit can write its
/// result back after the request resolves.
#[function_component(App)]
pub fn app() -> Html {
    let form = use_mut_ref(FormState::<File>::new);
    let config = use_memo((), |_| FormConfig::default());
    let trigger = use_force_update();

    let on_input_change = {
        let form = form.clone();
        let trigger = trigger.clone();
        Callback::from(move |text: String| {
            form.borrow_mut().on_input_change(text);
            trigger.force_update();
        })
    };

    let on_file_change = {
        let form = form.clone();
        let trigger = trigger.clone();
        Callback::from(move |files: Vec<File>| {
            form.borrow_mut().on_file_change(files);
            trigger.force_update();
        })
    };

    let on_filter_change = {
        let form = form.clone();
        let trigger = trigger.clone();
        Callback::from(move |tags: Vec<FilterTag>| {
            form.borrow_mut().on_filter_change(tags);
            trigger.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let trigger = trigger.clone();
        let endpoint = config.endpoint.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pending = form.borrow_mut().begin_submit();
            trigger.force_update();

            let Some(pending) = pending else {
                console::warn!("rejected form input: not valid JSON");
                return;
            };

            let form = form.clone();
            let trigger = trigger.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let result = post_submission(&endpoint, &pending.submission).await;
                if let Err(e) = &result {
                    console::error!(format!("submission {} failed: {e}", pending.ticket));
                }
                if !form.borrow_mut().finish_submit(pending.ticket, result) {
                    console::log!(format!("dropped result of superseded submission {}", pending.ticket));
                }
                trigger.force_update();
            });
        })
    };

    let state = form.borrow();
    let selected: Vec<FilterTag> = state.selection().iter().collect();

    html! {
        <div class="input-form-container">
            <form onsubmit={on_submit}>
                <JsonInput
                    value={state.json_input().to_string()}
                    on_change={on_input_change}
                />

                <FilePicker
                    accept={config.accept}
                    on_change={on_file_change}
                />

                <button class="submit-button" type="submit">{ "Submit" }</button>

                if let Some(error) = state.error() {
                    <p class="error-text">{ error }</p>
                }
            </form>

            if state.response().is_some() {
                <FilterSelect
                    selected={selected}
                    on_change={on_filter_change}
                />
            }

            <FilteredResponse view={state.filtered_view()} />
        </div>
    }
}
