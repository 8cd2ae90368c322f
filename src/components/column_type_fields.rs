//! Data-type selector with its dependent precision/scale inputs.
//!
//! DESIGN
//! ======
//! Enablement of the numeric pair is derived state in `ColumnFormState`;
//! this component only forwards change events into the state machine and
//! binds the resulting policy back onto the inputs.

use leptos::prelude::*;

use crate::state::column_form::{ColumnFormState, data_type_options};

/// Classification select plus the precision and scale number inputs.
#[component]
pub fn ColumnTypeFields() -> impl IntoView {
    let form = expect_context::<RwSignal<ColumnFormState>>();

    let commit_precision = move |raw: String| {
        let value = raw.trim().parse::<i64>().unwrap_or(0);
        form.update(|f| f.precision = value);
    };
    let commit_scale = move |raw: String| {
        let value = raw.trim().parse::<i64>().unwrap_or(0);
        form.update(|f| f.scale = value);
    };

    view! {
        <div class="column-type-fields">
            <label class="column-type-fields__field">
                <span>"Data type"</span>
                <select
                    name="data_type_cls"
                    prop:value=move || form.get().data_type_cls
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        form.update(|f| f.apply_data_type_cls(&code));
                    }
                >
                    {data_type_options()
                        .into_iter()
                        .map(|(code, label)| view! { <option value=code>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="column-type-fields__field">
                <span>"Precision"</span>
                <input
                    type="number"
                    name="precision"
                    min="0"
                    prop:value=move || form.get().precision.to_string()
                    disabled=move || !form.get().precision_enabled
                    on:change=move |ev| commit_precision(event_target_value(&ev))
                />
            </label>

            <label class="column-type-fields__field">
                <span>"Scale"</span>
                <input
                    type="number"
                    name="scale"
                    min="0"
                    prop:value=move || form.get().scale.to_string()
                    disabled=move || !form.get().scale_enabled
                    on:change=move |ev| commit_scale(event_target_value(&ev))
                />
            </label>
        </div>
    }
}
