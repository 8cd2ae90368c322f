//! Column editor page hosting the data-type field constraints.
//!
//! The form posts to the server as a plain HTML form; the only scripted
//! behavior on this page is the precision/scale enablement driven by the
//! data-type classification, applied once at load and on every change.

use leptos::prelude::*;

use crate::components::column_type_fields::ColumnTypeFields;
use crate::state::column_form::ColumnFormState;

/// Column editor with the classification-constrained numeric fields.
#[component]
pub fn ColumnsPage() -> impl IntoView {
    let form = expect_context::<RwSignal<ColumnFormState>>();

    view! {
        <div class="columns-page">
            <h1>"Column editor"</h1>

            <form class="columns-page__form" method="post" action="./columns">
                <label class="columns-page__field">
                    <span>"Column name"</span>
                    <input
                        type="text"
                        name="column_name"
                        maxlength="50"
                        prop:value=move || form.get().column_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.column_name = value);
                        }
                    />
                </label>
                <label class="columns-page__field">
                    <span>"Logical name"</span>
                    <input
                        type="text"
                        name="column_name_logical"
                        prop:value=move || form.get().column_name_logical
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.column_name_logical = value);
                        }
                    />
                </label>

                <ColumnTypeFields/>

                <div class="columns-page__flags">
                    <label>
                        <input
                            type="checkbox"
                            name="primary_key_flg"
                            prop:checked=move || form.get().primary_key
                            on:change=move |ev| {
                                let next = event_target_checked(&ev);
                                form.update(|f| f.primary_key = next);
                            }
                        />
                        "Primary key"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            name="not_null_flg"
                            prop:checked=move || form.get().not_null
                            on:change=move |ev| {
                                let next = event_target_checked(&ev);
                                form.update(|f| f.not_null = next);
                            }
                        />
                        "Not null"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            name="unique_flg"
                            prop:checked=move || form.get().unique
                            on:change=move |ev| {
                                let next = event_target_checked(&ev);
                                form.update(|f| f.unique = next);
                            }
                        />
                        "Unique"
                    </label>
                </div>

                <label class="columns-page__field">
                    <span>"Default value"</span>
                    <input
                        type="text"
                        name="default_value"
                        prop:value=move || form.get().default_value
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.default_value = value);
                        }
                    />
                </label>
                <label class="columns-page__field">
                    <span>"Remark"</span>
                    <input
                        type="text"
                        name="remark"
                        prop:value=move || form.get().remark
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.remark = value);
                        }
                    />
                </label>

                <button class="columns-page__submit" type="submit">"Save column"</button>
            </form>
        </div>
    }
}
