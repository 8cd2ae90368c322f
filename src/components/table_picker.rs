//! Checkbox list over the project's tables with bulk select/clear actions.
//!
//! DESIGN
//! ======
//! The picker only mutates `SelectionState`; dispatching the selection to
//! the generation endpoints is the codegen page's concern. Bulk actions
//! and row toggles read and write live state, nothing is cached.

use leptos::prelude::*;

use crate::state::selection::SelectionState;

/// Table checkbox group with "All" / "Clear" bulk actions.
#[component]
pub fn TablePicker() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    let rows = move || selection.get().rows;

    view! {
        <div class="table-picker">
            <div class="table-picker__actions">
                <button
                    class="table-picker__bulk-btn"
                    on:click=move |_| selection.update(SelectionState::select_all)
                >
                    "All"
                </button>
                <button
                    class="table-picker__bulk-btn"
                    on:click=move |_| selection.update(SelectionState::clear_all)
                >
                    "Clear"
                </button>
            </div>

            <Show
                when=move || !selection.get().loading
                fallback=move || view! { <div class="table-picker__empty">"Loading tables..."</div> }
            >
                <Show
                    when=move || !rows().is_empty()
                    fallback=move || view! { <div class="table-picker__empty">"No tables in this project."</div> }
                >
                    <ul class="table-picker__list">
                        {move || {
                            rows()
                                .into_iter()
                                .map(|row| {
                                    let checked = row.checked;
                                    let id = row.table_id.clone();
                                    view! {
                                        <li class="table-picker__row">
                                            <label>
                                                <input
                                                    type="checkbox"
                                                    name="table_id"
                                                    value=row.table_id.clone()
                                                    prop:checked=checked
                                                    on:change=move |ev| {
                                                        let next = event_target_checked(&ev);
                                                        selection.update(|s| s.toggle(&id, next));
                                                    }
                                                />
                                                <span class="table-picker__name">{row.table_name}</span>
                                            </label>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
