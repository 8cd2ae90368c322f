//! Code-generation page: table selection, target RDBMS, and the two
//! generation actions.
//!
//! ARCHITECTURE
//! ============
//! Each action reads live selection state at click time, posts one
//! generation request, and turns the returned artifact path into a
//! browser download. A per-action busy signal keeps at most one request
//! in flight per action; failures are logged, never surfaced.

use leptos::prelude::*;

use crate::components::table_picker::TablePicker;
use crate::net::types::{GenerateKind, db_type_options};
use crate::state::selection::SelectionState;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::selection::TableRow;
#[cfg(feature = "hydrate")]
use crate::util::download::{download_file_name, trigger_download};

/// Codegen page with the table picker and generation actions.
#[component]
pub fn CodegenPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();

    let db_type = RwSignal::new("sqlite3".to_owned());
    let goat_busy = RwSignal::new(false);
    let ddl_busy = RwSignal::new(false);

    // Load the table inventory once on mount; a failed fetch degrades to
    // an empty list.
    Effect::new(move || {
        selection.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let rows = api::fetch_tables()
                .await
                .unwrap_or_default()
                .into_iter()
                .map(|t| TableRow::new(t.table_id, t.table_name))
                .collect();
            selection.update(|s| s.set_rows(rows));
        });
        #[cfg(not(feature = "hydrate"))]
        selection.update(|s| s.loading = false);
    });

    let dispatch = move |kind: GenerateKind, busy: RwSignal<bool>| {
        if busy.get() {
            return;
        }
        let tableids = selection.get_untracked().checked_ids();
        let dbtype = db_type.get_untracked();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::generate(kind, &dbtype, &tableids).await {
                Ok(path) => trigger_download(&path, &download_file_name(&path)),
                Err(e) => log::error!("{e}"),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, dbtype, tableids);
            busy.set(false);
        }
    };

    view! {
        <div class="codegen-page">
            <h1>"Code generation"</h1>

            <label class="codegen-page__db-type">
                <span>"Database type"</span>
                <select
                    name="db_type"
                    prop:value=move || db_type.get()
                    on:change=move |ev| db_type.set(event_target_value(&ev))
                >
                    {db_type_options()
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <TablePicker/>

            <div class="codegen-page__actions">
                <button
                    class="codegen-page__generate-btn"
                    disabled=move || goat_busy.get()
                    on:click=move |_| dispatch(GenerateKind::Goat, goat_busy)
                >
                    "Generate goat code"
                </button>
                <button
                    class="codegen-page__generate-btn"
                    disabled=move || ddl_busy.get()
                    on:click=move |_| dispatch(GenerateKind::Ddl, ddl_busy)
                >
                    "Generate DDL"
                </button>
            </div>
        </div>
    }
}
