//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{codegen::CodegenPage, columns::ColumnsPage};
use crate::state::{column_form::ColumnFormState, selection::SelectionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let selection = RwSignal::new(SelectionState::default());
    let column_form = RwSignal::new(ColumnFormState::default());

    provide_context(selection);
    provide_context(column_form);

    view! {
        <Stylesheet id="leptos" href="/pkg/goat-cg-client.css"/>
        <Title text="goat-cg"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CodegenPage/>
                <Route path=StaticSegment("columns") view=ColumnsPage/>
            </Routes>
        </Router>
    }
}
