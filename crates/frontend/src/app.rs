use crate::layout::inspector::PanelInspector;
use crate::shared::theme::Theme;
use contracts::shared::inspect::{InspectContext, PanelRef, QueryStats};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Inspector views read their style tokens from context.
    provide_context(Theme::default());

    let panel = PanelRef::new("panel-2", "Requests per second");
    let stats = RwSignal::new(QueryStats::from_timing(Some(0), Some(87), 3, 2));
    let context = InspectContext {
        has_data: true,
        has_metadata: false,
        has_error: false,
        has_queries: true,
    };

    view! {
        <PanelInspector panel=panel stats=stats context=context />
    }
}
