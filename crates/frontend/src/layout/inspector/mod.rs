//! Panel inspector drawer: owns the state the header only reads.

use crate::shared::components::inspect_header::InspectHeader;
use contracts::enums::inspect_tab::InspectTab;
use contracts::shared::inspect::{
    build_tabs, InspectContext, PanelRef, QueryStats, TabDescriptor,
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use web_sys::window;

/// Inspector params carried in the URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspect: Option<String>,
    #[serde(
        rename = "inspectTab",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inspect_tab: Option<String>,
}

impl InspectQuery {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }
}

/// Tab requested in the URL if it is offered, else the first offered tab.
pub fn initial_tab(query: &InspectQuery, tabs: &[TabDescriptor]) -> InspectTab {
    let requested = query
        .inspect_tab
        .as_deref()
        .and_then(|code| match code.parse::<InspectTab>() {
            Ok(tab) => Some(tab),
            Err(e) => {
                log::warn!("ignoring inspectTab from url: {}", e);
                None
            }
        })
        .filter(|tab| tabs.iter().any(|t| t.is_active(*tab)));

    requested
        .or_else(|| tabs.first().map(|t| t.value))
        .unwrap_or(InspectTab::Data)
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Apply `query` to an existing search string, keeping every other param.
/// `None` fields remove their param. Returns the new search with its leading
/// `?`, or an empty string when no params remain.
pub fn merge_inspect_params(search: &str, query: &InspectQuery) -> String {
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

    for (key, value) in [("inspect", &query.inspect), ("inspectTab", &query.inspect_tab)] {
        match value {
            Some(v) => {
                params.insert(key.to_string(), v.clone());
            }
            None => {
                params.remove(key);
            }
        }
    }

    match serde_qs::to_string(&params) {
        Ok(s) if s.is_empty() => String::new(),
        Ok(s) => format!("?{}", s),
        Err(e) => {
            log::warn!("failed to encode inspect query: {}", e);
            search.to_string()
        }
    }
}

fn replace_search(query: &InspectQuery) {
    let current = current_search();
    let new_search = merge_inspect_params(&current, query);
    if current == new_search {
        return;
    }

    if let Some(w) = window() {
        // an empty search must still replace the url, so fall back to the path
        let new_url = if new_search.is_empty() {
            w.location().pathname().unwrap_or_else(|_| "/".to_string())
        } else {
            new_search
        };
        if let Ok(history) = w.history() {
            if history
                .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
                .is_err()
            {
                log::warn!("failed to update url with '{}'", new_url);
            }
        }
    }
}

#[component]
pub fn PanelInspector(
    panel: PanelRef,
    #[prop(into)] stats: Signal<QueryStats>,
    context: InspectContext,
) -> impl IntoView {
    let tabs = build_tabs(&context);
    let query = InspectQuery::parse(&current_search());

    let active_tab = RwSignal::new(initial_tab(&query, &tabs));
    let is_expanded = RwSignal::new(false);
    let open = RwSignal::new(true);
    let panel_id = panel.id.clone();

    Effect::new(move |_| {
        if open.get() {
            replace_search(&InspectQuery {
                inspect: Some(panel_id.clone()),
                inspect_tab: Some(active_tab.get().code().to_string()),
            });
        } else {
            replace_search(&InspectQuery::default());
        }
    });

    let on_select_tab = Callback::new(move |tab: TabDescriptor| active_tab.set(tab.value));
    let on_toggle_expand = Callback::new(move |_: ()| is_expanded.update(|v| *v = !*v));
    let on_close = Callback::new(move |_: ()| open.set(false));

    let drawer_class = move || {
        if is_expanded.get() {
            "inspect-drawer inspect-drawer--expanded"
        } else {
            "inspect-drawer"
        }
    };

    let tabs = Signal::stored(tabs);
    let panel = Signal::stored(panel);

    view! {
        <Show when=move || open.get()>
            <div class=drawer_class>
                <InspectHeader
                    active_tab=active_tab
                    tabs=tabs
                    stats=stats
                    panel=panel
                    is_expanded=is_expanded
                    on_select_tab=on_select_tab
                    on_close=on_close
                    on_toggle_expand=on_toggle_expand
                />
                <div class="inspect-drawer__content">
                    {move || {
                        let tab = active_tab.get();
                        view! {
                            <div class=format!("inspect-tab inspect-tab--{}", tab.code())>
                                {tab.display_name()}
                            </div>
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
