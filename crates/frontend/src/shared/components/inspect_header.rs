//! Header bar of the panel inspector drawer.
//!
//! Stateless: the parent owns the active tab, expansion flag and panel data,
//! and receives user intent through the three callbacks.

use crate::shared::icons::icon;
use crate::shared::theme::Theme;
use contracts::enums::inspect_tab::InspectTab;
use contracts::shared::inspect::{PanelRef, QueryStats, TabDescriptor};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Inline styles for each block of the header, derived from theme tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectHeaderStyles {
    pub header: String,
    pub actions: String,
    pub title_wrapper: String,
    pub title: String,
    pub stats: String,
    pub tabs: String,
}

pub fn inspect_header_styles(theme: &Theme) -> InspectHeaderStyles {
    InspectHeaderStyles {
        header: format!(
            "background-color: {}; border-bottom: 1px solid {}; position: relative; padding: {} {} 0 {};",
            theme.background, theme.border, theme.space_sm, theme.space_sm, theme.space_lg
        ),
        actions: format!(
            "position: absolute; display: flex; align-items: baseline; justify-content: space-between; right: {}; top: {};",
            theme.space_sm, theme.space_sm
        ),
        title_wrapper: format!("margin-bottom: {};", theme.space_lg),
        title: format!("font-size: {}; margin: 0;", theme.font_size_h3),
        stats: format!(
            "font-size: {}; color: {}; margin-top: {};",
            theme.font_size_sm, theme.text_secondary, theme.space_xs
        ),
        tabs: format!("display: flex; gap: {};", theme.space_xs),
    }
}

/// Glyph for the expand toggle: collapsed drawers offer to grow left,
/// expanded ones offer to shrink back right.
pub fn expand_icon_name(is_expanded: bool) -> &'static str {
    if is_expanded {
        "chevrons-right"
    } else {
        "chevrons-left"
    }
}

pub fn tab_appearance(tab: &TabDescriptor, active: InspectTab) -> ButtonAppearance {
    if tab.is_active(active) {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Subtle
    }
}

pub fn tab_class(tab: &TabDescriptor, active: InspectTab) -> &'static str {
    if tab.is_active(active) {
        "inspect-header__tab active"
    } else {
        "inspect-header__tab"
    }
}

/// Callbacks the header forwards user interaction to.
#[derive(Clone, Copy)]
pub struct HeaderEvents {
    pub on_select_tab: Callback<TabDescriptor>,
    pub on_close: Callback<()>,
    pub on_toggle_expand: Callback<()>,
}

impl HeaderEvents {
    pub fn select_tab(&self, tab: TabDescriptor) {
        log::debug!("inspect header: select tab '{}'", tab.value);
        self.on_select_tab.run(tab);
    }

    pub fn close(&self) {
        log::debug!("inspect header: close");
        self.on_close.run(());
    }

    pub fn toggle_expand(&self) {
        log::debug!("inspect header: toggle expand");
        self.on_toggle_expand.run(());
    }
}

pub fn tab_click_handler<E: 'static>(
    events: HeaderEvents,
    tab: TabDescriptor,
) -> impl Fn(E) + Send + Sync + 'static {
    move |_| events.select_tab(tab.clone())
}

pub fn close_click_handler<E: 'static>(
    events: HeaderEvents,
) -> impl Fn(E) + Send + Sync + 'static {
    move |_| events.close()
}

pub fn toggle_click_handler<E: 'static>(
    events: HeaderEvents,
) -> impl Fn(E) + Send + Sync + 'static {
    move |_| events.toggle_expand()
}

#[component]
pub fn InspectHeader(
    /// Tab to highlight; may match none of `tabs`
    #[prop(into)]
    active_tab: Signal<InspectTab>,
    /// Tabs in display order
    #[prop(into)]
    tabs: Signal<Vec<TabDescriptor>>,
    /// Summary shown under the title
    #[prop(into)]
    stats: Signal<QueryStats>,
    /// Inspected panel, only its title is shown
    #[prop(into)]
    panel: Signal<PanelRef>,
    /// Picks the expand/collapse glyph
    #[prop(into)]
    is_expanded: Signal<bool>,
    /// Called with the clicked tab's descriptor
    on_select_tab: Callback<TabDescriptor>,
    /// Called when the close icon is clicked
    on_close: Callback<()>,
    /// Called when the expand icon is clicked
    on_toggle_expand: Callback<()>,
    /// Falls back to the context theme
    #[prop(optional)]
    theme: Option<Theme>,
) -> impl IntoView {
    let styles = inspect_header_styles(&theme.unwrap_or_else(Theme::current));
    let events = HeaderEvents {
        on_select_tab,
        on_close,
        on_toggle_expand,
    };

    let tab_buttons = move || {
        tabs.get()
            .into_iter()
            .map(|tab| {
                let appearance_tab = tab.clone();
                let class_tab = tab.clone();
                let label = tab.label.clone();
                view! {
                    <span class=move || tab_class(&class_tab, active_tab.get())>
                        <Button
                            appearance=move || tab_appearance(&appearance_tab, active_tab.get())
                            on_click={tab_click_handler::<MouseEvent>(events, tab)}
                        >
                            {label}
                        </Button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="inspect-header" style=styles.header>
            <div class="inspect-header__actions" style=styles.actions>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click={toggle_click_handler::<MouseEvent>(events)}
                >
                    {move || icon(expand_icon_name(is_expanded.get()))}
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click={close_click_handler::<MouseEvent>(events)}
                >
                    {icon("close")}
                </Button>
            </div>
            <div class="inspect-header__title-wrapper" style=styles.title_wrapper>
                <h3 class="inspect-header__title" style=styles.title>
                    {move || panel.with(|p| p.title.clone())}
                </h3>
                <div class="inspect-header__stats" style=styles.stats>
                    {move || stats.get().summary()}
                </div>
            </div>
            <div class="inspect-header__tabs" style=styles.tabs>
                {tab_buttons}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_styles_use_theme_tokens() {
        let theme = Theme {
            background: "#222".into(),
            space_lg: "24px".into(),
            font_size_sm: "12px".into(),
            ..Theme::default()
        };
        let styles = inspect_header_styles(&theme);
        assert!(styles.header.contains("background-color: #222;"));
        assert!(styles.title_wrapper.contains("24px"));
        assert!(styles.stats.contains("font-size: 12px;"));
    }

    #[test]
    fn test_expand_icon_follows_state() {
        assert_eq!(expand_icon_name(false), "chevrons-left");
        assert_eq!(expand_icon_name(true), "chevrons-right");
    }

    #[test]
    fn test_header_padding() {
        let theme = Theme {
            space_sm: "8px".into(),
            space_lg: "24px".into(),
            ..Theme::default()
        };
        assert!(inspect_header_styles(&theme)
            .header
            .contains("padding: 8px 8px 0 24px;"));
    }

    #[test]
    fn test_active_class_only_on_matching_tab() {
        let data: TabDescriptor = InspectTab::Data.into();
        let json: TabDescriptor = InspectTab::Json.into();
        assert_eq!(tab_class(&json, InspectTab::Json), "inspect-header__tab active");
        assert_eq!(tab_class(&data, InspectTab::Json), "inspect-header__tab");
        assert_eq!(tab_class(&data, InspectTab::Error), "inspect-header__tab");
        assert_eq!(tab_class(&json, InspectTab::Error), "inspect-header__tab");
    }

    #[test]
    fn test_only_matching_tab_is_highlighted() {
        let tabs: Vec<TabDescriptor> = vec![
            InspectTab::Data.into(),
            InspectTab::Json.into(),
            InspectTab::Query.into(),
        ];
        let highlighted: Vec<bool> = tabs
            .iter()
            .map(|t| matches!(tab_appearance(t, InspectTab::Json), ButtonAppearance::Primary))
            .collect();
        assert_eq!(highlighted, vec![false, true, false]);

        // an active tab missing from the list highlights nothing
        assert!(tabs
            .iter()
            .all(|t| matches!(tab_appearance(t, InspectTab::Error), ButtonAppearance::Subtle)));
    }

    #[derive(Default)]
    struct Recorded {
        selected: Vec<TabDescriptor>,
        closed: usize,
        toggled: usize,
    }

    fn recording_events(rec: Arc<Mutex<Recorded>>) -> HeaderEvents {
        let (r1, r2, r3) = (rec.clone(), rec.clone(), rec);
        HeaderEvents {
            on_select_tab: Callback::new(move |tab| r1.lock().unwrap().selected.push(tab)),
            on_close: Callback::new(move |_| r2.lock().unwrap().closed += 1),
            on_toggle_expand: Callback::new(move |_| r3.lock().unwrap().toggled += 1),
        }
    }

    #[test]
    fn test_tab_click_fires_select_once_with_descriptor() {
        let owner = Owner::new();
        owner.with(|| {
            let rec = Arc::new(Mutex::new(Recorded::default()));
            let events = recording_events(rec.clone());
            let tab = TabDescriptor::new("Raw JSON", InspectTab::Json);
            let other = TabDescriptor::new("Query", InspectTab::Query);
            let _other_click = tab_click_handler::<()>(events, other);

            tab_click_handler::<()>(events, tab.clone())(());

            let rec = rec.lock().unwrap();
            assert_eq!(rec.selected, vec![tab]);
            assert_eq!(rec.closed, 0);
            assert_eq!(rec.toggled, 0);
        });
    }

    #[test]
    fn test_close_click_fires_only_close() {
        let owner = Owner::new();
        owner.with(|| {
            let rec = Arc::new(Mutex::new(Recorded::default()));
            close_click_handler::<()>(recording_events(rec.clone()))(());

            let rec = rec.lock().unwrap();
            assert_eq!(rec.closed, 1);
            assert!(rec.selected.is_empty());
            assert_eq!(rec.toggled, 0);
        });
    }

    #[test]
    fn test_expand_click_fires_only_toggle() {
        let owner = Owner::new();
        owner.with(|| {
            let rec = Arc::new(Mutex::new(Recorded::default()));
            toggle_click_handler::<()>(recording_events(rec.clone()))(());

            let rec = rec.lock().unwrap();
            assert_eq!(rec.toggled, 1);
            assert_eq!(rec.closed, 0);
            assert!(rec.selected.is_empty());
        });
    }
}
