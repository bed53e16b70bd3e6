use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::CONTENT;

use super::theme::use_theme;

/// Section anchors, in page order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Education", "#education"),
    ("Achievements", "#achievements"),
    ("Gallery", "#gallery"),
    ("Contact", "#contact"),
];

const SCROLLED_PX: f64 = 50.0;

#[component]
pub fn Navigation() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_PX);
    let menu_open = RwSignal::new(false);

    let link_class = "text-gray-700 dark:text-gray-300 hover:text-primary-500 dark:hover:text-primary-400 px-3 py-2 rounded-md text-sm font-medium transition-colors duration-200";
    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|(name, href)| {
                view! {
                    <a href=*href class=link_class on:click=move |_| menu_open.set(false)>
                        {*name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if is_scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 glass-effect shadow-lg py-2"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <a href="#home" class="text-2xl font-bold text-gradient">
                        {CONTENT.site.owner.as_str()}
                    </a>
                    <div class="hidden md:flex ml-10 items-baseline space-x-4">{links}</div>
                    <div class="flex items-center space-x-4">
                        <button
                            on:click=move |_| theme.toggle()
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200"
                            aria-label="Toggle theme"
                        >
                            <i class=move || {
                                if theme.is_dark() {
                                    "fas fa-sun text-yellow-500"
                                } else {
                                    "fas fa-moon text-gray-600"
                                }
                            }></i>
                        </button>
                        <button
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                            class="md:hidden p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300"
                            aria-label="Toggle menu"
                        >
                            <i class=move || {
                                if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }
                            }></i>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 glass-effect rounded-lg p-4">
                        <div class="flex flex-col space-y-2">{links}</div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
