use leptos::prelude::*;

use crate::content::CONTENT;
use crate::site::build_year;

use super::nav::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    let site = &CONTENT.site;
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", site.owner),
        None => format!("© {}. All rights reserved.", site.owner),
    };

    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">
                            <span class="text-gradient">{site.owner.as_str()}</span>
                        </h3>
                        <p class="text-gray-400 mb-4">{site.headline.as_str()}</p>
                        <div class="flex space-x-4">
                            {site
                                .socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url.as_str()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label.as_str()
                                            class="text-gray-400 hover:text-primary-400 transition-colors duration-200"
                                        >
                                            <i class=format!("{} text-xl", social.icon)></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_ITEMS
                                .iter()
                                .map(|(name, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=*href
                                                class="text-gray-400 hover:text-primary-400 transition-colors duration-200"
                                            >
                                                {*name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Contact Info"</h4>
                        <div class="space-y-2 text-gray-400">
                            <p>
                                <i class="fas fa-envelope mr-2"></i>
                                {site.email.as_str()}
                            </p>
                            <p>
                                <i class="fas fa-map-marker-alt mr-2"></i>
                                {site.location.as_str()}
                            </p>
                            {site
                                .footer_facts
                                .iter()
                                .map(|fact| {
                                    view! {
                                        <p>
                                            <i class=format!("{} mr-2", fact.icon)></i>
                                            {fact.text.as_str()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 text-center">
                    <p class="text-gray-400">{copyright}" Built with Rust, Leptos & Tailwind CSS."</p>
                </div>
            </div>
        </footer>
    }
}
