use leptos::prelude::*;

use crate::content::CONTENT;
use crate::render::{Media, PROFILE_GLYPH};

use super::components::{MediaFrame, SectionHeading};

const HIGHLIGHT_POSITIONS: [&str; 2] = [
    "absolute -top-4 -right-4 bg-white dark:bg-gray-900 p-4 rounded-xl shadow-lg animate-float",
    "absolute -bottom-4 -left-4 bg-white dark:bg-gray-900 p-4 rounded-xl shadow-lg animate-float [animation-delay:2s]",
];

#[component]
pub fn About() -> impl IntoView {
    let site = &CONTENT.site;
    let about = &site.about;
    let image = Media::from_source(Some(about.image.as_str()), &site.owner, PROFILE_GLYPH);

    view! {
        <section id="about" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="About Me"
                    subtitle="Get to know more about my journey and passion"
                />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="relative">
                        <div class="w-full h-96 bg-gradient-to-r from-primary-500 to-secondary-500 rounded-2xl p-1">
                            <div class="w-full h-full rounded-2xl overflow-hidden bg-gray-200 dark:bg-gray-700">
                                <MediaFrame
                                    media=image
                                    glyph=PROFILE_GLYPH
                                    class="w-full h-full rounded-2xl object-cover"
                                />
                            </div>
                        </div>
                        {about
                            .highlights
                            .iter()
                            .zip(HIGHLIGHT_POSITIONS)
                            .map(|(highlight, position)| {
                                view! {
                                    <div class=position>
                                        <div class="text-primary-500 text-2xl mb-2">
                                            <i class=highlight.icon.as_str()></i>
                                        </div>
                                        <div class="text-sm font-semibold">
                                            {highlight.value.as_str()}
                                        </div>
                                        <div class="text-xs text-gray-600 dark:text-gray-400">
                                            {highlight.label.as_str()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div>
                        <h3 class="text-3xl font-bold mb-6 text-gray-900 dark:text-white">"About Me"</h3>
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="text-lg text-gray-600 dark:text-gray-400 mb-6 leading-relaxed">
                                        {p.as_str()}
                                    </p>
                                }
                            })
                            .collect_view()}

                        <div class="grid grid-cols-2 gap-6 mb-8">
                            {about
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center p-4 bg-white dark:bg-gray-900 rounded-xl shadow-lg">
                                            <div class="text-3xl font-bold text-primary-500 mb-2">
                                                {stat.value.as_str()}
                                            </div>
                                            <div class="text-sm text-gray-600 dark:text-gray-400">
                                                {stat.label.as_str()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="bg-white dark:bg-gray-900 p-6 rounded-xl shadow-lg">
                            <h4 class="text-xl font-semibold mb-3 text-gray-900 dark:text-white">
                                <i class="fas fa-graduation-cap mr-2 text-primary-500"></i>
                                "Current Education"
                            </h4>
                            <div class="text-gray-600 dark:text-gray-400">
                                <div class="font-semibold">
                                    {about.current_education.degree.as_str()}
                                </div>
                                <div>{about.current_education.institution.as_str()}</div>
                                <div class="text-sm">{about.current_education.duration.as_str()}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
