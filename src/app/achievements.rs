use leptos::prelude::*;

use crate::content::{AchievementCategory, CONTENT};
use crate::filter::{CategoryFilter, Selection};
use crate::render::Present;

use super::components::{CardView, FilterBar, SectionHeading};

#[component]
pub fn Achievements() -> impl IntoView {
    let about = &CONTENT.site.about;
    let selected = RwSignal::new(Selection::<AchievementCategory>::All);
    let filter = CategoryFilter::of(&CONTENT.achievements);
    let selections = filter.selections();

    view! {
        <section id="achievements" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Achievements & Certifications"
                    subtitle="Recognition of my academic and extracurricular excellence"
                />
                <FilterBar selections selected />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter
                            .visible(selected.get())
                            .map(|achievement| view! { <CardView card=achievement.present() /> })
                            .collect_view()
                    }}
                </div>

                <div class="mt-16 grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-lg">
                        <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-4">
                            <i class="fas fa-heart mr-2 text-primary-500"></i>
                            "Interests & Hobbies"
                        </h3>
                        <div class="flex flex-wrap gap-2">
                            {about
                                .hobbies
                                .iter()
                                .map(|hobby| {
                                    view! {
                                        <span class="px-3 py-1 bg-primary-100 dark:bg-primary-900 text-primary-700 dark:text-primary-300 text-sm rounded-full">
                                            {hobby.as_str()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-lg">
                        <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-4">
                            <i class="fas fa-language mr-2 text-secondary-500"></i>
                            "Languages Known"
                        </h3>
                        <div class="space-y-2">
                            {about
                                .languages
                                .iter()
                                .map(|language| {
                                    view! {
                                        <div class="flex items-center">
                                            <div class="w-2 h-2 bg-secondary-500 rounded-full mr-3"></div>
                                            <span class="text-gray-600 dark:text-gray-400">
                                                {language.as_str()}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
