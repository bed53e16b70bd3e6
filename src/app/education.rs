use leptos::prelude::*;

use crate::content::CONTENT;
use crate::render::Present;

use super::components::{CardView, SectionHeading};

/// Entries alternate sides of a central timeline on wide screens.
#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Education"
                    subtitle="My academic journey and educational background"
                />
                <div class="relative">
                    <div class="hidden md:block absolute left-1/2 transform -translate-x-1/2 w-1 h-full bg-gradient-to-b from-primary-500 to-secondary-500 rounded-full"></div>
                    <div class="space-y-12">
                        {CONTENT
                            .education
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let row = if index % 2 == 0 {
                                    "relative flex flex-col md:flex-row items-center"
                                } else {
                                    "relative flex flex-col md:flex-row-reverse items-center"
                                };
                                view! {
                                    <div class=row>
                                        <div class="w-full md:w-5/12">
                                            <CardView card=entry.present() />
                                        </div>
                                        <div class="hidden md:flex w-2/12 justify-center">
                                            <div class="w-6 h-6 rounded-full bg-gradient-to-r from-primary-500 to-secondary-500 border-4 border-white dark:border-gray-900"></div>
                                        </div>
                                        <div class="hidden md:block w-5/12"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
