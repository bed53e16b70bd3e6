use leptos::prelude::*;

use crate::content::CONTENT;
use crate::render::Present;

use super::components::{CardView, SectionHeading};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="My Projects"
                    subtitle="Showcasing my latest work and creative solutions"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CONTENT
                        .projects
                        .iter()
                        .map(|project| view! { <CardView card=project.present() /> })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <a
                        href=CONTENT.site.projects_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center px-8 py-4 bg-gradient-to-r from-primary-500 to-secondary-500 text-white font-semibold rounded-full hover:shadow-2xl transform hover:scale-105 transition-all duration-300"
                    >
                        <i class="fab fa-github mr-2"></i>
                        "View All Projects on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}
