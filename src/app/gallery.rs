use leptos::prelude::*;

use crate::content::{GalleryCategory, CONTENT};
use crate::filter::{CategoryFilter, Selection};
use crate::render::{Card, Present, PLACEHOLDER_GLYPH};

use super::components::{FilterBar, MediaFrame, SectionHeading};

#[component]
pub fn Gallery() -> impl IntoView {
    let selected = RwSignal::new(Selection::<GalleryCategory>::All);
    // id of the image shown in the lightbox, if open
    let lightbox = RwSignal::new(None::<u32>);
    let filter = CategoryFilter::of(&CONTENT.gallery);
    let selections = filter.selections();

    view! {
        <section id="gallery" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Gallery"
                    subtitle="A visual journey through my academic and professional life"
                />
                <FilterBar selections selected />

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {move || {
                        filter
                            .visible(selected.get())
                            .map(|image| {
                                let id = image.id;
                                let Card { title, badge, media, .. } = image.present();
                                view! {
                                    <button
                                        class="group relative h-64 rounded-xl overflow-hidden shadow-lg text-left"
                                        on:click=move |_| lightbox.set(Some(id))
                                    >
                                        <MediaFrame media glyph=PLACEHOLDER_GLYPH />
                                        <div class="absolute inset-0 bg-black/0 group-hover:bg-black/60 transition-all duration-300 flex items-end">
                                            <div class="p-4 text-white opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                                                <h3 class="font-bold">{title}</h3>
                                                <p class="text-sm">{badge.map(|b| b.label)}</p>
                                            </div>
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || {
                lightbox
                    .get()
                    .and_then(|id| CONTENT.image(id))
                    .map(|image| {
                        let Card { title, body, badge, media, .. } = image.present();
                        view! {
                            <div
                                class="fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4"
                                on:click=move |_| lightbox.set(None)
                            >
                                <div
                                    class="relative max-w-4xl w-full max-h-full"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <button
                                        on:click=move |_| lightbox.set(None)
                                        class="absolute top-4 right-4 text-white text-2xl hover:text-gray-300 transition-colors duration-200 z-10"
                                        aria-label="Close"
                                    >
                                        <i class="fas fa-times"></i>
                                    </button>
                                    <div class="bg-white dark:bg-gray-800 rounded-xl overflow-hidden shadow-2xl">
                                        <div class="relative h-96">
                                            <MediaFrame media glyph=PLACEHOLDER_GLYPH />
                                        </div>
                                        <div class="p-6">
                                            <div class="flex items-center justify-between mb-4">
                                                <h3 class="text-2xl font-bold text-gray-900 dark:text-white">
                                                    {title}
                                                </h3>
                                                <span class="px-3 py-1 bg-primary-100 dark:bg-primary-900 text-primary-700 dark:text-primary-300 text-sm font-semibold rounded-full">
                                                    {badge.map(|b| b.label)}
                                                </span>
                                            </div>
                                            <p class="text-gray-600 dark:text-gray-400">{body}</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
