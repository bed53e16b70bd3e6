use leptos::prelude::*;
use log::warn;

use crate::content::CONTENT;
use crate::render::{Media, PROFILE_GLYPH};
use crate::timer::TimerSlot;
use crate::typewriter::Typewriter;

use super::components::MediaFrame;

const PARTICLES: usize = 20;

/// Arms the single typing timer; when it fires the cycler advances and the
/// next tick is armed in its place.
fn schedule_tick(
    typewriter: StoredValue<Typewriter>,
    text: RwSignal<String>,
    timer: StoredValue<TimerSlot<TimeoutHandle>>,
) {
    let Some(delay) = typewriter.try_with_value(Typewriter::next_delay) else {
        return;
    };
    let armed = timer.try_update_value(|slot| {
        slot.arm(|| {
            set_timeout_with_handle(
                move || {
                    let shown = typewriter.try_update_value(|tw| {
                        tw.tick();
                        tw.text().to_string()
                    });
                    if let Some(shown) = shown {
                        text.try_set(shown);
                        schedule_tick(typewriter, text, timer);
                    }
                },
                delay,
            )
        })
    });
    if let Some(Err(err)) = armed {
        warn!("couldn't schedule typing tick: {err:?}");
    }
}

#[component]
fn TypedRoles() -> impl IntoView {
    let site = &CONTENT.site;
    let typewriter = StoredValue::new(Typewriter::new(site.roles.clone(), site.timings.typing));
    let text = RwSignal::new(String::new());
    let timer = StoredValue::new(TimerSlot::<TimeoutHandle>::default());

    Effect::watch(
        || (),
        move |_, _, _| schedule_tick(typewriter, text, timer),
        true,
    );
    on_cleanup(move || {
        timer.try_update_value(TimerSlot::clear);
    });

    view! {
        <h2 class="text-2xl md:text-3xl font-semibold mb-8 text-gray-700 dark:text-gray-300 min-h-[2.5rem]">
            <span class="text-primary-500">{move || text.get()}</span>
            <span class="animate-pulse">"|"</span>
        </h2>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let site = &CONTENT.site;
    let portrait = Media::from_source(Some(site.profile_image.as_str()), &site.owner, PROFILE_GLYPH);

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 gradient-bg opacity-10 dark:opacity-5"></div>
            <div class="absolute inset-0">
                {(0..PARTICLES)
                    .map(|i| {
                        // spread deterministically so server and client markup agree
                        let style = format!(
                            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s",
                            (i * 37) % 100,
                            (i * 61 + 13) % 100,
                            i % 6,
                            6 + i % 4,
                        );
                        view! {
                            <div
                                class="absolute w-2 h-2 bg-primary-500 rounded-full animate-float opacity-30"
                                style=style
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10 text-center">
                <div class="mb-8">
                    <div class="w-32 h-32 mx-auto rounded-full bg-gradient-to-r from-primary-500 to-secondary-500 p-1 animate-glow">
                        <div class="w-full h-full rounded-full overflow-hidden bg-gray-200 dark:bg-gray-800">
                            <MediaFrame
                                media=portrait
                                glyph=PROFILE_GLYPH
                                class="w-full h-full rounded-full object-cover"
                            />
                        </div>
                    </div>
                </div>

                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    <span class="text-gradient">{site.owner.as_str()}</span>
                </h1>
                <TypedRoles />
                <p class="text-lg md:text-xl text-gray-600 dark:text-gray-400 mb-12 max-w-3xl mx-auto leading-relaxed">
                    {site.summary.as_str()}
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#projects"
                        class="px-8 py-4 bg-gradient-to-r from-primary-500 to-secondary-500 text-white font-semibold rounded-full hover:shadow-2xl transform hover:scale-105 transition-all duration-300 animate-glow"
                    >
                        <i class="fas fa-rocket mr-2"></i>
                        "View My Work"
                    </a>
                    <a
                        href=site.resume_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-8 py-4 border-2 border-primary-500 text-primary-500 font-semibold rounded-full hover:bg-primary-500 hover:text-white transition-all duration-300 transform hover:scale-105"
                    >
                        <i class="fas fa-download mr-2"></i>
                        "View My Resume"
                    </a>
                </div>

                <div class="mt-12 flex justify-center space-x-6">
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
                                    class="text-2xl text-gray-600 dark:text-gray-400 hover:text-primary-500 transition-colors duration-200 transform hover:scale-110"
                                >
                                    <i class=social.icon.as_str()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <a
                href="#about"
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce text-primary-500 text-2xl"
                aria-label="Scroll to about"
            >
                <i class="fas fa-chevron-down"></i>
            </a>
        </section>
    }
}
