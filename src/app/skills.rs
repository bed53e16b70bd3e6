use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use log::warn;

use crate::content::CONTENT;
use crate::reveal::StaggeredReveal;
use crate::timer::TimerSet;

use super::components::SectionHeading;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &CONTENT.skills;
    let timings = CONTENT.site.timings.reveal;
    let section = NodeRef::<html::Section>::new();
    let reveal = RwSignal::new(StaggeredReveal::new(skills.levels.len(), timings.interval()));
    let timers = StoredValue::new(TimerSet::<TimeoutHandle>::default());

    use_intersection_observer_with_options(
        section,
        move |entries, observer| {
            if !entries.iter().any(|entry| entry.is_intersecting()) {
                return;
            }
            observer.disconnect();
            let schedule = reveal.try_update(StaggeredReveal::trigger).unwrap_or_default();
            for (index, delay) in schedule {
                let flip = move || {
                    reveal.try_update(|r| r.mark_visible(index));
                };
                match set_timeout_with_handle(flip, delay) {
                    Ok(handle) => {
                        timers.try_update_value(|t| t.push(handle));
                    }
                    Err(err) => {
                        warn!("couldn't schedule skill reveal: {err:?}");
                        flip();
                    }
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![timings.threshold]),
    );
    on_cleanup(move || {
        timers.try_update_value(TimerSet::cancel_all);
    });

    view! {
        <section id="skills" class="py-20" node_ref=section>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="My Skills"
                    subtitle="Technologies I work with to bring ideas to life"
                />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {skills
                        .levels
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            let level = skill.level;
                            view! {
                                <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-lg">
                                    <div class="flex items-center mb-4">
                                        <div class=format!(
                                            "text-3xl mr-4 bg-gradient-to-r {} bg-clip-text text-transparent",
                                            skill.accent,
                                        )>
                                            <i class=skill.icon.as_str()></i>
                                        </div>
                                        <div class="flex-1">
                                            <div class="flex justify-between items-center mb-2">
                                                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                                                    {skill.name.as_str()}
                                                </h3>
                                                <span class="text-sm font-medium text-gray-600 dark:text-gray-400">
                                                    {format!("{level}%")}
                                                </span>
                                            </div>
                                            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3">
                                                <div
                                                    class=format!(
                                                        "h-3 bg-gradient-to-r {} rounded-full transition-all duration-1000 ease-out",
                                                        skill.accent,
                                                    )
                                                    style:width=move || {
                                                        if reveal.with(|r| r.is_visible(index)) {
                                                            format!("{level}%")
                                                        } else {
                                                            "0%".to_string()
                                                        }
                                                    }
                                                ></div>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-16">
                    <h3 class="text-2xl font-bold text-center mb-8 text-gray-900 dark:text-white">
                        "Technical Competencies & Interpersonal Skills"
                    </h3>
                    <div class="mb-12">
                        <h4 class="text-lg font-semibold text-center mb-6 text-gray-700 dark:text-gray-300">
                            "Technical Competencies"
                        </h4>
                        <div class="flex flex-wrap justify-center gap-6">
                            {skills
                                .competencies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <div class="flex flex-col items-center p-4 bg-white dark:bg-gray-800 rounded-xl shadow-lg hover:shadow-xl transition-shadow duration-300 transform hover:scale-105">
                                            <i class=format!(
                                                "{} text-3xl text-primary-500 mb-2",
                                                tech.icon,
                                            )></i>
                                            <span class="text-sm font-medium text-gray-600 dark:text-gray-400">
                                                {tech.name.as_str()}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-center mb-6 text-gray-700 dark:text-gray-300">
                            "Interpersonal Skills"
                        </h4>
                        <div class="flex flex-wrap justify-center gap-4">
                            {skills
                                .interpersonal
                                .iter()
                                .map(|name| {
                                    view! {
                                        <div class="px-4 py-2 bg-gradient-to-r from-primary-100 to-secondary-100 dark:from-primary-900 dark:to-secondary-900 text-primary-700 dark:text-primary-300 rounded-full text-sm font-medium">
                                            {name.as_str()}
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
