use leptos::{either::Either, html, prelude::*};

use crate::filter::{Category, Selection};
use crate::render::{BadgeTone, Card, Media, PLACEHOLDER_GLYPH};

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                <span class="text-gradient">{title}</span>
            </h2>
            <p class="text-xl text-gray-600 dark:text-gray-400 max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}

/// An image that swaps itself for `glyph` when the browser can't load it.
#[component]
pub fn MediaFrame(
    media: Media,
    glyph: &'static str,
    #[prop(default = "w-full h-full object-cover")] class: &'static str,
) -> impl IntoView {
    let media = RwSignal::new(media);
    let img_ref = NodeRef::<html::Img>::new();

    // server-rendered images may have failed before `on:error` was attached
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            let settled = media.with_untracked(|m| {
                m.on_load_settled(img.complete(), img.natural_width(), glyph)
            });
            if settled.is_placeholder() && !media.with_untracked(Media::is_placeholder) {
                media.set(settled);
            }
        }
    });

    move || match media.get() {
        Media::Image { src, alt } => Either::Left(view! {
            <img
                node_ref=img_ref
                src=src
                alt=alt
                class=class
                loading="lazy"
                on:error=move |_| media.update(|m| *m = m.on_load_error(glyph))
            />
        }),
        Media::Placeholder { glyph } => Either::Right(view! {
            <div class="w-full h-full flex items-center justify-center bg-gradient-to-br from-primary-500 to-secondary-500">
                <i class=format!("{glyph} text-6xl text-white/80")></i>
            </div>
        }),
    }
}

/// One button per offered selection; the active one is highlighted.
#[component]
pub fn FilterBar<C>(selections: Vec<Selection<C>>, selected: RwSignal<Selection<C>>) -> impl IntoView
where
    C: Category + Send + Sync,
{
    view! {
        <div class="flex flex-wrap justify-center gap-4 mb-12">
            {selections
                .into_iter()
                .map(|selection| {
                    view! {
                        <button
                            on:click=move |_| selected.set(selection)
                            class=move || {
                                if selected.get() == selection {
                                    "px-6 py-2 rounded-full font-medium transition-all duration-300 bg-gradient-to-r from-primary-500 to-secondary-500 text-white shadow-lg"
                                } else {
                                    "px-6 py-2 rounded-full font-medium transition-all duration-300 bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                                }
                            }
                        >
                            {selection.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn badge_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Info => {
            "px-3 py-1 rounded-full text-xs font-medium bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200"
        }
        BadgeTone::Success => {
            "px-3 py-1 rounded-full text-xs font-medium bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
        }
        BadgeTone::Accent => {
            "px-3 py-1 rounded-full text-xs font-medium bg-primary-100 text-primary-700 dark:bg-primary-900 dark:text-primary-200"
        }
    }
}

/// Lays out a [`Card`]. Cards with an icon get an icon header, the rest
/// show their media.
#[component]
pub fn CardView(card: Card, #[prop(optional)] glyph: Option<&'static str>) -> impl IntoView {
    let Card {
        title,
        subtitle,
        body,
        icon,
        badge,
        meta,
        tag_groups,
        links,
        media,
        accent,
    } = card;

    let header = match icon {
        Some(icon) => Either::Left(view! {
            <div class=format!(
                "w-16 h-16 rounded-full bg-gradient-to-r {accent} flex items-center justify-center mb-4",
            )>
                <i class=format!("{icon} text-2xl text-white")></i>
            </div>
        }),
        None => Either::Right(view! {
            <div class="h-48 -mx-6 -mt-6 mb-6 overflow-hidden rounded-t-xl">
                <MediaFrame media glyph=glyph.unwrap_or(PLACEHOLDER_GLYPH) />
            </div>
        }),
    };

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-lg p-6 card-hover h-full flex flex-col">
            {header}
            <div class="flex items-start justify-between gap-2 mb-2">
                <h3 class="text-xl font-bold text-gray-900 dark:text-white">{title}</h3>
                {badge.map(|b| view! { <span class=badge_class(b.tone)>{b.label}</span> })}
            </div>
            {subtitle
                .map(|s| {
                    view! {
                        <p class="text-primary-600 dark:text-primary-400 font-medium mb-2">{s}</p>
                    }
                })}
            {meta
                .into_iter()
                .map(|line| {
                    view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400 mb-1">
                            <i class=format!("{} mr-2", line.icon)></i>
                            {line.text}
                        </p>
                    }
                })
                .collect_view()}
            {(!body.is_empty())
                .then(|| {
                    view! { <p class="text-gray-600 dark:text-gray-400 mb-4 leading-relaxed">{body}</p> }
                })}
            {tag_groups
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="mb-4">
                            <h4 class="font-semibold text-gray-900 dark:text-white mb-2">
                                {group.label}
                            </h4>
                            <div class="flex flex-wrap gap-2">
                                {group
                                    .tags
                                    .into_iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="px-3 py-1 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-full text-sm">
                                                {tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="mt-auto flex gap-4">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center text-primary-600 dark:text-primary-400 hover:text-primary-700 font-medium"
                            >
                                <i class=format!("{} mr-2", link.icon)></i>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
