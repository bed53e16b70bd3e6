use leptos::{either::Either, prelude::*};

use crate::contact::{ContactError, ContactField, ContactForm};
use crate::content::CONTENT;

use super::components::SectionHeading;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-colors duration-200";

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your Name",
        ContactField::Email => "your.email@example.com",
        ContactField::Subject => "Project Discussion",
        ContactField::Message => "Tell me about your project or idea...",
    }
}

#[component]
fn FormField(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let input_type = if field == ContactField::Email { "email" } else { "text" };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                {field.label()}
            </label>
            {match field {
                ContactField::Message => Either::Left(view! {
                    <textarea
                        name="message"
                        rows="5"
                        required
                        class=format!("{INPUT_CLASS} resize-none")
                        placeholder=placeholder(field)
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }),
                _ => Either::Right(view! {
                    <input
                        type=input_type
                        required
                        class=INPUT_CLASS
                        placeholder=placeholder(field)
                        prop:value=value
                        on:input=on_input
                    />
                }),
            }}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let site = &CONTENT.site;
    let form = RwSignal::new(ContactForm::default());
    let outcome = RwSignal::new(None::<Result<&'static str, ContactError>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let res = form
            .try_update(ContactForm::submit)
            .map(|res| res.map(|ack| ack.message));
        outcome.set(res);
    };

    view! {
        <section id="contact" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Let's discuss your next project or collaboration"
                />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-bold mb-8 text-gray-900 dark:text-white">
                            "Let's Connect"
                        </h3>
                        <div class="space-y-6">
                            {site
                                .socials
                                .iter()
                                .map(|social| (social.icon.as_str(), social.label.as_str(), social.handle.as_str()))
                                .chain([("fas fa-map-marker-alt", "Location", site.location.as_str())])
                                .map(|(icon, label, text)| {
                                    view! {
                                        <div class="flex items-center">
                                            <div class="w-12 h-12 bg-gradient-to-r from-primary-500 to-secondary-500 rounded-lg flex items-center justify-center mr-4">
                                                <i class=format!("{icon} text-white")></i>
                                            </div>
                                            <div>
                                                <h4 class="font-semibold text-gray-900 dark:text-white">
                                                    {label}
                                                </h4>
                                                <p class="text-gray-600 dark:text-gray-400">{text}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <form
                        on:submit=on_submit
                        novalidate
                        class="bg-white dark:bg-gray-900 p-8 rounded-xl shadow-lg space-y-6"
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <FormField field=ContactField::Name form />
                            <FormField field=ContactField::Email form />
                        </div>
                        <FormField field=ContactField::Subject form />
                        <FormField field=ContactField::Message form />
                        {move || {
                            outcome
                                .get()
                                .map(|res| match res {
                                    Ok(message) => Either::Left(view! {
                                        <p class="text-green-600 dark:text-green-400 font-medium">
                                            {message}
                                        </p>
                                    }),
                                    Err(err) => Either::Right(view! {
                                        <p class="text-red-600 dark:text-red-400 font-medium">
                                            {err.to_string()}
                                        </p>
                                    }),
                                })
                        }}
                        <button
                            type="submit"
                            class="w-full px-6 py-4 bg-gradient-to-r from-primary-500 to-secondary-500 text-white font-semibold rounded-lg hover:shadow-2xl transform hover:scale-105 transition-all duration-300"
                        >
                            <i class="fas fa-paper-plane mr-2"></i>
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
