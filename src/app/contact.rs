use leptos::{html::Section, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::visibility::{reveal_class, use_reveal};
use crate::content::contact_channels;
use crate::form::{ContactForm, Field, SubmitState, SUBMIT_DELAY_MS, SUCCESS_BANNER_MS};
use crate::reveal::SECTION_THRESHOLD;

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<Section>::new();
    let reveal = use_reveal(section_ref, SECTION_THRESHOLD);

    let form = RwSignal::new(ContactForm::new());

    // Both timers are scope-owned, so navigating away cancels them
    let UseTimeoutFnReturn {
        start: start_banner,
        ..
    } = use_timeout_fn(
        move |_: ()| form.update(|f| f.dismiss_success()),
        SUCCESS_BANNER_MS,
    );

    let UseTimeoutFnReturn {
        start: start_send, ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(|f| f.finish_submit());
            start_banner(());
        },
        SUBMIT_DELAY_MS,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = form
            .try_update(|f| f.can_submit() && f.submit().is_ok())
            .unwrap_or(false);
        if accepted {
            start_send(());
        }
    };

    let field_error = move |field: Field| {
        form.with(|f| f.errors().get(field).map(|m| m.to_string()))
            .map(|message| view! { <p class="mt-1 text-sm text-red-400">{message}</p> })
    };

    let channels = contact_channels()
        .into_iter()
        .map(|channel| {
            view! {
                <div class="flex items-center gap-4 p-4 bg-slate-800/50 border border-slate-700 rounded-xl hover:border-cyan-500/50 transition-colors">
                    <div class="w-12 h-12 bg-gradient-to-br from-cyan-500 to-blue-500 rounded-lg flex items-center justify-center text-xl">
                        {channel.icon}
                    </div>
                    <div>
                        <p class="text-slate-400 text-sm">{channel.label}</p>
                        <p class="text-white">{channel.value}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            node_ref=section_ref
            id="contact"
            class="py-20 px-4 md:px-6 lg:px-8 md:py-28 relative overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <div class=move || reveal_class(reveal.get(), "text-center mb-16")>
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "Let's Discuss Your "
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "Project"
                        </span>
                    </h2>
                    <p class="text-slate-400 max-w-2xl mx-auto">
                        "Have a project in mind? Let's work together to bring your ideas to life. Fill out the form below or reach out directly."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto items-start">
                    // Contact channels
                    <div class=move || reveal_class(reveal.get(), "space-y-6")>{channels}</div>

                    // Contact form
                    <div class=move || reveal_class(reveal.get(), "")>
                        {move || {
                            form.with(|f| f.state() == SubmitState::Success)
                                .then(|| {
                                    view! {
                                        <div
                                            class="mb-6 p-4 rounded-md bg-green-500/10 border border-green-500/40 text-green-400"
                                            role="status"
                                        >
                                            "Message sent! I'll get back to you soon."
                                        </div>
                                    }
                                })
                        }}
                        <form
                            class="bg-slate-800/50 border border-slate-700 rounded-2xl p-8 space-y-6"
                            on:submit=on_submit
                        >
                            <div>
                                <label for="name" class="block text-sm text-slate-400 mb-2">
                                    {Field::Name.label()}
                                </label>
                                <input
                                    id="name"
                                    type="text"
                                    placeholder="John Doe"
                                    prop:value=move || form.with(|f| f.data().name.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.edit(Field::Name, event_target_value(&ev)))
                                    }
                                    class="w-full px-4 py-2 rounded-md bg-slate-900/50 border border-slate-700 focus:border-cyan-500 focus:outline-none transition-colors"
                                />
                                {move || field_error(Field::Name)}
                            </div>

                            <div>
                                <label for="email" class="block text-sm text-slate-400 mb-2">
                                    {Field::Email.label()}
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="john@example.com"
                                    prop:value=move || form.with(|f| f.data().email.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.edit(Field::Email, event_target_value(&ev)))
                                    }
                                    class="w-full px-4 py-2 rounded-md bg-slate-900/50 border border-slate-700 focus:border-cyan-500 focus:outline-none transition-colors"
                                />
                                {move || field_error(Field::Email)}
                            </div>

                            <div>
                                <label for="subject" class="block text-sm text-slate-400 mb-2">
                                    {Field::Subject.label()}
                                </label>
                                <input
                                    id="subject"
                                    type="text"
                                    placeholder="Project Inquiry"
                                    prop:value=move || form.with(|f| f.data().subject.clone())
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.edit(Field::Subject, event_target_value(&ev))
                                        })
                                    }
                                    class="w-full px-4 py-2 rounded-md bg-slate-900/50 border border-slate-700 focus:border-cyan-500 focus:outline-none transition-colors"
                                />
                                {move || field_error(Field::Subject)}
                            </div>

                            <div>
                                <label for="message" class="block text-sm text-slate-400 mb-2">
                                    {Field::Message.label()}
                                </label>
                                <textarea
                                    id="message"
                                    rows=6
                                    placeholder="Tell me about your project..."
                                    prop:value=move || form.with(|f| f.data().message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.edit(Field::Message, event_target_value(&ev))
                                        })
                                    }
                                    class="w-full px-4 py-2 rounded-md bg-slate-900/50 border border-slate-700 focus:border-cyan-500 focus:outline-none transition-colors resize-none"
                                ></textarea>
                                {move || field_error(Field::Message)}
                            </div>

                            <button
                                type="submit"
                                disabled=move || !form.with(|f| f.can_submit())
                                class="w-full py-3 rounded-md bg-gradient-to-r from-cyan-500 to-blue-500 hover:from-cyan-600 hover:to-blue-600 text-white font-medium disabled:opacity-60 disabled:cursor-not-allowed transition-all"
                            >
                                {move || {
                                    if form.with(|f| f.state() == SubmitState::Submitting) {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
