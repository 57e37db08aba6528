use leptos::prelude::*;

use crate::components::icons::{self, Icon};

/// (icon, title, description) for the about-me cards.
const ABOUT_CARDS: [(&str, &str, &str); 6] = [
    (
        icons::CAT,
        "Cat mom",
        "I have a wonderful fluffy friend who makes every day special",
    ),
    (
        icons::GUITAR,
        "Guitarist",
        "I play the guitar and find my calm in music",
    ),
    (
        icons::MUSIC,
        "Choir singer",
        "I sing in a choir and enjoy the harmony of voices",
    ),
    (
        icons::GRADUATION_CAP,
        "Student",
        "I study computer science and dream of becoming a UX/UI designer",
    ),
    (
        icons::PLANE,
        "Traveler",
        "I explore the world and collect unforgettable memories",
    ),
    (
        icons::COFFEE,
        "Barista",
        "I create special coffee moments for people",
    ),
];

/// Static personal "about me" page: hero, about cards, contact links.
/// No state, no I/O.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-rose-50">
            <HeroSection />
            <AboutSection />
            <ContactSection />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="container mx-auto px-20 py-16 flex flex-col md:flex-row items-center justify-between gap-8">
            <div class="md:w-1/2">
                <h1 class="text-4xl md:text-5xl font-bold text-rose-900 mb-4">
                    "Hi, I'm Lily"
                </h1>
                <p class="text-lg text-rose-700 leading-relaxed">
                    "A creative soul who finds inspiration in music, art, and fragrant coffee. \
                     I love creating coziness and sharing positivity with the people around me."
                </p>
            </div>
            <div class="md:w-1/2">
                <img
                    src="/img/profile.jpg"
                    alt="Profile"
                    class="rounded-full w-64 h-64 object-cover mx-auto shadow-lg hover:scale-105 transition-transform duration-300"
                />
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-white py-16">
            <div class="container mx-auto px-10">
                <h2 class="text-3xl font-bold text-center text-rose-900 mb-12">"About me"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {ABOUT_CARDS
                        .iter()
                        .map(|&(icon, title, description)| view! {
                            <div class="bg-rose-50 p-6 rounded-2xl hover:shadow-lg transition-shadow duration-300">
                                <div class="mb-4">
                                    <Icon path=icon class="w-8 h-8 text-rose-600" />
                                </div>
                                <h3 class="text-xl font-semibold text-rose-900 mb-2">{title}</h3>
                                <p class="text-rose-700">{description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-16">
            <h2 class="text-3xl font-bold text-center text-rose-900 mb-8">"Get in touch"</h2>
            <div class="flex justify-center space-x-6">
                <ContactLink href="mailto:lily@example.edu" icon=icons::MAIL />
                <ContactLink href="https://www.instagram.com/lily" icon=icons::INSTAGRAM />
                <ContactLink href="https://github.com/lily" icon=icons::GITHUB />
            </div>
        </section>
    }
}

#[component]
fn ContactLink(href: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="p-3 bg-rose-100 rounded-full hover:bg-rose-200 transition-colors duration-300"
        >
            <Icon path=icon class="w-6 h-6 text-rose-600" />
        </a>
    }
}
