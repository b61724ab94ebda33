use crate::components::BlogPosts;
use dioxus::prelude::*;

/// How a line of the intro copy is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Paragraph,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticText {
    pub role: Role,
    pub content: &'static str,
}

pub const GREETING: StaticText = StaticText {
    role: Role::Heading,
    content: "Hey Friends!",
};

pub const BIO: StaticText = StaticText {
    role: Role::Paragraph,
    content: "My name is Jordan some call me JT. I'm a Senior Platform Engineer and have been working a lot Go and .NET, and juggling a few side projects too.",
};

pub const WELCOME: StaticText = StaticText {
    role: Role::Paragraph,
    content: "Welcome to my corner of the inter webs! I'm a software engineer and I'm passionate about learning new things and sharing my knowledge with others.",
};

pub const CALL_TO_ACTION: StaticText = StaticText {
    role: Role::Caption,
    content: "Check out my blog, project posts below to see what I've been up to!",
};

/// The intro copy in page order. The embedded posts always come after it.
pub const INTRO: [StaticText; 4] = [GREETING, BIO, WELCOME, CALL_TO_ACTION];

/// The Home page component that will be rendered when the current route is `[Route::Home]`
#[component]
pub fn Home() -> Element {
    rsx! {
        Intro { BlogPosts {} }
    }
}

/// The static shell of the landing page with `children` embedded below the intro copy.
///
/// Errors raised by `children` are not handled here, they bubble up to the layout's error boundary.
#[component]
pub fn Intro(children: Element) -> Element {
    rsx! {
        section {
            for text in INTRO.iter() {
                {intro_line(text)}
            }
            div {
                class: "my-8",
                {children}
            }
        }
    }
}

fn intro_line(text: &StaticText) -> Element {
    match text.role {
        Role::Heading => rsx! {
            h1 { class: "mb-8 text-2xl font-semibold tracking-tighter", {text.content} }
        },
        Role::Paragraph => rsx! {
            p { class: "mb-4", {text.content} }
        },
        Role::Caption => rsx! {
            p { {text.content} }
        },
    }
}
