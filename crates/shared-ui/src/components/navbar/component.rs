use dioxus::prelude::*;

/// Persistent top navigation bar for the shell layout.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar",
            {children}
        }
    }
}

/// Brand block on the left of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

/// Link group on the right of the navbar.
#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        nav { class: "navbar-links", {children} }
    }
}

/// Persistent footer rendered below the active page.
#[component]
pub fn Footer(children: Element) -> Element {
    rsx! {
        footer { class: "footer",
            {children}
        }
    }
}
