use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container page",
            h1 {
                class: "page-title",
                "About me"
            }
            p {
                class: "intro",
                "Front-end developer. Use the moon in the top right to switch themes; the choice is remembered on this device."
            }
        }
    }
}
