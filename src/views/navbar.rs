use dioxus::prelude::*;
use crate::configs::ThemeConfig;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let config = use_context::<ThemeConfig>();
    let icon_class = format!("fa {}", config.moon_icon);

    // Runs once, after the toggle anchors below are in the DOM.
    let install_config = config.clone();
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            crate::preference::web::install(install_config.clone());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::info!(
                "Theme preference engine needs a browser, #{} left inert",
                install_config.toggle_container_id
            );
        }
    });

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar",
                div {
                    id: "navbar",
                    class: "container navbar-inner",
                    div {
                        class: "nav-links",
                        Link {
                            class: "nav-link",
                            to: Route::Home,
                            "Home"
                        }
                    }
                    div {
                        id: "{config.toggle_container_id}",
                        class: "theme-toggle",
                        title: "Toggle dark mode",
                        i {
                            id: "{config.toggle_icon_id}",
                            class: "{icon_class}",
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
