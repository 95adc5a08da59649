use yew::prelude::*;

use crate::config::INSTAGRAM_URL;

#[derive(Properties, PartialEq)]
pub struct InstagramTabProps {
    pub visible: bool,
}

/// Floating tab on the right edge, shown once the hero has been scrolled past.
#[function_component(InstagramTab)]
pub fn instagram_tab(props: &InstagramTabProps) -> Html {
    let style = if props.visible {
        "opacity: 1; visibility: visible; transform: translateX(calc(100% - 40px));"
    } else {
        "opacity: 0; visibility: hidden; transform: translateX(100%);"
    };

    html! {
        <a
            href={INSTAGRAM_URL}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Instagram"
            class="instagram-tab fixed top-20 right-0 z-50 bg-gradient-to-tr from-[#FFD600] via-[#FF0069] to-[#7638FA] text-white p-3 rounded-l-lg shadow-lg transition-all duration-500"
            {style}
        >
            <i class="fab fa-instagram text-2xl"></i>
        </a>
    }
}
