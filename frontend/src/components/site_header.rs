use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::NAV_ITEMS;
use crate::hooks::scroll_to_section;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor clicks scroll smoothly and close the mobile menu.
    let nav_link = |section_id: &'static str, label: &'static str, class: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(section_id);
        });
        html! {
            <li>
                <a href={format!("#{}", section_id)} {class} {onclick}>{label}</a>
            </li>
        }
    };

    let bar = |open_class: &'static str| {
        classes!(
            "w-full", "h-0.5", "bg-black", "transition-all", "duration-300",
            (*menu_open).then(|| open_class),
        )
    };

    html! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-white/95 shadow-sm">
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <div class="text-2xl font-bold tracking-wider">{"Lokahi"}</div>

                    <nav class="hidden md:block">
                        <ul class="flex space-x-6 text-sm">
                            { for NAV_ITEMS.iter().map(|item| nav_link(item.section_id, item.label, "hover:text-[#7fbcd1] transition-colors")) }
                        </ul>
                    </nav>

                    <button class="md:hidden p-2" onclick={toggle_menu} aria-label="メニュー">
                        <div class="w-6 h-5 flex flex-col justify-between">
                            <span class={bar("rotate-45 translate-y-1.5")}></span>
                            <span class={bar("opacity-0")}></span>
                            <span class={bar("-rotate-45 -translate-y-1.5")}></span>
                        </div>
                    </button>
                </div>
            </div>

            <div class={classes!(
                "md:hidden", "fixed", "top-16", "left-0", "right-0", "bg-white", "shadow-lg", "transition-all", "duration-300",
                if *menu_open { "opacity-100 visible" } else { "opacity-0 invisible" },
            )}>
                <nav class="px-4 py-2">
                    <ul class="space-y-2">
                        { for NAV_ITEMS.iter().map(|item| nav_link(item.section_id, item.label, "block py-2 hover:text-[#7fbcd1]")) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
