use yew::prelude::*;

const FADE_IN_UP: &str = "transition-all duration-700 ease-out";

/// Entrance animation classes for a block gated on visibility.
pub fn fade_in_up(visible: bool) -> Classes {
    classes!(
        FADE_IN_UP,
        if visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-10" }
    )
}

pub fn transition_delay(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: Html,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="relative mb-8 md:mb-12 px-4">
            <h2 class="text-2xl md:text-3xl lg:text-4xl font-bold text-center text-black">
                <span class="relative inline-block pb-4">
                    { props.title.clone() }
                    <span class="absolute -bottom-2 left-0 w-full h-1 bg-[#7fbcd1]"></span>
                </span>
            </h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <p class="mt-6 text-sm md:text-lg lg:text-xl text-gray-600 text-center">
                            { subtitle.clone() }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_up_switches_between_start_and_end_state() {
        let hidden = fade_in_up(false).to_string();
        let shown = fade_in_up(true).to_string();
        assert!(hidden.contains("opacity-0"));
        assert!(shown.contains("opacity-100"));
        assert!(shown.contains("transition-all"));
    }

    #[test]
    fn delay_is_an_inline_style() {
        assert_eq!(transition_delay(150), "transition-delay: 150ms;");
    }
}
