use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::controllers::slideshow::{Direction, Slides};
use crate::hooks::use_slideshow;

/// Where a slide sits relative to the active one.
fn slide_position(index: usize, current: usize) -> &'static str {
    if index == current {
        "translate-x-0 opacity-100 visible"
    } else if index < current {
        "-translate-x-full opacity-0 invisible"
    } else {
        "translate-x-full opacity-0 invisible"
    }
}

fn indicator_class(index: usize, current: usize) -> &'static str {
    if index == current {
        "bg-white scale-110"
    } else {
        "bg-white/50 hover:bg-white/70"
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageSlideshowProps {
    pub slides: Slides,
}

#[function_component(ImageSlideshow)]
pub fn image_slideshow(props: &ImageSlideshowProps) -> Html {
    let node_ref = use_node_ref();
    let slideshow = use_slideshow(props.slides, node_ref.clone());
    let current = slideshow.current_index;

    let onkeydown = {
        let advance = slideshow.advance.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => advance.emit(Direction::Backward),
            "ArrowRight" => advance.emit(Direction::Forward),
            _ => {}
        })
    };

    html! {
        <div
            ref={node_ref}
            tabindex="0"
            {onkeydown}
            class="relative w-full aspect-[16/9] overflow-hidden shadow-lg max-h-[600px]"
        >
            { for props.slides.iter().enumerate().map(|(index, slide)| {
                let active = index == current;
                html! {
                    <div
                        key={index}
                        aria-hidden={(!active).to_string()}
                        class={classes!(
                            "absolute", "w-full", "h-full", "transition-transform", "duration-700", "ease-in-out",
                            slide_position(index, current),
                        )}
                        style={format!(
                            "z-index: {}; transition-property: transform, opacity, visibility;",
                            if active { 1 } else { 0 }
                        )}
                    >
                        <img
                            src={slide.source}
                            alt={slide.alt_text}
                            loading={if index == 0 { "eager" } else { "lazy" }}
                            class="w-full h-full object-cover object-center"
                        />
                    </div>
                }
            }) }

            <div class="absolute bottom-4 left-1/2 transform -translate-x-1/2 flex space-x-2 z-10">
                { for (0..props.slides.len()).map(|index| {
                    let onclick = {
                        let jump_to = slideshow.jump_to.clone();
                        Callback::from(move |_: MouseEvent| jump_to.emit(index))
                    };
                    html! {
                        <button
                            key={index}
                            {onclick}
                            class={classes!("w-3", "h-3", "rounded-full", "transition-all", "duration-300", indicator_class(index, current))}
                            aria-label={format!("スライド {} へ移動", index + 1)}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_slide_is_visible() {
        for current in 0..5 {
            let visible = (0..5)
                .filter(|&i| !slide_position(i, current).contains("invisible"))
                .count();
            assert_eq!(visible, 1);
        }
    }

    #[test]
    fn earlier_slides_exit_left_and_later_ones_wait_right() {
        assert!(slide_position(0, 2).starts_with("-translate-x-full"));
        assert!(slide_position(4, 2).starts_with("translate-x-full"));
    }

    #[test]
    fn only_the_active_indicator_is_highlighted() {
        assert_eq!(indicator_class(3, 3), "bg-white scale-110");
        assert_eq!(indicator_class(2, 3), "bg-white/50 hover:bg-white/70");
    }
}
