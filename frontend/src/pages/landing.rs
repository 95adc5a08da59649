use log::error;
use yew::prelude::*;

use crate::components::instagram_tab::InstagramTab;
use crate::components::section_header::{fade_in_up, transition_delay, SectionHeader};
use crate::components::site_header::SiteHeader;
use crate::components::slideshow::ImageSlideshow;
use crate::config::{
    CONCERNS_TRIGGER, CONTENT_TRIGGER, LINE_APPLY_URL, INSTAGRAM_URL, MAP_EMBED_URL, SECTION_TRIGGER,
};
use crate::content::*;
use crate::controllers::slideshow::Slides;
use crate::hooks::{use_scroll_signals, use_visibility};

#[derive(Properties, PartialEq)]
struct RevealProps {
    /// Set once the page has been scrolled far enough to show everything.
    revealed: bool,
}

/// Turns `\n`-separated copy into lines with `<br/>` between them.
fn multiline(text: &'static str) -> Html {
    let mut lines = text.split('\n');
    let first = lines.next().unwrap_or_default();
    html! {
        <>
            { first }
            { for lines.map(|line| html! { <><br />{ line }</> }) }
        </>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll = use_scroll_signals();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let revealed = scroll.revealed;

    html! {
        <div class="relative">
            <SiteHeader />
            <InstagramTab visible={scroll.tab_visible} />
            <Hero revealed={revealed} />
            <div class="w-full h-4 bg-white"></div>
            <ConcernsSection revealed={revealed} />
            <div class="w-full h-16 bg-white"></div>
            <FeaturesSection revealed={revealed} />
            <div class="w-full h-2 bg-white"></div>
            <BenefitsSection revealed={revealed} />
            <div class="w-full h-2 bg-white"></div>
            <DailyScheduleSection />
            <div class="w-full h-2 bg-white"></div>
            <StaffSection />
            <div class="w-full h-2 bg-white"></div>
            <JobDetailsSection />
            <WantedSection revealed={revealed} />
            <div class="w-full h-2 bg-white"></div>
            <QaSection revealed={revealed} />
            <div class="w-full h-2 bg-white"></div>
            <OwnerMessage />
            <SiteFooter />
        </div>
    }
}

#[function_component(Hero)]
fn hero(props: &RevealProps) -> Html {
    // The message only appears through the scroll fallback.
    let message_class = |delay: &'static str| {
        classes!(
            "transition-all", "duration-1000", "ease-out", delay,
            if props.revealed { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-10" },
        )
    };

    html! {
        <div class="pt-16">
            <div class="relative">
                <div class="w-full">
                    <img
                        src="/image/detail_top.jpg"
                        alt="明るく清潔感のあるサロン内装"
                        width="1200"
                        height="600"
                        class="md:w-full md:h-[80vh] w-screen h-auto object-cover"
                    />
                    <div class="absolute inset-0 flex items-center">
                        <div class="text-white px-0 md:px-12 ml-4 md:hidden">
                            <h1 class="text-3xl font-medium tracking-wider leading-relaxed mb-3 drop-shadow-[0_2px_8px_rgba(0,0,0,0.8)]">
                                { HERO_TAGLINE }
                            </h1>
                        </div>
                    </div>
                    <img
                        src="/image/top2.png"
                        alt="lokahiスタッフ集合写真"
                        width="1200"
                        height="600"
                        class="md:w-full md:h-[80vh] w-screen h-auto object-cover"
                    />
                </div>
            </div>
            <div class="py-12 px-4 bg-white">
                <div class="max-w-4xl mx-auto space-y-12">
                    <div class="text-left">
                        <h1 class={classes!("text-2xl", "md:text-3xl", "font-medium", "tracking-wider", "leading-relaxed", "mb-3", message_class(""))}>
                            { HERO_TAGLINE }
                        </h1>
                    </div>
                    <div class="text-left">
                        <p class={classes!("text-base", "md:text-lg", "leading-loose", "tracking-wider", message_class("delay-300"))}>
                            { multiline(HERO_MESSAGE) }
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(ConcernsSection)]
fn concerns_section(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_visibility(node_ref.clone(), CONCERNS_TRIGGER) || props.revealed;

    let column = |heading: &'static str, heading_class: &'static str, items: &'static [&'static str], border: &'static str| {
        html! {
            <div class="p-2 md:p-6 rounded-lg h-full flex flex-col">
                <h3 class={classes!("text-base", "md:text-xl", "font-bold", "text-center", "mb-3", "md:mb-6", heading_class)}>
                    { heading }
                </h3>
                <div class="flex flex-col items-center gap-2 md:gap-4 flex-grow">
                    { for items.iter().enumerate().map(|(index, text)| html! {
                        <div
                            class={classes!(
                                "border-2", border, "rounded-lg", "w-full", "text-left", "bg-white", "shadow-sm",
                                "text-xs", "md:text-base", "leading-relaxed", "min-h-[120px]", "md:min-h-[140px]",
                                "flex", "items-center", "px-4", "md:px-6", "whitespace-pre-wrap",
                                fade_in_up(visible),
                            )}
                            style={transition_delay(index as u32 * 150)}
                        >
                            { *text }
                        </div>
                    }) }
                </div>
            </div>
        }
    };

    html! {
        <section class="py-8 md:py-12 mt-4 md:mt-6 bg-white">
            <div class="relative z-10">
                <SectionHeader
                    title={html! { <>{"「このままでいいのかな...」"}<br />{"そんな不安から解放されます"}</> }}
                    subtitle="今の環境に少しでも違和感を感じているあなたへ"
                />
                <div ref={node_ref} class="max-w-6xl mx-auto px-4">
                    <div class="grid grid-cols-2 gap-2 md:gap-8">
                        { column("＜よくある悩み＞", "text-gray-500", CONCERNS, "border-gray-200") }
                        { column("＜Lokahiの場合＞", "text-black", SOLUTIONS, "border-[#7fbcd1]") }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_visibility(node_ref.clone(), CONTENT_TRIGGER) || props.revealed;

    let slideshow = match Slides::new(SLIDESHOW_IMAGES) {
        Ok(slides) => html! { <ImageSlideshow slides={slides} /> },
        Err(e) => {
            error!("Slideshow disabled: {}", e);
            html! {}
        }
    };

    html! {
        <div class="mt-4 bg-white relative overflow-hidden">
            <div class="relative z-10">
                <SectionHeader title={html! { "Lokahiの特徴" }} />
                <div class="mt-8 md:mt-12">
                    <div class={classes!("w-full", "max-w-4xl", "mx-auto", "duration-1000", fade_in_up(visible))}>
                        { slideshow }
                    </div>
                </div>
                <br />
                <div ref={node_ref} class="text-base md:text-xl leading-relaxed text-center max-w-3xl mx-auto space-y-6 px-4">
                    { for FEATURES.iter().map(|feature| html! {
                        <div
                            class={classes!(
                                "bg-white", "rounded-lg", "p-6", "shadow-md", "border", "border-[#7fbcd1]/20", "hover:shadow-lg",
                                fade_in_up(visible),
                            )}
                            style={transition_delay(feature.delay_ms)}
                        >
                            <span class="text-[#7fbcd1] font-bold text-lg">{ feature.marker }</span>
                            { multiline(feature.title) }
                            <br />
                            <br />
                            <span class="text-gray-700 text-sm md:text-base">
                                { multiline(feature.body) }
                                {
                                    if let Some(highlight) = feature.highlight {
                                        html! {
                                            <>
                                                <br />
                                                <span class="bg-[#7fbcd1]/10 px-2 py-1 rounded inline-block mt-1">
                                                    { multiline(highlight) }
                                                </span>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(BenefitsSection)]
fn benefits_section(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_visibility(node_ref.clone(), CONTENT_TRIGGER) || props.revealed;

    html! {
        <section id="concept" class="py-16 md:py-24 bg-white">
            <SectionHeader title={html! { "Lokahiで働くことで得られる事" }} subtitle="あなたらしい働き方" />
            <div class="max-w-6xl mx-auto px-4">
                <div ref={node_ref} class="space-y-8">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <div
                            class={classes!("bg-white", "p-8", "rounded-lg", "shadow", fade_in_up(visible))}
                            style={transition_delay(benefit.delay_ms)}
                        >
                            <h3 class="text-2xl mb-4 font-bold">{ benefit.title }</h3>
                            <div class="flex flex-col md:flex-row gap-4 md:gap-6">
                                <div class="w-full md:w-[400px] flex-shrink-0">
                                    <img
                                        src={benefit.image}
                                        alt="スタッフの様子"
                                        width="400"
                                        height="300"
                                        loading="lazy"
                                        class="w-full h-[300px] rounded-sm object-cover"
                                    />
                                </div>
                                <p class="text-base md:text-lg leading-relaxed">{ benefit.body }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(DailyScheduleSection)]
fn daily_schedule_section() -> Html {
    html! {
        <section class="py-12 md:py-16 bg-white relative overflow-hidden">
            <div class="relative z-10">
                <SectionHeader title={html! { "1日の流れ（早番の場合）" }} />
                <div class="max-w-4xl mx-auto px-4">
                    <div class="space-y-6">
                        { for EARLY_SHIFT.iter().map(|entry| html! {
                            <div class="flex items-start gap-6 group hover:bg-gray-50 p-4 transition-all duration-300">
                                <div class="w-24 flex-shrink-0">
                                    <span class="text-[#7fbcd1] font-medium text-sm">{ entry.time }</span>
                                </div>
                                <div class="flex-grow">
                                    <div class="text-gray-800 text-sm font-medium whitespace-pre-line">{ entry.activity }</div>
                                    {
                                        match entry.note {
                                            Some(note) => html! { <div class="text-xs text-gray-500 mt-1 italic">{ note }</div> },
                                            None => html! {},
                                        }
                                    }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StaffCardProps {
    image: &'static str,
    name: &'static str,
    position: &'static str,
    message: &'static str,
}

#[function_component(StaffCard)]
fn staff_card(props: &StaffCardProps) -> Html {
    html! {
        <div class="bg-[#f5f5f5] p-4 md:p-8 rounded-xl shadow-sm">
            <div class="bg-white/80 p-6 rounded-xl shadow-sm h-full flex flex-col">
                <div class="flex items-center space-x-2 mb-4">
                    <i class="fas fa-quote-left text-[#7fbcd1] text-xl"></i>
                </div>
                <div class="flex items-center mb-6">
                    <div class="w-24 h-24 md:w-28 md:h-28 overflow-hidden rounded-full border-4 border-white shadow-md mr-4 flex-shrink-0">
                        <img
                            src={props.image}
                            alt={format!("スタッフ{}", props.name)}
                            width="128"
                            height="128"
                            class="w-full h-full object-cover object-top"
                        />
                    </div>
                    <div>
                        <p class="font-bold text-lg">{ props.name }</p>
                        <p class="text-sm text-gray-600">{ props.position }</p>
                    </div>
                </div>
                <p class="text-gray-700 leading-relaxed mb-6 whitespace-pre-line">{ props.message }</p>
            </div>
        </div>
    }
}

#[function_component(StaffSection)]
fn staff_section() -> Html {
    html! {
        <section id="staff" class="py-16 md:py-24 bg-white">
            <SectionHeader title={html! { "スタッフ紹介" }} subtitle="働く仲間" />
            <div class="max-w-5xl mx-auto px-4">
                <div class="space-y-8">
                    { for STAFF.iter().map(|member| html! {
                        <StaffCard
                            image={member.image}
                            name={member.name}
                            position={member.position}
                            message={member.message}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

fn detail_group(group: &'static DetailGroup) -> Html {
    html! {
        <div>
            <h5 class="font-medium mb-2">{ group.heading }</h5>
            <ul class="list-disc pl-5 space-y-2 text-gray-600">
                { for group.items.iter().map(|item| html! { <li class="whitespace-pre-line">{ *item }</li> }) }
            </ul>
        </div>
    }
}

fn job_detail(detail: &'static JobDetail) -> Html {
    match *detail {
        JobDetail::Text(text) => html! { <p class="text-gray-600">{ text }</p> },
        JobDetail::Groups(groups) => html! {
            <div class="space-y-4">
                { for groups.iter().map(detail_group) }
            </div>
        },
        JobDetail::Roles(roles) => html! {
            <div class="space-y-8">
                { for roles.iter().map(|role| html! {
                    <div>
                        <h4 class="text-lg font-bold mb-4 text-[#7fbcd1]">{ role.role }</h4>
                        <div class="space-y-4 pl-4">
                            { for role.groups.iter().map(detail_group) }
                        </div>
                    </div>
                }) }
            </div>
        },
    }
}

#[function_component(JobDetailsSection)]
fn job_details_section() -> Html {
    html! {
        <section id="requirements" class="py-16 md:py-24 bg-white relative overflow-hidden">
            <div class="relative z-10">
                <SectionHeader title={html! { "募集要項" }} subtitle="採用情報" />
                <div class="max-w-6xl mx-auto px-4">
                    <div class="bg-white rounded-lg shadow-lg overflow-hidden">
                        { for JOB_DETAILS.iter().enumerate().map(|(index, row)| html! {
                            <div class={classes!(
                                "flex", "flex-col", "md:flex-row", "border-b", "border-gray-100",
                                if index % 2 == 0 { "bg-white" } else { "bg-gray-50" },
                            )}>
                                <div class="w-full md:w-1/4 p-4 md:p-6">
                                    <h4 class="font-bold text-gray-800">{ row.title }</h4>
                                </div>
                                <div class="w-full md:w-3/4 p-4 md:p-6">
                                    { job_detail(&row.detail) }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(WantedSection)]
fn wanted_section(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_visibility(node_ref.clone(), SECTION_TRIGGER) || props.revealed;

    html! {
        <section class="py-16 md:py-24 bg-white">
            <SectionHeader title={html! { "求める人材" }} subtitle="私たちと一緒に働きませんか？" />
            <div class="max-w-6xl mx-auto px-4">
                <div ref={node_ref} class={classes!("space-y-6", fade_in_up(visible))}>
                    { for WANTED.iter().enumerate().map(|(index, wanted)| html! {
                        <div class="bg-white rounded-lg p-6 md:p-8 shadow-sm hover:shadow-md transition-all duration-300">
                            <div class="flex items-start space-x-4">
                                <div class="flex-shrink-0 mt-1">
                                    <div class="w-6 h-6 bg-[#7fbcd1]/20 rounded-full flex items-center justify-center">
                                        <span class="text-black text-sm font-medium">{ (index + 1).to_string() }</span>
                                    </div>
                                </div>
                                <div class="space-y-2 w-full">
                                    <p class="text-base md:text-lg font-bold text-black">{ wanted.main }</p>
                                    <p class="text-sm md:text-base text-gray-600">{ wanted.sub }</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(QaSection)]
fn qa_section(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_visibility(node_ref.clone(), SECTION_TRIGGER) || props.revealed;

    html! {
        <section ref={node_ref} id="qa" class="py-16 md:py-24 bg-white relative overflow-hidden">
            <div class="relative z-10">
                <SectionHeader title={html! { "よくあるご質問" }} subtitle="Q&A" />
                <div class="max-w-4xl mx-auto px-4 mb-8">
                    <p class="text-center text-base text-gray-700 leading-relaxed">{ multiline(QA_INTRO) }</p>
                </div>
                <div class="max-w-6xl mx-auto px-4">
                    <div class="space-y-4">
                        { for QA_ITEMS.iter().enumerate().map(|(index, qa)| html! {
                            <details
                                class={classes!("bg-white", "p-6", "rounded-lg", "shadow-sm", "group", "hover:shadow-md", fade_in_up(visible))}
                                style={transition_delay(index as u32 * 150)}
                            >
                                <summary class="text-lg md:text-xl font-medium cursor-pointer list-none flex justify-between items-center text-gray-800">
                                    <span class="flex items-center gap-3">
                                        <span class="text-[#7fbcd1] font-bold">{"Q."}</span>
                                        { qa.question }
                                    </span>
                                    <span class="transform group-open:rotate-180 transition-transform duration-300 text-[#7fbcd1]">{"▼"}</span>
                                </summary>
                                <div class="mt-6 pl-8 text-gray-600 leading-relaxed">
                                    <div class="flex">
                                        <span class="text-[#7fbcd1] font-bold text-lg mr-3">{"A."}</span>
                                        <p class="text-gray-700">{ qa.answer }</p>
                                    </div>
                                </div>
                            </details>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(OwnerMessage)]
fn owner_message() -> Html {
    html! {
        <section id="owner-message" class="py-12 md:py-24 bg-white">
            <div class="relative z-10">
                <SectionHeader title={html! { "オーナー挨拶" }} subtitle="Message from Owner" />
                <div class="max-w-5xl mx-auto px-4 sm:px-6">
                    <div class="bg-white p-4 md:p-12 rounded-lg shadow-lg">
                        <div class="flex flex-col md:flex-row gap-8 md:gap-12">
                            <div class="md:w-1/3 flex flex-col items-center text-center">
                                <div class="w-32 h-32 md:w-64 md:h-64 overflow-hidden rounded-full border-4 border-white shadow-md mb-6">
                                    <img
                                        src={OWNER_IMAGE}
                                        alt="オーナーの写真"
                                        width="500"
                                        height="500"
                                        class="w-full h-full object-cover object-top"
                                    />
                                </div>
                                <h3 class="text-xl font-bold mb-2">{"オーナー"}</h3>
                                <p class="text-gray-600 mb-8 md:mb-0">{ OWNER_NAME }</p>
                            </div>
                            <div class="md:w-2/3 space-y-6 md:space-y-8 text-gray-800 text-base md:text-lg leading-relaxed">
                                { for OWNER_MESSAGE.iter().map(|paragraph| html! {
                                    <p class="whitespace-pre-line">
                                        {
                                            match paragraph.lead {
                                                Some(lead) => html! { <><span class="font-bold text-[#7fbcd1]">{ lead }</span><br /></> },
                                                None => html! {},
                                            }
                                        }
                                        { paragraph.text }
                                    </p>
                                }) }
                                <p class="font-bold text-[#7fbcd1]">{ multiline(OWNER_CLOSING) }</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    html! {
        <footer class="bg-[#333] text-white py-8 md:py-16 px-4 relative">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-2 gap-6 md:gap-8 pb-20">
                    <div>
                        <h3 class="text-xl mb-4 flex items-center">
                            <i class="fab fa-instagram text-2xl mr-2"></i>
                            {"Instagram"}
                        </h3>
                        <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="text-2xl hover:text-[#4a90e2]">
                            <i class="fab fa-instagram"></i>
                            <span class="text-sm ml-2">{"サロン公式"}</span>
                        </a>
                    </div>
                    <div>
                        <h3 class="text-xl mb-4">{"店舗情報"}</h3>
                        <p>{ format!("住所：{}", SHOP_ADDRESS) }</p>
                        <p>{ format!("電話：{}", SHOP_PHONE) }</p>
                        <p>{ format!("営業時間：{}", SHOP_HOURS) }</p>
                        <div class="mt-4 w-full h-[400px] rounded-lg overflow-hidden shadow-lg">
                            <iframe
                                src={MAP_EMBED_URL}
                                class="w-full h-full"
                                style="border: 0;"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Lokahiの所在地"
                                aria-label="Lokahiの所在地を示すGoogleマップ"
                            ></iframe>
                        </div>
                    </div>
                </div>
            </div>
            // Sticky apply button
            <a
                href={LINE_APPLY_URL}
                target="_blank"
                rel="noopener noreferrer"
                class="fixed bottom-0 left-0 right-0 z-40 bg-[#06c755] text-white py-4 shadow-lg hover:bg-[#059144] transition-all duration-300 flex items-center justify-center space-x-2 w-full"
            >
                <span class="text-base font-medium">{"応募する"}</span>
            </a>
        </footer>
    }
}
