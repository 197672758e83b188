use std::time::Duration;

use artisan_ui::SlideControl;
use leptos::ev::TouchEvent;
use leptos::prelude::*;

use crate::browser::now_ms;
use crate::catalog::Slide;
use crate::context::use_config;

/// How often autoplay deadlines are checked.
const TICK: Duration = Duration::from_millis(100);

fn first_touch_x(ev: &TouchEvent) -> Option<i32> {
    ev.changed_touches().get(0).map(|touch| touch.client_x())
}

/// Autoplaying hero carousel with arrows, dots, hover pause and swipe.
#[component]
pub fn HeroSlider(slides: Vec<Slide>) -> impl IntoView {
    let config = use_config();
    let count = slides.len();
    let control = RwSignal::new(SlideControl::new(count, &config.slider, now_ms()));

    if count > 1 {
        let handle = set_interval_with_handle(
            move || {
                control.update(|c| {
                    c.tick(now_ms());
                });
            },
            TICK,
        )
        .ok();
        on_cleanup(move || {
            if let Some(handle) = handle {
                handle.clear();
            }
        });
    }

    let slide_class = move |index: usize| {
        if control.with(|c| c.slider().is_active(index)) {
            "slide active"
        } else {
            "slide"
        }
    };
    let dot_class = move |index: usize| {
        if control.with(|c| c.slider().is_active(index)) {
            "slider-dot active"
        } else {
            "slider-dot"
        }
    };

    view! {
        <section
            class="hero-slider"
            on:mouseenter=move |_| control.update(|c| c.hover_enter())
            on:mouseleave=move |_| control.update(|c| c.hover_leave(now_ms()))
            on:touchstart=move |ev: TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    control.update(|c| c.touch_start(x));
                }
            }
            on:touchend=move |ev: TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    control.update(|c| {
                        c.touch_end(x, now_ms());
                    });
                }
            }
        >
            {slides
                .into_iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <div class=move || slide_class(index)>
                            <img src=slide.image alt=slide.title.clone()/>
                            <div class="slide-caption">
                                <h2>{slide.title}</h2>
                                <p>{slide.subtitle}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <button
                type="button"
                class="slider-arrow prev"
                aria-label="Previous slide"
                on:click=move |_| control.update(|c| {
                    c.prev(now_ms());
                })
            >
                "‹"
            </button>
            <button
                type="button"
                class="slider-arrow next"
                aria-label="Next slide"
                on:click=move |_| control.update(|c| {
                    c.next(now_ms());
                })
            >
                "›"
            </button>
            <div class="slider-dots">
                {(0..count)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                class=move || dot_class(index)
                                aria-label=format!("Slide {}", index + 1)
                                on:click=move |_| control.update(|c| {
                                    c.go_to(index, now_ms());
                                })
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
