//! Product-detail image gallery.

use std::time::Duration;

use artisan_ui::gallery::{DIMMED_OPACITY, GALLERY_FADE_MS};
use artisan_ui::ImageGallery;
use leptos::prelude::*;

use crate::browser::now_ms;

/// `#mainImage` with a `.gallery-thumbnail` strip when there is more than
/// one image. Clicking a thumbnail swaps the main image and dims it
/// briefly.
#[component]
pub fn ProductGallery(images: Vec<String>, alt: String) -> impl IntoView {
    let gallery = RwSignal::new(ImageGallery::new(images.clone()));

    let select = move |index: usize| {
        let mut selected = false;
        gallery.update(|g| selected = g.select(index, now_ms()));
        if selected {
            set_timeout(
                move || {
                    gallery.try_update(|g| g.settle(now_ms()));
                },
                Duration::from_millis(GALLERY_FADE_MS),
            );
        }
    };

    let thumbnails = (images.len() > 1).then(|| {
        let strip = images
            .into_iter()
            .enumerate()
            .map(|(index, src)| {
                view! {
                    <img
                        class=move || {
                            if gallery.with(|g| g.is_active(index)) {
                                "gallery-thumbnail active"
                            } else {
                                "gallery-thumbnail"
                            }
                        }
                        src=src
                        alt=alt.clone()
                        on:click=move |_| select(index)
                    />
                }
            })
            .collect_view();
        view! { <div class="gallery-thumbnails">{strip}</div> }
    });

    view! {
        <div class="product-gallery">
            <img
                id="mainImage"
                class="main-image"
                src=move || gallery.with(|g| g.main_image().unwrap_or_default().to_string())
                alt=alt.clone()
                style:opacity=move || gallery.with(|g| if g.is_dimmed() { DIMMED_OPACITY } else { "1" })
            />
            {thumbnails}
        </div>
    }
}
