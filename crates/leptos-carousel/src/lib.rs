//! Leptos Carousel
//!
//! Seamless infinite horizontal scroller for Leptos.
//! Lays out identical copies of the item list in one flex track and slides
//! the track exactly one copy width per animation cycle.

use leptos::prelude::*;

pub mod layout;

pub use layout::{
    copy_offset_percent, track_offset_percent, track_slots, translation_percent, CarouselConfig,
    Direction, TrackSlot,
};

pub const VIEWPORT_CLASS: &str = "carousel-viewport";
pub const TRACK_CLASS: &str = "carousel-track";
pub const COPY_CLASS: &str = "carousel-copy";

const FORWARD_KEYFRAMES: &str = "carousel-slide-forward";
const REVERSE_KEYFRAMES: &str = "carousel-slide-reverse";

/// Duration used when the track style does not set `--carousel-duration`.
pub const DEFAULT_DURATION_SECS: f64 = 25.0;

/// Stylesheet for every carousel on the page. Inject once in a `<style>`
/// tag.
///
/// CSS `translateX` percentages are relative to the track itself, which is
/// `copies` copy widths wide, so the one-copy sweep is `span / copies` of
/// the track. The `--carousel-copies` var keeps one keyframes block correct
/// for any copy count.
pub fn carousel_css() -> String {
    let span = Direction::Forward.cycle_span_percent();
    format!(
        "\
.{viewport} {{
  width: 100%;
  overflow: hidden;
}}
.{track} {{
  display: flex;
  width: max-content;
  animation-duration: var(--carousel-duration, {default_duration}s);
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}}
.{track}:hover {{
  animation-play-state: paused;
}}
.{copy} {{
  display: flex;
  flex: none;
}}
@keyframes {forward} {{
  from {{ transform: translateX(0); }}
  to {{ transform: translateX(calc({span}% / var(--carousel-copies, 2))); }}
}}
@keyframes {reverse} {{
  from {{ transform: translateX(calc({span}% / var(--carousel-copies, 2))); }}
  to {{ transform: translateX(0); }}
}}
",
        viewport = VIEWPORT_CLASS,
        track = TRACK_CLASS,
        copy = COPY_CLASS,
        forward = FORWARD_KEYFRAMES,
        reverse = REVERSE_KEYFRAMES,
        span = span,
        default_duration = DEFAULT_DURATION_SECS,
    )
}

/// Renders `items` as `config.copies` identical flex copies inside one
/// animated track.
///
/// Purely presentational: no fetching, no state. The animation phase starts
/// at zero on every mount. An empty item list renders nothing.
#[component]
pub fn Carousel<T, IV, R>(items: Vec<T>, config: CarouselConfig, render: R) -> impl IntoView
where
    T: Send + Sync + 'static,
    IV: IntoView + 'static,
    R: Fn(&T) -> IV + Send + Sync + 'static,
{
    if items.is_empty() {
        return ().into_any();
    }

    let animation = match config.direction {
        Direction::Forward => FORWARD_KEYFRAMES,
        Direction::Reverse => REVERSE_KEYFRAMES,
    };
    let track_style = format!(
        "--carousel-copies: {}; --carousel-duration: {}s; animation-name: {};",
        config.copies, config.duration_secs, animation
    );

    view! {
        <div class=VIEWPORT_CLASS>
            <div class=TRACK_CLASS style=track_style>
                {(0..config.copies)
                    .map(|copy| {
                        // Copies past the first repeat content already on screen.
                        let hidden = (copy > 0).then_some("true");
                        view! {
                            <div class=COPY_CLASS aria-hidden=hidden>
                                {items.iter().map(&render).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_keyframes_block_serves_any_copy_count() {
        let css = carousel_css();
        assert!(css.contains("calc(-100% / var(--carousel-copies, 2))"));
        assert!(css.contains(FORWARD_KEYFRAMES));
        assert!(css.contains(REVERSE_KEYFRAMES));
    }

    #[test]
    fn reverse_keyframes_start_one_copy_back() {
        let css = carousel_css();
        let reverse_block = css
            .split("@keyframes carousel-slide-reverse")
            .nth(1)
            .unwrap();
        assert!(reverse_block.contains("from { transform: translateX(calc(-100%"));
        assert!(reverse_block.contains("to { transform: translateX(0)"));
    }

    #[test]
    fn hovering_pauses_the_track() {
        let css = carousel_css();
        assert!(css.contains(".carousel-track:hover"));
        assert!(css.contains("animation-play-state: paused"));
    }
}
