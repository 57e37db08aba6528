//! Inline SVG icons (24x24 viewBox, stroke style).
//!
//! Path data is passed to [`Icon`] as a constant; multiple subpaths are
//! joined into a single `d` attribute.

use leptos::prelude::*;

pub const CHEVRON_DOWN: &str = "m6 9 6 6 6-6";
pub const CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";
pub const CHECK: &str = "M20 6 9 17l-5-5";
pub const X: &str = "M18 6 6 18M6 6l12 12";
pub const PENCIL: &str = "M17 3a2.828 2.828 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5L17 3z";
pub const ROTATE_CCW: &str = "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8M3 3v5h5";
pub const EYE: &str = "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7zM12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z";
pub const EYE_OFF: &str = "M9.88 9.88a3 3 0 1 0 4.24 4.24M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61M2 2l20 20";
pub const LOCK: &str = "M5 11h14v10H5zM7 11V7a5 5 0 0 1 10 0v4";
pub const MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zm18 2-10 7L2 6";
pub const INSTAGRAM: &str = "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zm9.5 4.5h.01M16 11.37a4 4 0 1 1-7.91 1.26A4 4 0 0 1 16 11.37z";
pub const GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2";
pub const CAT: &str = "M12 5c.67 0 1.35.09 2 .26 1.78-2 5.03-2.84 6.42-2.26 1.4.58-.42 7-.42 7 .57 1.07 1 2.24 1 3.44C21 17.9 16.97 21 12 21s-9-3.1-9-7.56c0-1.2.43-2.37 1-3.44 0 0-1.82-6.42-.42-7 1.39-.58 4.64.25 6.42 2.26A9.04 9.04 0 0 1 12 5zM8 14v.5M16 14v.5M11.25 16.25h1.5L12 17l-.75-.75z";
pub const GUITAR: &str = "m11.9 12.1 4.51-4.5M20.1 2.3a1 1 0 0 0-1.41 0l-1.14 1.13a1 1 0 0 0 0 1.41l1.61 1.61a1 1 0 0 0 1.41 0l1.14-1.13a1 1 0 0 0 0-1.41zM6 16l2 2M8.2 9.9C8.7 8.8 9.8 8 11 8c2.8 0 5 2.2 5 5 0 1.2-.8 2.3-1.9 2.8l-.9.4A2 2 0 0 0 12 18a4 4 0 0 1-4 4c-3.3 0-6-2.7-6-6a4 4 0 0 1 4-4 2 2 0 0 0 1.8-1.2z";
pub const MUSIC: &str = "M9 18V5l12-2v13M9 18a3 3 0 1 1-6 0 3 3 0 0 1 6 0zm12-2a3 3 0 1 1-6 0 3 3 0 0 1 6 0z";
pub const GRADUATION_CAP: &str = "M22 10 12 5 2 10l10 5 10-5zM6 12v5c3 3 9 3 12 0v-5";
pub const PLANE: &str = "M17.8 19.2 16 11l3.5-3.5C21 6 21.5 4 21 3c-1-.5-3 0-4.5 1.5L13 8 4.8 6.2c-.5-.1-.9.1-1.1.5l-.3.5c-.2.5-.1 1 .3 1.3L9 12l-2 3H4l-1 1 3 2 2 3 1-1v-3l3-2 3.5 5.3c.3.4.8.5 1.3.3l.5-.2c.4-.3.6-.7.5-1.2z";
pub const COFFEE: &str = "M17 8h1a4 4 0 1 1 0 8h-1M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V8zm3-6v2m4-2v2m4-2v2";

/// Stroke-style icon rendered from one of the path constants above.
#[component]
pub fn Icon(path: &'static str, #[prop(default = "w-5 h-5")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}
