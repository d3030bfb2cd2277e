//! Inline SVG icons, stroke style, sized by the `class` prop.

use leptos::prelude::*;

macro_rules! icon {
    ($name:ident, $($d:expr),+ $(,)?) => {
        #[component]
        pub fn $name(#[prop(optional)] class: &'static str) -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=class
                >
                    $(<path d=$d />)+
                </svg>
            }
        }
    };
}

icon!(Plus, "M12 5v14", "M5 12h14");
icon!(Pencil, "M17 3a2.8 2.8 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z");
icon!(
    Trash,
    "M3 6h18",
    "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
    "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
);
icon!(Ban, "M4.9 4.9a10 10 0 1 0 14.2 14.2A10 10 0 0 0 4.9 4.9Z", "M4.9 4.9l14.2 14.2");
icon!(Check, "M20 6 9 17l-5-5");
icon!(
    LogOut,
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "M16 17l5-5-5-5",
    "M21 12H9",
);
icon!(
    Sun,
    "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z",
    "M12 2v2",
    "M12 20v2",
    "M4.9 4.9l1.4 1.4",
    "M17.7 17.7l1.4 1.4",
    "M2 12h2",
    "M20 12h2",
    "M4.9 19.1l1.4-1.4",
    "M17.7 6.3l1.4-1.4",
);
icon!(Moon, "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z");
icon!(
    BookOpen,
    "M2 4h6a4 4 0 0 1 4 4v12a3 3 0 0 0-3-3H2Z",
    "M22 4h-6a4 4 0 0 0-4 4v12a3 3 0 0 1 3-3h7Z",
);
