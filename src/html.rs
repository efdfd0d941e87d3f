use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{endpoints, theme::PageTheme};

// The classes below are defined in static/main.css and take their colours
// from the theme variables.

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

pub const BUTTON_SECONDARY_STYLE: &str = "button button-secondary";

pub const BUTTON_DELETE_STYLE: &str = "button-link button-delete";

pub const BUTTON_ICON_STYLE: &str = "button button-icon";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";
pub const INLINE_FORM_STYLE: &str = "inline-form";

// Table styles
pub const TABLE_STYLE: &str = "score-table";

pub const TABLE_HEADER_STYLE: &str = "score-table-header";

pub const TABLE_ROW_STYLE: &str = "score-table-row";

pub const TABLE_CELL_STYLE: &str = "score-table-cell";

// Card and page containers
pub const CARD_STYLE: &str = "card";

pub const PAGE_CONTAINER_STYLE: &str = "page";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

/// The HTML document shell shared by every page.
///
/// `theme` sets the CSS colour variables and the `data-theme` attribute that
/// the stylesheet uses to pick light or dark text styles.
pub fn base(
    title: &str,
    theme: &PageTheme,
    head_elements: &[HeadElement],
    content: &Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" data-theme=(theme.mode.as_str())
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Scoreboard" }
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg" {}

                style id="theme-vars" { (PreEscaped(theme.css())) }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body hx-ext="response-targets"
            {
                (content)

                // Alert container for out-of-band swaps
                div id="alert-container" class="alert-container" {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class=(PAGE_CONTAINER_STYLE)
        {
            div class="error-page"
            {
                h1 class="error-code" { (header) }

                p class="error-description" { (description) }

                p class="error-fix" { (fix) }

                a href=(endpoints::ROOT) class=(BUTTON_PRIMARY_STYLE)
                {
                    "Back to the scoreboard"
                }
            }
        }
    );

    base(title, &PageTheme::default(), &[], &content)
}

/// A centred card with a title, used for the log-in form.
pub fn form_card(form_title: &str, form: &Markup) -> Markup {
    html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            a href=(endpoints::ROOT) class="brand"
            {
                "🏆 Scoreboard"
            }

            div class=(CARD_STYLE)
            {
                h1 class="card-title" { (form_title) }

                (form)
            }
        }
    }
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="spinner"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Format a statistic with one decimal place, e.g. "2.5".
pub fn format_stat(value: f64) -> String {
    format!("{value:.1}")
}
