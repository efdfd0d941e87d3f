//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::{endpoints, html::BUTTON_SECONDARY_STYLE};

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
    /// Download links save a file instead of navigating.
    is_download: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "nav-link nav-link-current"
        } else {
            "nav-link"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
                download[self.is_download]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
    edit_mode: bool,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be marked as
    /// active and displayed differently in the HTML. In edit mode the bar
    /// offers the score downloads and a log out button, otherwise a link to
    /// the log-in page.
    pub fn new(active_endpoint: &str, edit_mode: bool) -> NavBar<'_> {
        let mut links = vec![Link {
            url: endpoints::ROOT,
            title: "Scoreboard",
            is_current: active_endpoint == endpoints::ROOT,
            is_download: false,
        }];

        if edit_mode {
            links.push(Link {
                url: endpoints::EXPORT_SCORES,
                title: "Save",
                is_current: false,
                is_download: true,
            });
            links.push(Link {
                url: endpoints::DOWNLOAD_SCORES,
                title: "Download",
                is_current: false,
                is_download: true,
            });
        } else {
            links.push(Link {
                url: endpoints::LOG_IN_VIEW,
                title: "Edit",
                is_current: active_endpoint == endpoints::LOG_IN_VIEW,
                is_download: false,
            });
        }

        NavBar { links, edit_mode }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="navbar"
            {
                a href=(endpoints::ROOT) class="brand"
                {
                    "🏆 Scoreboard"
                }

                div class="nav-links"
                {
                    @for link in self.links {
                        (link.into_html())
                    }

                    @if self.edit_mode {
                        button
                            type="button"
                            hx-post=(endpoints::LOG_OUT)
                            hx-confirm="Leave edit mode?"
                            hx-target-error="#alert-container"
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Log out"
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::NavBar;

    fn render(edit_mode: bool) -> Html {
        Html::parse_fragment(&NavBar::new(endpoints::ROOT, edit_mode).into_html().into_string())
    }

    fn link_urls(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("a.nav-link").unwrap())
            .filter_map(|link| link.value().attr("href").map(str::to_owned))
            .collect()
    }

    #[test]
    fn read_only_bar_links_to_log_in() {
        let html = render(false);

        assert_eq!(
            link_urls(&html),
            vec![endpoints::ROOT, endpoints::LOG_IN_VIEW]
        );
        assert!(
            html.select(&Selector::parse("button").unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn current_link_is_marked() {
        let html = render(false);

        let current: Vec<&str> = html
            .select(&Selector::parse("a[aria-current=page]").unwrap())
            .filter_map(|link| link.value().attr("href"))
            .collect();
        assert_eq!(current, vec![endpoints::ROOT]);
    }

    #[test]
    fn edit_bar_has_downloads_and_log_out() {
        let html = render(true);

        assert_eq!(
            link_urls(&html),
            vec![
                endpoints::ROOT,
                endpoints::EXPORT_SCORES,
                endpoints::DOWNLOAD_SCORES
            ]
        );

        let log_out = html
            .select(&Selector::parse("button[hx-post]").unwrap())
            .next()
            .expect("No log out button");
        assert_eq!(log_out.value().attr("hx-post"), Some(endpoints::LOG_OUT));
        assert!(log_out.value().attr("hx-confirm").is_some());
    }
}
