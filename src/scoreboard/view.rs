//! The `#scoreboard` section: category tabs, statistics, edit controls, the
//! table and the chart.
//!
//! Every scoreboard mutation answers with this section so that htmx can swap
//! it in place of the old one.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_scoreboard_url},
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_TEXT_INPUT_STYLE, format_stat},
    score::{CategoryFilter, GENERAL_LABEL, ScoreBoard, category_icon},
    scoreboard::{
        chart::{chart_view, score_chart},
        table::{ALERT_TARGET, SCOREBOARD_TARGET, score_table},
    },
    stats::Summary,
};

/// What the scoreboard section shows.
pub(super) struct ScoreboardView<'a> {
    pub scores: &'a ScoreBoard,
    pub filter: &'a CategoryFilter,
    pub edit_mode: bool,
}

pub(super) fn scoreboard_section(view: &ScoreboardView) -> Markup {
    let values = view.scores.values_for(view.filter);
    let summary = Summary::from_values(&values);

    html! {
        section id="scoreboard" class="scoreboard"
        {
            (category_tabs(view.scores, view.filter))

            (stats_strip(view.filter, &summary))

            @if view.edit_mode {
                (edit_controls(view.filter))
            }

            div class="table-container"
            {
                (score_table(view.scores, view.filter, view.edit_mode))
            }

            @if view.scores.is_empty() {
                p class="empty-chart" { "Add a user to see the chart." }
            } @else {
                @let labels = view.scores.users().map(str::to_owned).collect();
                (chart_view(&score_chart(labels, &values, &summary)))
            }
        }
    }
}

fn category_tab(label: &str, url: &str, is_active: bool) -> Markup {
    html! {
        a
            href=(url)
            role="tab"
            aria-selected=(is_active)
            class=(if is_active { "tab tab-active" } else { "tab" })
        {
            span class="tab-icon" aria-hidden="true" { (category_icon(label)) }
            (label)
        }
    }
}

fn category_tabs(scores: &ScoreBoard, filter: &CategoryFilter) -> Markup {
    let general = CategoryFilter::General;

    html! {
        nav class="tabs" role="tablist" aria-label="Categories"
        {
            (category_tab(GENERAL_LABEL, &format_scoreboard_url(&general), *filter == general))

            @for category in scores.categories() {
                @let tab_filter = CategoryFilter::Category(category);
                (category_tab(
                    tab_filter.label(),
                    &format_scoreboard_url(&tab_filter),
                    *filter == tab_filter,
                ))
            }
        }
    }
}

fn stat_item(label: &str, value: &str) -> Markup {
    html! {
        div class="stat"
        {
            dt class="stat-label" { (label) }
            dd class="stat-value" { (value) }
        }
    }
}

fn stats_strip(filter: &CategoryFilter, summary: &Summary) -> Markup {
    let format_bound =
        |bound: Option<i64>| bound.map_or_else(|| "–".to_owned(), |value| value.to_string());

    html! {
        dl class="stats" aria-label=(format!("{} statistics", filter.label()))
        {
            (stat_item("Mean", &format_stat(summary.mean)))
            (stat_item("Median", &format_stat(summary.median)))
            (stat_item("Min", &format_bound(summary.min)))
            (stat_item("Max", &format_bound(summary.max)))
            (stat_item("Users", &summary.count.to_string()))
        }
    }
}

fn name_form(endpoint: &str, label: &str, placeholder: &str, filter: &CategoryFilter) -> Markup {
    html! {
        form
            hx-post=(endpoint)
            hx-target=(SCOREBOARD_TARGET)
            hx-swap="outerHTML"
            hx-target-error=(ALERT_TARGET)
            class="add-form"
        {
            input type="hidden" name="view" value=[filter.as_query()];

            input
                type="text"
                name="name"
                placeholder=(placeholder)
                aria-label=(placeholder)
                required
                class=(FORM_TEXT_INPUT_STYLE);

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (label) }
        }
    }
}

fn edit_controls(filter: &CategoryFilter) -> Markup {
    html! {
        div class="edit-controls"
        {
            (name_form(endpoints::USERS, "Add user", "User name", filter))
            (name_form(endpoints::CATEGORIES, "Add category", "Category name", filter))

            form
                hx-post=(endpoints::RESET_SCORES)
                hx-confirm="Discard every change and go back to the original scores?"
                hx-target=(SCOREBOARD_TARGET)
                hx-swap="outerHTML"
                hx-target-error=(ALERT_TARGET)
                class="add-form"
            {
                input type="hidden" name="view" value=[filter.as_query()];

                button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Reset scores" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        score::{CategoryFilter, ScoreBoard},
        test_utils::assert_valid_html,
    };

    use super::{ScoreboardView, scoreboard_section};

    fn scores() -> ScoreBoard {
        serde_json::from_str(
            r#"{"Alice": {"Atividade": 15, "Bonus": 10}, "Bob": {"Atividade": -10, "Bonus": 8}}"#,
        )
        .unwrap()
    }

    fn render(scores: &ScoreBoard, filter: &CategoryFilter, edit_mode: bool) -> Html {
        let html = Html::parse_fragment(
            &scoreboard_section(&ScoreboardView {
                scores,
                filter,
                edit_mode,
            })
            .into_string(),
        );
        assert_valid_html(&html);
        html
    }

    fn stat_values(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("dd.stat-value").unwrap())
            .map(|dd| dd.text().collect::<String>())
            .collect()
    }

    #[test]
    fn tabs_list_general_then_categories() {
        let html = render(&scores(), &CategoryFilter::General, false);

        let tabs: Vec<String> = html
            .select(&Selector::parse("a[role=tab]").unwrap())
            .map(|tab| tab.text().collect::<String>())
            .collect();
        assert_eq!(tabs, vec!["📊General", "💪Atividade", "🎁Bonus"]);
    }

    #[test]
    fn active_tab_is_selected() {
        let filter = CategoryFilter::Category("Bonus".to_owned());
        let html = render(&scores(), &filter, false);

        let selected: Vec<&str> = html
            .select(&Selector::parse("a[role=tab][aria-selected=true]").unwrap())
            .filter_map(|tab| tab.value().attr("href"))
            .collect();
        assert_eq!(selected, vec!["/?category=Bonus"]);
    }

    #[test]
    fn stats_follow_the_filter() {
        let html = render(&scores(), &CategoryFilter::General, false);
        assert_eq!(stat_values(&html), vec!["11.5", "11.5", "-2", "25", "2"]);

        let html = render(&scores(), &CategoryFilter::Category("Bonus".to_owned()), false);
        assert_eq!(stat_values(&html), vec!["9.0", "9.0", "8", "10", "2"]);
    }

    #[test]
    fn empty_board_has_placeholder_stats() {
        let html = render(&ScoreBoard::default(), &CategoryFilter::General, false);

        assert_eq!(stat_values(&html), vec!["0.0", "0.0", "–", "–", "0"]);
        assert_eq!(html.select(&Selector::parse("script").unwrap()).count(), 0);
    }

    #[test]
    fn read_only_section_has_no_mutation_forms() {
        let html = render(&scores(), &CategoryFilter::General, false);

        assert_eq!(html.select(&Selector::parse("form").unwrap()).count(), 0);
        assert_eq!(html.select(&Selector::parse("#score-chart").unwrap()).count(), 1);
    }

    #[test]
    fn edit_section_has_add_and_reset_forms() {
        let html = render(&scores(), &CategoryFilter::General, true);

        for endpoint in [
            endpoints::USERS,
            endpoints::CATEGORIES,
            endpoints::RESET_SCORES,
        ] {
            let selector = Selector::parse(&format!("form[hx-post=\"{endpoint}\"]")).unwrap();
            assert_eq!(
                html.select(&selector).count(),
                1,
                "want one form posting to {endpoint}"
            );
        }

        let reset = Selector::parse(&format!("form[hx-post=\"{}\"]", endpoints::RESET_SCORES))
            .unwrap();
        let reset = html.select(&reset).next().unwrap();
        assert!(reset.value().attr("hx-confirm").is_some());
    }
}
