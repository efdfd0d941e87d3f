//! The score table, either one column per category with totals or a single
//! category with adjust buttons.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_ICON_STYLE, INLINE_FORM_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE,
    },
    score::{CategoryFilter, ScoreBoard, category_icon},
};

/// The element that mutation responses replace.
pub(super) const SCOREBOARD_TARGET: &str = "#scoreboard";
/// The element that error alerts are swapped into.
pub(super) const ALERT_TARGET: &str = "#alert-container";

fn score_class(score: i64) -> &'static str {
    if score < 0 {
        "score score-negative"
    } else {
        "score score-positive"
    }
}

fn view_input(filter: &CategoryFilter) -> Markup {
    html! {
        input type="hidden" name="view" value=[filter.as_query()];
    }
}

/// A text box that saves the score as soon as it is changed.
fn score_input(user: &str, category: &str, score: i64, filter: &CategoryFilter) -> Markup {
    html! {
        form
            hx-post=(endpoints::SCORES)
            hx-trigger="change"
            hx-target=(SCOREBOARD_TARGET)
            hx-swap="outerHTML"
            hx-target-error=(ALERT_TARGET)
            class=(INLINE_FORM_STYLE)
        {
            input type="hidden" name="user" value=(user);
            input type="hidden" name="category" value=(category);
            (view_input(filter))

            input
                type="text"
                inputmode="numeric"
                name="value"
                value=(score)
                required
                aria-label=(format!("{category} score for {user}"))
                class="score-input";
        }
    }
}

fn adjust_button(user: &str, category: &str, delta: i64, filter: &CategoryFilter) -> Markup {
    let label = if delta < 0 {
        format!("−{}", delta.unsigned_abs())
    } else {
        format!("+{delta}")
    };

    html! {
        form
            hx-post=(endpoints::ADJUST_SCORE)
            hx-target=(SCOREBOARD_TARGET)
            hx-swap="outerHTML"
            hx-target-error=(ALERT_TARGET)
            class=(INLINE_FORM_STYLE)
        {
            input type="hidden" name="user" value=(user);
            input type="hidden" name="category" value=(category);
            input type="hidden" name="delta" value=(delta);
            (view_input(filter))

            button
                type="submit"
                class=(BUTTON_ICON_STYLE)
                aria-label=(format!("{label} {category} for {user}"))
            {
                (label)
            }
        }
    }
}

fn delete_user_button(user: &str, filter: &CategoryFilter) -> Markup {
    html! {
        form
            hx-post=(endpoints::DELETE_USER)
            hx-confirm=(format!("Remove {user} and all of their scores?"))
            hx-target=(SCOREBOARD_TARGET)
            hx-swap="outerHTML"
            hx-target-error=(ALERT_TARGET)
            class=(INLINE_FORM_STYLE)
        {
            input type="hidden" name="user" value=(user);
            (view_input(filter))

            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
        }
    }
}

fn delete_category_button(category: &str, filter: &CategoryFilter) -> Markup {
    html! {
        form
            hx-post=(endpoints::DELETE_CATEGORY)
            hx-confirm=(format!("Remove the category {category} from every user?"))
            hx-target=(SCOREBOARD_TARGET)
            hx-swap="outerHTML"
            hx-target-error=(ALERT_TARGET)
            class=(INLINE_FORM_STYLE)
        {
            input type="hidden" name="category" value=(category);
            (view_input(filter))

            button
                type="submit"
                class=(BUTTON_DELETE_STYLE)
                aria-label=(format!("Delete category {category}"))
            {
                "×"
            }
        }
    }
}

/// The table for `filter`, with edit controls when `edit_mode` is set.
pub(super) fn score_table(scores: &ScoreBoard, filter: &CategoryFilter, edit_mode: bool) -> Markup {
    match filter {
        CategoryFilter::General => aggregate_table(scores, filter, edit_mode),
        CategoryFilter::Category(category) => {
            category_table(scores, category, filter, edit_mode)
        }
    }
}

fn empty_row(column_count: usize) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td colspan=(column_count) class="empty-table"
            {
                "No users yet."
            }
        }
    }
}

fn aggregate_table(scores: &ScoreBoard, filter: &CategoryFilter, edit_mode: bool) -> Markup {
    let categories = scores.categories();
    let column_count = categories.len() + 2 + usize::from(edit_mode);

    html! {
        table class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" { "User" }

                    @for category in &categories {
                        th scope="col"
                        {
                            span class="category-heading"
                            {
                                (category_icon(category)) " " (category)
                            }

                            @if edit_mode {
                                (delete_category_button(category, filter))
                            }
                        }
                    }

                    th scope="col" { "Total" }

                    @if edit_mode {
                        th scope="col" { "Actions" }
                    }
                }
            }

            tbody
            {
                @for user in scores.users() {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        th scope="row" class=(TABLE_CELL_STYLE) { (user) }

                        @for category in &categories {
                            @let score = scores.score(user, category);
                            td class=(TABLE_CELL_STYLE)
                            {
                                @if edit_mode {
                                    (score_input(user, category, score, filter))
                                } @else {
                                    span class=(score_class(score)) { (score) }
                                }
                            }
                        }

                        @let total = scores.total(user);
                        td class=(TABLE_CELL_STYLE)
                        {
                            span class=(score_class(total)) data-total { (total) }
                        }

                        @if edit_mode {
                            td class=(TABLE_CELL_STYLE) { (delete_user_button(user, filter)) }
                        }
                    }
                }

                @if scores.is_empty() {
                    (empty_row(column_count))
                }
            }
        }
    }
}

fn category_table(
    scores: &ScoreBoard,
    category: &str,
    filter: &CategoryFilter,
    edit_mode: bool,
) -> Markup {
    let column_count = 2 + usize::from(edit_mode);

    html! {
        table class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" { "User" }
                    th scope="col" { (category_icon(category)) " " (category) }

                    @if edit_mode {
                        th scope="col" { "Actions" }
                    }
                }
            }

            tbody
            {
                @for user in scores.users() {
                    @let score = scores.score(user, category);
                    tr class=(TABLE_ROW_STYLE)
                    {
                        th scope="row" class=(TABLE_CELL_STYLE) { (user) }

                        td class=(TABLE_CELL_STYLE)
                        {
                            @if edit_mode {
                                div class="score-adjuster"
                                {
                                    (adjust_button(user, category, -1, filter))
                                    (score_input(user, category, score, filter))
                                    (adjust_button(user, category, 1, filter))
                                }
                            } @else {
                                span class=(score_class(score)) { (score) }
                            }
                        }

                        @if edit_mode {
                            td class=(TABLE_CELL_STYLE) { (delete_user_button(user, filter)) }
                        }
                    }
                }

                @if scores.is_empty() {
                    (empty_row(column_count))
                }
            }
        }
    }
}
