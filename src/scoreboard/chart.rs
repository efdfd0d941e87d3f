//! The bar chart of the scores in the current view.
//!
//! The chart is generated as ECharts JSON with charming and drawn by a small
//! inline script placed next to its container, so it is redrawn whenever htmx
//! swaps in a new scoreboard.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, VisualMap, VisualMapPiece},
    element::{
        AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType, Tooltip,
        Trigger,
    },
    series::{Line, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{html::format_stat, stats::Summary};

/// The HTML element ID of the chart container.
pub(super) const CHART_ID: &str = "score-chart";

const MEAN_COLOUR: &str = "#2563eb";
const MEDIAN_COLOUR: &str = "#d97706";

/// A flat dashed line at `value` across every bar.
fn reference_line(name: String, value: f64, len: usize, colour: &str) -> Line {
    Line::new()
        .name(name)
        .show_symbol(false)
        .item_style(ItemStyle::new().color(colour))
        .line_style(
            LineStyle::new()
                .color(colour)
                .width(2)
                .type_(LineStyleType::Dashed),
        )
        .data(vec![value; len])
}

/// Create a bar chart with one bar per user, coloured by sign, and reference
/// lines for the mean and median of `values`.
///
/// `labels` and `values` must be in the same order.
pub(super) fn score_chart(labels: Vec<String>, values: &[i64], summary: &Summary) -> Chart {
    let bar_values: Vec<f64> = values.iter().map(|&value| value as f64).collect();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(50)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        // Only the bars are coloured by sign, series 0 below.
        .visual_map(
            VisualMap::new()
                .show(false)
                .series_index(0)
                .pieces(vec![
                    VisualMapPiece::new().lte(-1).color("red"),
                    VisualMapPiece::new().gte(0).color("green"),
                ]),
        )
        .series(bar::Bar::new().name("Score").data(bar_values))
        .series(reference_line(
            format!("Mean: {}", format_stat(summary.mean)),
            summary.mean,
            values.len(),
            MEAN_COLOUR,
        ))
        .series(reference_line(
            format!("Median: {}", format_stat(summary.median)),
            summary.median,
            values.len(),
            MEDIAN_COLOUR,
        ))
}

/// The chart container and the script that draws `chart` into it.
pub(super) fn chart_view(chart: &Chart) -> Markup {
    // The options are embedded in a script tag, so a closing tag inside a
    // user or category name must not end the script early.
    let options = chart.to_string().replace("</", "<\\/");

    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{CHART_ID}");
            if (!chartDom || typeof echarts === "undefined") return;
            const previous = echarts.getInstanceByDom(chartDom);
            if (previous) previous.dispose();
            const chart = echarts.init(chartDom);
            chart.setOption({options});
            window.addEventListener('resize', () => chart.resize());
        }})();"#
    );

    html! {
        div id=(CHART_ID) class="score-chart" {}

        script { (PreEscaped(script)) }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::stats::Summary;

    use super::{CHART_ID, MEAN_COLOUR, MEDIAN_COLOUR, chart_view, score_chart};

    fn sample_chart() -> String {
        let values = [4, -2, 6];
        let summary = Summary::from_values(&values);

        score_chart(
            vec!["Ana".to_owned(), "Bo".to_owned(), "Cy".to_owned()],
            &values,
            &summary,
        )
        .to_string()
    }

    #[test]
    fn chart_has_one_bar_per_user() {
        let options = sample_chart();

        assert!(options.contains("\"Ana\""));
        assert!(options.contains("\"Bo\""));
        assert!(options.contains("\"Cy\""));
        assert!(options.contains("\"bar\""));
    }

    #[test]
    fn chart_labels_mean_and_median() {
        let options = sample_chart();

        assert!(options.contains("Mean: 2.7"), "got {options}");
        assert!(options.contains("Median: 4.0"), "got {options}");
    }

    #[test]
    fn chart_colours_scores_by_sign() {
        let options = sample_chart();

        assert!(options.contains("red"));
        assert!(options.contains("green"));
    }

    #[test]
    fn sign_colours_only_apply_to_bars() {
        let options: serde_json::Value = serde_json::from_str(&sample_chart()).unwrap();

        let visual_map = &options["visualMap"];
        let visual_map = visual_map.get(0).unwrap_or(visual_map);
        assert_eq!(visual_map["seriesIndex"].as_f64(), Some(0.0));

        let series = options["series"].as_array().unwrap();
        assert_eq!(series[0]["type"], "bar");
        assert_eq!(series[1]["type"], "line");
        assert_eq!(series[1]["lineStyle"]["color"], MEAN_COLOUR);
        assert_eq!(series[2]["type"], "line");
        assert_eq!(series[2]["lineStyle"]["color"], MEDIAN_COLOUR);
    }

    #[test]
    fn chart_view_escapes_closing_tags() {
        let values = [1];
        let chart = score_chart(
            vec!["</script><b>bold</b>".to_owned()],
            &values,
            &Summary::from_values(&values),
        );

        let markup = chart_view(&chart).into_string();

        assert!(!markup.contains("</script><b>"));
        let fragment = Html::parse_fragment(&markup);
        let container = Selector::parse(&format!("div#{CHART_ID}")).unwrap();
        assert_eq!(fragment.select(&container).count(), 1);
        assert_eq!(
            fragment.select(&Selector::parse("script").unwrap()).count(),
            1
        );
    }
}
