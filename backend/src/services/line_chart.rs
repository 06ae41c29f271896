use chrono::NaiveDate;
use log::debug;

use crate::api::{ChartMargin, LineChartData, LineChartLayout, LineSeries};
use crate::dataset::Dataset;
use crate::models::Metric;

/// X axis title ("date").
pub const X_AXIS_TITLE: &str = "日期";
/// Y axis title ("value").
pub const Y_AXIS_TITLE: &str = "数据";
/// Panel height in pixels, shared by both charts.
pub const CHART_HEIGHT: u32 = 300;
/// Margin on every side of both charts, in pixels.
pub const CHART_MARGIN: ChartMargin = ChartMargin::uniform(50);

const LINE_MODE: &str = "lines";

/// Fixed layout of the line chart panel.
pub fn line_chart_layout() -> LineChartLayout {
    LineChartLayout {
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
        height: CHART_HEIGHT,
        margin: CHART_MARGIN,
    }
}

/// Build one line series per selected metric, in selection order.
///
/// Every series has exactly one point per record, in dataset order. An empty
/// selection produces a chart with no series.
pub fn build_line_chart(dataset: &Dataset, metrics: &[Metric]) -> LineChartData {
    let dates: Vec<NaiveDate> = dataset.records().iter().map(|r| r.date).collect();

    let series = metrics
        .iter()
        .map(|&metric| LineSeries {
            metric,
            name: metric.label().to_string(),
            mode: LINE_MODE.to_string(),
            x: dates.clone(),
            y: dataset.records().iter().map(|r| r.value(metric)).collect(),
        })
        .collect::<Vec<_>>();

    debug!(
        "Built line chart: {} series x {} points",
        series.len(),
        dates.len()
    );

    LineChartData {
        series,
        layout: line_chart_layout(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_dataset() -> Dataset {
        let day = |d: u32| chrono::NaiveDate::from_ymd_opt(2023, 1, d).unwrap();
        Dataset::from_records(vec![
            Record::new(day(2))
                .with(Metric::ReadCount, 10.0)
                .with(Metric::ReadUsers, 7.0),
            Record::new(day(3))
                .with(Metric::ReadCount, 12.0)
                .with(Metric::ReadUsers, 9.0),
            Record::new(day(4))
                .with(Metric::ReadCount, 4.0)
                .with(Metric::ShareCount, 1.0),
        ])
    }

    #[test]
    fn test_one_series_per_metric() {
        let dataset = sample_dataset();
        let chart = build_line_chart(&dataset, &[Metric::ReadCount, Metric::ShareCount]);

        assert_eq!(chart.series.len(), 2);
        for series in &chart.series {
            assert_eq!(series.x.len(), dataset.len());
            assert_eq!(series.y.len(), dataset.len());
            assert_eq!(series.mode, "lines");
        }
    }

    #[test]
    fn test_series_follow_selection_order() {
        let dataset = sample_dataset();
        let chart = build_line_chart(&dataset, &[Metric::ShareCount, Metric::ReadCount]);
        assert_eq!(chart.series[0].metric, Metric::ShareCount);
        assert_eq!(chart.series[0].name, "分享次数");
        assert_eq!(chart.series[1].metric, Metric::ReadCount);
    }

    #[test]
    fn test_values_drawn_directly_from_records() {
        let dataset = sample_dataset();
        let chart = build_line_chart(&dataset, &[Metric::ReadCount]);
        let series = &chart.series[0];

        assert_eq!(series.y, vec![10.0, 12.0, 4.0]);
        assert_eq!(
            series.x,
            dataset.records().iter().map(|r| r.date).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_selection_is_blank_chart() {
        let dataset = sample_dataset();
        let chart = build_line_chart(&dataset, &[]);
        assert!(chart.series.is_empty());
        assert_eq!(chart.layout.height, CHART_HEIGHT);
    }

    #[test]
    fn test_every_subset_has_full_length_series() {
        let dataset = sample_dataset();
        // Walk all 2^9 - 1 non-empty subsets of the catalog.
        for mask in 1u32..(1 << Metric::ALL.len()) {
            let selection: Vec<Metric> = Metric::ALL
                .iter()
                .copied()
                .filter(|m| mask & (1 << m.index()) != 0)
                .collect();
            let chart = build_line_chart(&dataset, &selection);
            assert_eq!(chart.series.len(), selection.len());
            assert!(chart.series.iter().all(|s| s.y.len() == dataset.len()));
        }
    }

    #[test]
    fn test_fixed_layout() {
        let layout = line_chart_layout();
        assert_eq!(layout.x_axis_title, "日期");
        assert_eq!(layout.y_axis_title, "数据");
        assert_eq!(layout.height, 300);
        assert_eq!(layout.margin, ChartMargin::uniform(50));
    }
}
