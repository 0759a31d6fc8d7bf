use crate::model::{ActionAverage, AddonEntry};
use crate::render::Report;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ActionView<'a> {
    label: &'a str,
    #[serde(flatten)]
    average: &'a ActionAverage,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    total_time: f64,
    runs: usize,
    rejected_lines: usize,
    /// Ascending by elapsed average.
    actions: Vec<ActionView<'a>>,
    /// Ascending by total.
    addons: Vec<&'a AddonEntry>,
}

/// Pretty-printed JSON with the same ordering as the text report.
pub fn render_json_report(report: &Report<'_>) -> serde_json::Result<String> {
    let view = JsonReport {
        total_time: report.total_time,
        runs: report.log.runs,
        rejected_lines: report.log.rejected,
        actions: report
            .log
            .sorted_by_elapsed()
            .into_iter()
            .map(|(label, average)| ActionView { label, average })
            .collect(),
        addons: report.addons.sorted_by_total(),
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{group, parse_str};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn report_shape() {
        let log = parse_str(
            "\
VIM STARTING
0.100 2.500: sourcing /home/u/.vim/addons/foo/a.vim
0.200 1.000 --- VIM STARTED ---
",
        )
        .unwrap();
        let addons = group(&log.actions, &"/home/u/.vim/addons/".into());
        let report = Report::new(&log, &addons).unwrap();

        let value: Value = serde_json::from_str(&render_json_report(&report).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "total_time": 0.2,
                "runs": 1,
                "rejected_lines": 0,
                "actions": [{
                    "label": "sourcing /home/u/.vim/addons/foo/a.vim",
                    "time_avg": 0.1,
                    "elapsed_avg": 2.5,
                    "samples": 1,
                }],
                "addons": [{
                    "name": "foo",
                    "files": [{ "path": "a.vim", "elapsed_avg": 2.5 }],
                    "total": 2.5,
                }],
            })
        );
    }
}
