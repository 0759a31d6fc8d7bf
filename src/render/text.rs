use crate::render::Report;
use std::fmt::Write;

/// Plain-text report: actions, then addons, both ascending by time.
pub fn render_text_report(report: &Report<'_>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "total   elapsed   source file")?;
    for (label, avg) in report.log.sorted_by_elapsed() {
        writeln!(out, "{:07.3} {:07.3} - {}", avg.elapsed_avg, avg.time_avg, label)?;
    }
    writeln!(out)?;

    for addon in report.addons.sorted_by_total() {
        writeln!(out, "{}", addon.name)?;
        for file in &addon.files {
            writeln!(out, "{:07.3} - {}", file.elapsed_avg, file.path)?;
        }
        writeln!(out, "{:07.3} total", addon.total)?;
        writeln!(out)?;
    }

    writeln!(out, "{:07.3} total", report.total_time)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{group, parse_str};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_sections_in_order() {
        let log = parse_str(
            "\
times in msec
000.001  000.001: --- VIM STARTING ---
001.000  000.500  000.400: sourcing /a/foo/plugin/foo.vim
002.000  010.250  010.000: sourcing /a/bar/plugin/bar.vim
003.000  000.100  000.100: sourcing /a/foo/autoload/foo.vim
120.500  000.004: --- VIM STARTED ---
",
        )
        .unwrap();
        let addons = group(&log.actions, &"/a".into());
        let report = Report::new(&log, &addons).unwrap();

        assert_eq!(
            render_text_report(&report).unwrap(),
            "\
total   elapsed   source file
000.100 003.000 - sourcing /a/foo/autoload/foo.vim
000.500 001.000 - sourcing /a/foo/plugin/foo.vim
010.250 002.000 - sourcing /a/bar/plugin/bar.vim

foo
000.500 - plugin/foo.vim
000.100 - autoload/foo.vim
000.600 total

bar
010.250 - plugin/bar.vim
010.250 total

120.500 total
"
        );
    }
}
