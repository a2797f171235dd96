#[cfg(test)]
mod tests {
    use crate::models::outcome::Outcome;
    use crate::models::spec::Spec;
    use crate::report::{
        document_group, document_spec, quantify, report_lines, run_and_report,
        write_documentation,
    };

    fn spec(group: &str, requirement: &str, outcome: Outcome) -> Spec {
        Spec::new(group, requirement, outcome)
    }

    #[test]
    fn successful_spec_renders_one_line() {
        let lines = document_spec(&spec("g", "x", Outcome::Success));
        assert_eq!(lines, vec![" - x".to_string()]);
    }

    #[test]
    fn failed_spec_renders_detail_in_parentheses() {
        let lines = document_spec(&spec("g", "x", Outcome::Fail("whatever".to_string())));
        assert_eq!(lines, vec![" x x (whatever)".to_string()]);
    }

    #[test]
    fn failed_spec_without_detail_omits_parentheses() {
        let lines = document_spec(&spec("g", "x", Outcome::Fail(String::new())));
        assert_eq!(lines, vec![" x x".to_string()]);
    }

    #[test]
    fn pending_spec_renders_message_on_second_line() {
        let lines = document_spec(&spec("g", "x", Outcome::Pending("msg".to_string())));
        assert_eq!(lines, vec![" - x".to_string(), "     # msg".to_string()]);
    }

    #[test]
    fn pending_spec_with_empty_message_omits_second_line() {
        let lines = document_spec(&spec("g", "x", Outcome::Pending(String::new())));
        assert_eq!(lines, vec![" - x".to_string()]);
    }

    #[test]
    fn group_starts_with_shared_label() {
        let lines = document_group(&[
            spec("arithmetic", "adds", Outcome::Success),
            spec("arithmetic", "subtracts", Outcome::Fail(String::new())),
        ]);
        assert_eq!(
            lines,
            vec![
                "arithmetic".to_string(),
                " - adds".to_string(),
                " x subtracts".to_string(),
            ]
        );
    }

    #[test]
    fn group_line_count_is_specs_plus_pendings_plus_header() {
        let specs = [
            spec("g", "a", Outcome::Success),
            spec("g", "b", Outcome::Pending("later".to_string())),
            spec("g", "c", Outcome::Fail("oops".to_string())),
            spec("g", "d", Outcome::Pending("eventually".to_string())),
        ];
        let pendings = specs
            .iter()
            .filter(|spec| spec.outcome().is_pending())
            .count();
        assert_eq!(document_group(&specs).len(), specs.len() + pendings + 1);
    }

    #[test]
    fn quantify_singularizes_exactly_one() {
        assert_eq!(quantify(1, "thing"), "1 thing");
    }

    #[test]
    fn quantify_pluralizes_other_counts() {
        assert_eq!(quantify(2, "thing"), "2 things");
        assert_eq!(quantify(0, "thing"), "0 things");
    }

    #[test]
    fn full_report_has_summary_and_fixed_duration() {
        let specs = [
            spec("g", "a", Outcome::Success),
            spec("g", "b", Outcome::Fail(String::new())),
            spec("g", "c", Outcome::Pending(String::new())),
        ];
        let lines = report_lines(&specs);
        assert!(lines.contains(&"Finished in 0.0000 seconds".to_string()));
        assert_eq!(lines.last().unwrap(), "3 examples, 1 failure");
    }

    #[test]
    fn summary_pluralizes_failures() {
        let specs = [
            spec("g", "a", Outcome::Fail(String::new())),
            spec("g", "b", Outcome::Fail(String::new())),
        ];
        let lines = report_lines(&specs);
        assert_eq!(lines.last().unwrap(), "2 examples, 2 failures");
    }

    #[test]
    fn empty_run_reports_zero_examples() {
        let lines = report_lines(&[]);
        assert_eq!(lines.last().unwrap(), "0 examples, 0 failures");
    }

    #[test]
    fn groups_are_separated_by_blank_lines_in_declaration_order() {
        let specs = [
            spec("alpha", "a", Outcome::Success),
            spec("beta", "b", Outcome::Success),
        ];
        let lines = report_lines(&specs);
        assert_eq!(
            lines[..5],
            [
                "alpha".to_string(),
                " - a".to_string(),
                String::new(),
                "beta".to_string(),
                " - b".to_string(),
            ]
        );
    }

    #[test]
    fn non_contiguous_equal_labels_stay_separate_blocks() {
        let specs = [
            spec("alpha", "a", Outcome::Success),
            spec("beta", "b", Outcome::Success),
            spec("alpha", "c", Outcome::Success),
        ];
        let lines = report_lines(&specs);
        let alpha_headers = lines.iter().filter(|line| *line == "alpha").count();
        assert_eq!(alpha_headers, 2);
        assert_eq!(lines[3], "beta");
        assert_eq!(lines[6], "alpha");
        assert_eq!(lines[7], " - c");
    }

    #[test]
    fn report_is_deterministic_across_runs() {
        let specs = [
            spec("alpha", "a", Outcome::Success),
            spec("alpha", "b", Outcome::Fail("detail".to_string())),
            spec("beta", "c", Outcome::Pending("msg".to_string())),
        ];
        assert_eq!(report_lines(&specs), report_lines(&specs));
    }

    #[test]
    fn run_and_report_writes_one_terminated_line_per_report_line() {
        let specs = [
            spec("g", "a", Outcome::Success),
            spec("g", "b", Outcome::Fail("oops".to_string())),
        ];
        let mut destination = Vec::new();
        run_and_report(&mut destination, &specs).unwrap();
        let written = String::from_utf8(destination).unwrap();
        let expected = report_lines(&specs).join("\n") + "\n";
        assert_eq!(written, expected);
    }

    #[test]
    fn documentation_mode_prefixes_the_preamble() {
        let specs = [spec("g", "a", Outcome::Success)];
        let mut destination = Vec::new();
        write_documentation(&mut destination, &specs).unwrap();
        let written = String::from_utf8(destination).unwrap();
        assert!(written.starts_with("minispec\n========\n"));
        assert!(written.contains("\ng\n - a\n"));
        assert!(written.ends_with("1 example, 0 failures\n"));
    }
}
