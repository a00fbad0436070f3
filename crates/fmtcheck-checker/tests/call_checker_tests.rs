mod common;

use common::{FILE, Fixture, LOGGER, checked, messages};
use fmtcheck_ast::TypeUnion;
use fmtcheck_checker::{CallCheck, CheckerOptions, SkipReason};
use fmtcheck_common::DiagnosticCategory;
use fmtcheck_common::diagnostics::diagnostic_codes;
use fmtcheck_index::{ClassDecl, IndexAvailability};

#[test]
fn no_placeholders_with_argument_reports_two() {
    let mut fx = Fixture::new(r#"$logger->errorf("no placeholders", $x);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""no placeholders""#);
    let x = fx.var_nth("$x", 0);
    let call = fx.call(logger, "errorf", vec![format, x]);
    let x_range = fx.range_of("$x");
    let name_range = fx.range_of("errorf");

    let diagnostics = checked(fx.check(call));
    assert_eq!(
        messages(&diagnostics),
        vec![
            "No format item found in first parameter but call has more than one argument",
            "Invalid format function usage",
        ]
    );
    assert_eq!(diagnostics[0].range(), x_range);
    assert_eq!(diagnostics[0].code, diagnostic_codes::NO_FORMAT_ITEM_FOUND);
    assert_eq!(diagnostics[1].range(), name_range);
}

#[test]
fn matching_arguments_report_nothing() {
    let mut fx = Fixture::new(r#"$logger->errorf("%d items, %s", $count, $name);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%d items, %s""#);
    let count = fx.var_nth("$count", 0);
    let name = fx.var_nth("$name", 0);
    let call = fx.call(logger, "errorf", vec![format, count, name]);

    assert_eq!(fx.check(call), CallCheck::Checked(Vec::new()));
}

#[test]
fn missing_argument_reports_unused_item_at_placeholder() {
    let mut fx = Fixture::new(r#"$logger->errorf("%d items, %s", $count);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%d items, %s""#);
    let count = fx.var_nth("$count", 0);
    let call = fx.call(logger, "errorf", vec![format, count]);
    let placeholder = fx.range_of("%s");
    let name_range = fx.range_of("errorf");

    let diagnostics = fx.validate(call);
    assert_eq!(
        messages(&diagnostics),
        vec!["Unused format item", "Invalid format function usage"]
    );
    assert_eq!(diagnostics[0].range(), placeholder);
    assert_eq!(diagnostics[1].range(), name_range);
}

#[test]
fn excess_argument_reports_expected_count() {
    let mut fx = Fixture::new(r#"$logger->errorf("%d", $a, $b);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%d""#);
    let a = fx.var_nth("$a", 0);
    let b = fx.var_nth("$b", 0);
    let call = fx.call(logger, "errorf", vec![format, a, b]);
    let b_range = fx.range_of("$b");

    let diagnostics = fx.validate(call);
    assert_eq!(
        messages(&diagnostics),
        vec![
            "Format line expecting only 1 parameters",
            "Invalid format function usage"
        ]
    );
    assert_eq!(diagnostics[0].range(), b_range);
}

#[test]
fn each_missing_placeholder_is_reported() {
    let mut fx = Fixture::new(r#"$logger->warningf("%s: %05d of %1.5f");"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%s: %05d of %1.5f""#);
    let call = fx.call(logger, "warningf", vec![format]);
    let ranges = [fx.range_of("%s"), fx.range_of("%05d"), fx.range_of("%1.5f")];

    let diagnostics = fx.validate(call);
    assert_eq!(diagnostics.len(), 4);
    for (diagnostic, range) in diagnostics.iter().zip(ranges) {
        assert_eq!(diagnostic.message_text, "Unused format item");
        assert_eq!(diagnostic.range(), range);
    }
    assert_eq!(diagnostics[3].message_text, "Invalid format function usage");
}

#[test]
fn each_excess_argument_is_reported() {
    let mut fx = Fixture::new(r#"$logger->infof("%s", $a, $b, $c);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%s""#);
    let args: Vec<_> = ["$a", "$b", "$c"]
        .into_iter()
        .map(|name| fx.var_nth(name, 0))
        .collect();
    let mut arguments = vec![format];
    arguments.extend(args);
    let call = fx.call(logger, "infof", arguments);
    let (b, c) = (fx.range_of("$b"), fx.range_of("$c"));

    let diagnostics = fx.validate(call);
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics[0].range(), b);
    assert_eq!(diagnostics[1].range(), c);
    assert_eq!(diagnostics[2].code, diagnostic_codes::INVALID_FORMAT_FUNCTION_USAGE);
}

#[test]
fn invalid_specifier_still_counts_as_placeholder() {
    let mut fx = Fixture::new(r#"$logger->noticef("100% done, %d left", $n);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""100% done, %d left""#);
    let n = fx.var_nth("$n", 0);
    let call = fx.call(logger, "noticef", vec![format, n]);
    let placeholder = fx.range_of("%d");

    let diagnostics = fx.validate(call);
    assert_eq!(
        messages(&diagnostics),
        vec!["Unused format item", "Invalid format function usage"]
    );
    assert_eq!(diagnostics[0].range(), placeholder);
}

#[test]
fn escaped_percent_is_not_a_placeholder() {
    let mut fx = Fixture::new(r#"$logger->debugf("100%% done", $x);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""100%% done""#);
    let x = fx.var_nth("$x", 0);
    let call = fx.call(logger, "debugf", vec![format, x]);

    let diagnostics = fx.validate(call);
    assert_eq!(diagnostics[0].code, diagnostic_codes::NO_FORMAT_ITEM_FOUND);
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn literal_without_arguments_and_without_placeholders_is_fine() {
    let mut fx = Fixture::new(r#"$logger->fatalf("done");"#);
    let logger = fx.logger();
    let format = fx.literal(r#""done""#);
    let call = fx.call(logger, "fatalf", vec![format]);

    assert_eq!(fx.check(call), CallCheck::Checked(Vec::new()));
}

#[test]
fn diagnostics_are_warnings_on_the_checked_file() {
    let mut fx = Fixture::new(r#"$logger->errorf("%d");"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%d""#);
    let call = fx.call(logger, "errorf", vec![format]);

    for diagnostic in fx.validate(call) {
        assert_eq!(diagnostic.category, DiagnosticCategory::Warning);
        assert_eq!(diagnostic.file, FILE);
    }
}

#[test]
fn call_without_arguments_is_skipped() {
    let mut fx = Fixture::new("$logger->errorf();");
    let logger = fx.logger();
    let call = fx.call(logger, "errorf", Vec::new());

    assert_eq!(fx.check(call), CallCheck::Skipped(SkipReason::NoArguments));
}

#[test]
fn non_literal_format_is_skipped_even_when_foldable() {
    let mut fx = Fixture::new(r#"const FMT = "%d"; $logger->errorf(FMT);"#);
    let literal = fx.literal(r#""%d""#);
    let decl_range = fx.range_of(r#"FMT = "%d""#);
    let decl = fx.builder.constant_declaration("FMT", literal, decl_range);
    fx.index.add_constant(fmtcheck_index::ConstantDecl {
        fqn: "\\FMT".into(),
        name: "FMT".into(),
        declaration: decl,
    });
    let logger = fx.logger();
    let reference_range = fx.range_of("FMT)");
    let reference = fx.builder.constant_reference(
        "\\FMT",
        "FMT",
        fmtcheck_ast::TextRange::new(reference_range.pos, reference_range.pos + 3),
    );
    let call = fx.call(logger, "errorf", vec![reference]);

    assert_eq!(fx.check(call), CallCheck::Skipped(SkipReason::DynamicFormat));
}

#[test]
fn receiver_of_other_type_is_skipped() {
    let mut fx = Fixture::new(r#"$mailer->errorf("%d");"#);
    let mailer = fx.var("$mailer", &["\\Mail\\Mailer"]);
    let format = fx.literal(r#""%d""#);
    let call = fx.call(mailer, "errorf", vec![format]);

    assert_eq!(fx.check(call), CallCheck::Skipped(SkipReason::ReceiverNotLogger));
}

#[test]
fn receiver_of_unknown_type_is_skipped() {
    let mut fx = Fixture::new(r#"$thing->errorf("%d");"#);
    let thing = fx.var("$thing", &["?"]);
    let format = fx.literal(r#""%d""#);
    let call = fx.call(thing, "errorf", vec![format]);

    assert_eq!(fx.check(call), CallCheck::Skipped(SkipReason::ReceiverNotLogger));
}

#[test]
fn non_format_method_is_skipped() {
    let mut fx = Fixture::new(r#"$logger->error("%d");"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%d""#);
    let call = fx.call(logger, "error", vec![format]);

    assert_eq!(fx.check(call), CallCheck::Skipped(SkipReason::UnknownMethod));
}

#[test]
fn non_call_node_is_skipped() {
    let mut fx = Fixture::new(r#""%d""#);
    let literal = fx.literal(r#""%d""#);

    assert_eq!(fx.check(literal), CallCheck::Skipped(SkipReason::NotAMethodCall));
}

#[test]
fn index_not_ready_abstains_regardless_of_call_shape() {
    let mut fx = Fixture::new(r#"$logger->errorf("no placeholders", $x);"#);
    let logger = fx.logger();
    let format = fx.literal(r#""no placeholders""#);
    let x = fx.var_nth("$x", 0);
    let call = fx.call(logger, "errorf", vec![format, x]);
    fx.index.set_availability(IndexAvailability::NotReady);

    assert_eq!(fx.check(call), CallCheck::Abstained);
}

#[test]
fn index_not_ready_validate_is_empty() {
    let mut fx = Fixture::new(r#"$logger->errorf("%d");"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%d""#);
    let call = fx.call(logger, "errorf", vec![format]);
    fx.index.set_availability(IndexAvailability::NotReady);

    assert!(fx.validate(call).is_empty());
}

#[test]
fn receiver_resolved_through_method_signature() {
    let mut fx = Fixture::new(r#"$this->logger()->errorf("%d");"#);
    fx.index.add_class(ClassDecl::new("\\App\\Service").with_method("logger", TypeUnion::new([LOGGER])));
    let this = fx.var("$this", &["\\App\\Service"]);
    let receiver = fx.call_typed(this, "logger", Vec::new(), &["#M#C\\App\\Service.logger"]);
    let format = fx.literal(r#""%d""#);
    let call = fx.call(receiver, "errorf", vec![format]);

    let diagnostics = fx.validate(call);
    assert_eq!(
        messages(&diagnostics),
        vec!["Unused format item", "Invalid format function usage"]
    );
}

#[test]
fn custom_options_change_the_recognised_calls() {
    let options = CheckerOptions {
        logger_interface: "\\App\\Log".into(),
        format_methods: vec!["tracef".into()],
    };

    let mut fx = Fixture::new(r#"$log->tracef("%s");"#);
    let log = fx.var("$log", &["\\App\\Log"]);
    let format = fx.literal(r#""%s""#);
    let call = fx.call(log, "tracef", vec![format]);
    assert_eq!(fx.check_with(call, options.clone()).into_diagnostics().len(), 2);

    let mut fx = Fixture::new(r#"$logger->errorf("%s");"#);
    let logger = fx.logger();
    let format = fx.literal(r#""%s""#);
    let call = fx.call(logger, "errorf", vec![format]);
    assert_eq!(
        fx.check_with(call, options),
        CallCheck::Skipped(SkipReason::ReceiverNotLogger)
    );
}

#[test]
fn placeholder_after_multibyte_text_is_anchored_in_bytes() {
    let mut fx = Fixture::new(r#"$logger->errorf("überall %s");"#);
    let logger = fx.logger();
    let format = fx.literal(r#""überall %s""#);
    let call = fx.call(logger, "errorf", vec![format]);
    let placeholder = fx.range_of("%s");

    let diagnostics = fx.validate(call);
    assert_eq!(diagnostics[0].range(), placeholder);
}
